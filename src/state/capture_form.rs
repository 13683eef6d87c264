//! Email capture form state machine
//!
//! The form moves through `Idle -> Pending -> Succeeded -> Idle`, with a
//! `Failed` branch out of `Pending` when a submission is rejected. Every
//! submit and every manual reset advances the form's cycle number; timer
//! callbacks carry the cycle they were started under and are ignored once it
//! is stale.

use super::field::FormField;
use super::validation::is_valid_email;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inline message shown when the browser-style email check fails
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Who is signing up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Investor,
    Farmer,
}

impl Role {
    /// Both roles in display order
    pub const ALL: [Role; 2] = [Role::Investor, Role::Farmer];

    pub fn toggle(&self) -> Self {
        match self {
            Self::Investor => Self::Farmer,
            Self::Farmer => Self::Investor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Investor => "investor",
            Self::Farmer => "farmer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Investor => "I'm an Investor",
            Self::Farmer => "I'm a Farmer",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Investor => "Ready to make impact",
            Self::Farmer => "Seeking capital support",
        }
    }
}

/// Submission lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    /// The sink rejected the submission; holds the user-facing message
    Failed(String),
}


/// Snapshot handed to a submission sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub email: String,
    pub role: Role,
}

/// Which control of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureFocus {
    #[default]
    Email,
    Role,
    Submit,
}

impl CaptureFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::Email => Self::Role,
            Self::Role => Self::Submit,
            Self::Submit => Self::Email,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Email => Self::Submit,
            Self::Role => Self::Email,
            Self::Submit => Self::Role,
        }
    }
}

/// Reasons a submit or reset request is refused. None of them change state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("email address is required")]
    EmptyEmail,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("a submission is already in progress")]
    SubmissionInProgress,
    #[error("confirmation is showing; reset before submitting again")]
    ConfirmationShowing,
    #[error("nothing to reset")]
    NothingToReset,
}

/// The email capture form
#[derive(Debug, Clone)]
pub struct CaptureForm {
    pub email: FormField,
    pub focus: CaptureFocus,
    role: Role,
    phase: SubmissionPhase,
    cycle: u64,
    validation_message: Option<String>,
}

impl Default for CaptureForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email Address", "your@email.com"),
            focus: CaptureFocus::default(),
            role: Role::default(),
            phase: SubmissionPhase::Idle,
            cycle: 0,
            validation_message: None,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    /// Current cycle number
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.phase == SubmissionPhase::Pending
    }

    pub fn is_succeeded(&self) -> bool {
        self.phase == SubmissionPhase::Succeeded
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Idle | SubmissionPhase::Failed(_))
            && !self.email.as_text().trim().is_empty()
    }

    /// Type a character into the email field
    pub fn push_char(&mut self, c: char) {
        if self.is_succeeded() {
            return;
        }
        self.email.push_char(c);
        self.after_edit();
    }

    /// Delete the last character of the email field
    pub fn pop_char(&mut self) {
        if self.is_succeeded() {
            return;
        }
        self.email.pop_char();
        self.after_edit();
    }

    fn after_edit(&mut self) {
        self.validation_message = None;
        if matches!(self.phase, SubmissionPhase::Failed(_)) {
            self.phase = SubmissionPhase::Idle;
        }
    }

    /// Select a role. Exactly one role is selected at any time.
    pub fn select_role(&mut self, role: Role) {
        if !self.is_succeeded() {
            self.role = role;
        }
    }

    pub fn toggle_role(&mut self) {
        self.select_role(self.role.toggle());
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Start a submission.
    ///
    /// On success the form is `Pending` and the returned cycle identifies this
    /// attempt. A malformed address sets the inline validation message.
    pub fn begin_submit(&mut self) -> Result<(Submission, u64), CaptureError> {
        match self.phase {
            SubmissionPhase::Pending => return Err(CaptureError::SubmissionInProgress),
            SubmissionPhase::Succeeded => return Err(CaptureError::ConfirmationShowing),
            SubmissionPhase::Idle | SubmissionPhase::Failed(_) => {}
        }

        let email = self.email.as_text().trim();
        if email.is_empty() {
            return Err(CaptureError::EmptyEmail);
        }
        if !is_valid_email(email) {
            self.validation_message = Some(INVALID_EMAIL_MESSAGE.to_string());
            return Err(CaptureError::InvalidEmail);
        }

        let submission = Submission {
            email: email.to_string(),
            role: self.role,
        };
        self.validation_message = None;
        self.phase = SubmissionPhase::Pending;
        self.cycle += 1;
        Ok((submission, self.cycle))
    }

    /// The submission for `cycle` was accepted. Returns true if applied.
    pub fn succeed(&mut self, cycle: u64) -> bool {
        if cycle != self.cycle || !self.is_pending() {
            return false;
        }
        self.email.clear();
        self.focus = CaptureFocus::Email;
        self.phase = SubmissionPhase::Succeeded;
        true
    }

    /// The submission for `cycle` was rejected. The email is kept for retry.
    pub fn fail(&mut self, cycle: u64, message: impl Into<String>) -> bool {
        if cycle != self.cycle || !self.is_pending() {
            return false;
        }
        self.phase = SubmissionPhase::Failed(message.into());
        true
    }

    /// The auto-reset timer for `cycle` elapsed. Returns true if applied.
    pub fn auto_reset(&mut self, cycle: u64) -> bool {
        if cycle != self.cycle || !self.is_succeeded() {
            return false;
        }
        self.phase = SubmissionPhase::Idle;
        true
    }

    /// Manual reset from the confirmation or error view.
    ///
    /// Advances the cycle so any timer still in flight for the previous
    /// cycle is ignored when it fires.
    pub fn reset(&mut self) -> Result<(), CaptureError> {
        match self.phase {
            SubmissionPhase::Succeeded | SubmissionPhase::Failed(_) => {
                self.phase = SubmissionPhase::Idle;
                self.cycle += 1;
                Ok(())
            }
            SubmissionPhase::Idle | SubmissionPhase::Pending => Err(CaptureError::NothingToReset),
        }
    }
}
