//! Submission sink abstraction and the simulated implementation

use crate::state::{Role, Submission};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Why a sink did not accept a submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("signup service unavailable: {0}")]
    Unavailable(String),
}

impl SubmitError {
    /// Message suitable for showing next to the form
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(reason) => reason.clone(),
            Self::Unavailable(_) => {
                "We couldn't reach the signup service. Please try again.".to_string()
            }
        }
    }
}

/// Acknowledgement returned for an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub role: Role,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new(role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            submitted_at: Utc::now(),
        }
    }
}

/// Accepts early-access signups
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Hand off a submission, resolving once it has been accepted or rejected
    async fn submit(&self, submission: &Submission) -> Result<SubmissionReceipt, SubmitError>;
}

/// Stands in for a signup service: waits out the configured latency, then
/// accepts every submission. Nothing is sent anywhere.
#[derive(Debug, Clone)]
pub struct SimulatedSink {
    latency: Duration,
}

impl SimulatedSink {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SubmissionSink for SimulatedSink {
    async fn submit(&self, submission: &Submission) -> Result<SubmissionReceipt, SubmitError> {
        tokio::time::sleep(self.latency).await;
        Ok(SubmissionReceipt::new(submission.role))
    }
}
