//! Timer-driven side of the capture form
//!
//! The driver runs the submission (latency) and auto-reset timers as tokio
//! tasks that report back over a channel. The UI loop drains the channel
//! with [`CaptureDriver::poll`]. At most one timer task is outstanding; it is
//! aborted whenever a newer submission or a manual reset supersedes it, and
//! any event that still slips through is dropped by the form's cycle check.

use super::sink::{SubmissionReceipt, SubmissionSink, SubmitError};
use crate::state::{CaptureError, CaptureForm};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::AbortHandle;

/// Completion notices from timer tasks
#[derive(Debug)]
pub enum CaptureEvent {
    /// The sink finished handling the submission started in `cycle`
    Settled {
        cycle: u64,
        result: Result<SubmissionReceipt, SubmitError>,
    },
    /// The confirmation for `cycle` has been shown long enough
    AutoResetElapsed { cycle: u64 },
}

/// Drives a [`CaptureForm`] through its timed transitions
pub struct CaptureDriver {
    sink: Arc<dyn SubmissionSink>,
    auto_reset_after: Duration,
    events_tx: UnboundedSender<CaptureEvent>,
    events_rx: UnboundedReceiver<CaptureEvent>,
    timer: Option<AbortHandle>,
}

impl CaptureDriver {
    pub fn new(sink: Arc<dyn SubmissionSink>, auto_reset_after: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            sink,
            auto_reset_after,
            events_tx,
            events_rx,
            timer: None,
        }
    }

    /// Submit the form. Must be called from within a tokio runtime.
    pub fn submit(&mut self, form: &mut CaptureForm) -> Result<(), CaptureError> {
        let (submission, cycle) = form.begin_submit()?;
        self.cancel_timer();

        tracing::info!(cycle, role = submission.role.as_str(), "Submitting early access signup");

        let sink = Arc::clone(&self.sink);
        let events_tx = self.events_tx.clone();
        let handle = tokio::spawn(async move {
            let result = sink.submit(&submission).await;
            let _ = events_tx.send(CaptureEvent::Settled { cycle, result });
        });
        self.timer = Some(handle.abort_handle());
        Ok(())
    }

    /// Leave the confirmation (or error) view immediately
    pub fn reset(&mut self, form: &mut CaptureForm) -> Result<(), CaptureError> {
        form.reset()?;
        self.cancel_timer();
        tracing::info!(cycle = form.cycle(), "Capture form reset by user");
        Ok(())
    }

    /// Apply every event that is ready without waiting. Returns true if the
    /// form changed.
    pub fn poll(&mut self, form: &mut CaptureForm) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            changed |= self.apply(form, event);
        }
        changed
    }

    /// Wait for the next timer event
    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<CaptureEvent> {
        self.events_rx.recv().await
    }

    /// Apply a single event. Stale events are ignored and return false.
    pub fn apply(&mut self, form: &mut CaptureForm, event: CaptureEvent) -> bool {
        match event {
            CaptureEvent::Settled {
                cycle,
                result: Ok(receipt),
            } => {
                if !form.succeed(cycle) {
                    tracing::debug!(cycle, "Ignoring stale submission result");
                    return false;
                }
                tracing::info!(
                    cycle,
                    receipt = %receipt.id,
                    role = receipt.role.as_str(),
                    submitted_at = %receipt.submitted_at,
                    "Signup accepted"
                );
                self.schedule_auto_reset(cycle);
                true
            }
            CaptureEvent::Settled {
                cycle,
                result: Err(err),
            } => {
                if !form.fail(cycle, err.user_message()) {
                    tracing::debug!(cycle, "Ignoring stale submission failure");
                    return false;
                }
                tracing::warn!(cycle, "Signup failed: {err}");
                self.timer = None;
                true
            }
            CaptureEvent::AutoResetElapsed { cycle } => {
                if !form.auto_reset(cycle) {
                    tracing::debug!(cycle, "Ignoring stale auto-reset");
                    return false;
                }
                tracing::info!(cycle, "Confirmation auto-reset");
                self.timer = None;
                true
            }
        }
    }

    /// Whether a timer task is still running
    #[cfg(test)]
    pub fn has_outstanding_timer(&self) -> bool {
        self.timer.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    fn schedule_auto_reset(&mut self, cycle: u64) {
        self.cancel_timer();
        let events_tx = self.events_tx.clone();
        let after = self.auto_reset_after;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let _ = events_tx.send(CaptureEvent::AutoResetElapsed { cycle });
        });
        self.timer = Some(handle.abort_handle());
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
        }
    }
}

impl Drop for CaptureDriver {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
