//! Email capture submission lifecycle

mod driver;
mod sink;

pub use driver::CaptureDriver;
pub use sink::{SimulatedSink, SubmissionSink};

#[cfg(test)]
pub use sink::{MockSubmissionSink, SubmissionReceipt, SubmitError};
