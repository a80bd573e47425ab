//! Submission step for a validated registration
//!
//! The form controller decides *whether* to submit; this module performs
//! the submission off the event loop and reports the outcome back.

mod simulated;
mod task;
mod traits;

pub use simulated::SimulatedSubmitter;
pub use task::PendingSubmission;
pub use traits::{SubmitError, Submitter};

#[cfg(test)]
pub use traits::MockSubmitter;
