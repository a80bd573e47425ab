//! Trait abstraction for the submission step to enable mocking in tests

use crate::state::FormValues;
use async_trait::async_trait;
use thiserror::Error;

/// Why a submission did not complete
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The receiving side refused the registration
    #[allow(dead_code)] // the simulated submitter always accepts
    #[error("registration was rejected: {0}")]
    Rejected(String),
    /// The submission task stopped before reporting an outcome
    #[error("submission was interrupted")]
    Interrupted,
}

/// Delivers a validated registration somewhere
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Submit the full set of values. Resolves once the submission is done.
    async fn submit(&self, values: FormValues) -> Result<(), SubmitError>;
}
