//! In-flight submission running on the tokio runtime

use super::traits::{SubmitError, Submitter};
use crate::state::FormValues;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::AbortHandle;

/// Handle to a submission running in the background.
///
/// The outcome is collected with [`PendingSubmission::try_outcome`] from the
/// event loop. Dropping the handle aborts the task, so a submission that
/// outlives its form never reports back.
#[derive(Debug)]
pub struct PendingSubmission {
    outcome: oneshot::Receiver<Result<(), SubmitError>>,
    abort: AbortHandle,
    started_at: Instant,
}

impl PendingSubmission {
    /// Start submitting `values`. Must be called from within a tokio runtime.
    pub fn spawn(submitter: Arc<dyn Submitter>, values: FormValues) -> Self {
        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            let result = submitter.submit(values).await;
            // The receiver is gone when the form was torn down
            let _ = tx.send(result);
        });
        Self {
            outcome: rx,
            abort: handle.abort_handle(),
            started_at: Instant::now(),
        }
    }

    /// Non-blocking check for the outcome
    pub fn try_outcome(&mut self) -> Option<Result<(), SubmitError>> {
        match self.outcome.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(SubmitError::Interrupted)),
        }
    }

    /// Wait for the outcome
    #[allow(dead_code)] // the event loop polls with try_outcome
    pub async fn wait(&mut self) -> Result<(), SubmitError> {
        (&mut self.outcome)
            .await
            .unwrap_or(Err(SubmitError::Interrupted))
    }

    /// Time since the submission started
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        self.abort.abort();
    }
}
