//! Stand-in submitter with a fixed latency and no failure mode

use super::traits::{SubmitError, Submitter};
use crate::state::FormValues;
use async_trait::async_trait;
use std::time::Duration;

/// Waits for a fixed delay, then reports success
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    /// Latency used when the configuration does not override it
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(800);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, values: FormValues) -> Result<(), SubmitError> {
        tracing::debug!(
            username = %values.username,
            delay_ms = self.delay().as_millis() as u64,
            "simulating registration submit"
        );
        tokio::time::sleep(self.delay()).await;
        Ok(())
    }
}
