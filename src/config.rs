use crate::error::{MonitorError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default sampling interval in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Timer interval for checking mailbox status, in milliseconds.
    pub poll_interval_ms: u64,
    /// Seed for the mock light sensor's generator. `None` seeds from entropy.
    pub sensor_seed: Option<u64>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            sensor_seed: None,
        }
    }
}

impl MonitorConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(interval) = std::env::var("MAILBOX_POLL_INTERVAL_MS")
            && let Ok(ms) = interval.parse()
        {
            config.poll_interval_ms = ms;
        }
        if let Ok(seed) = std::env::var("MAILBOX_SENSOR_SEED")
            && let Ok(s) = seed.parse()
        {
            config.sensor_seed = Some(s);
        }

        config
    }

    /// Check that the configuration can drive a timer.
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(MonitorError::Configuration(
                "poll interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
