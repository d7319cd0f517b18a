//! Delays for the alert lifecycle and simulated collaborators

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    /// Recording start to alert prompt
    #[serde(default = "default_auto_raise")]
    pub auto_raise_delay_ms: u64,

    /// Sent alert back to idle
    #[serde(default = "default_auto_reset")]
    pub auto_reset_delay_ms: u64,

    #[serde(default = "default_dispatch")]
    pub dispatch_delay_ms: u64,

    #[serde(default = "default_billing")]
    pub billing_delay_ms: u64,
}

impl TimingConfig {
    pub fn auto_raise_delay(&self) -> Duration {
        Duration::from_millis(self.auto_raise_delay_ms)
    }

    pub fn auto_reset_delay(&self) -> Duration {
        Duration::from_millis(self.auto_reset_delay_ms)
    }

    pub fn dispatch_delay(&self) -> Duration {
        Duration::from_millis(self.dispatch_delay_ms)
    }

    pub fn billing_delay(&self) -> Duration {
        Duration::from_millis(self.billing_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let delays = [
            (self.auto_raise_delay_ms, "timing.auto_raise_delay_ms"),
            (self.auto_reset_delay_ms, "timing.auto_reset_delay_ms"),
            (self.dispatch_delay_ms, "timing.dispatch_delay_ms"),
            (self.billing_delay_ms, "timing.billing_delay_ms"),
        ];
        for (value, name) in delays {
            if value == 0 {
                return Err(ValidationError::InvalidDelay(name));
            }
        }
        Ok(())
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            auto_raise_delay_ms: default_auto_raise(),
            auto_reset_delay_ms: default_auto_reset(),
            dispatch_delay_ms: default_dispatch(),
            billing_delay_ms: default_billing(),
        }
    }
}

fn default_auto_raise() -> u64 {
    2000
}

fn default_auto_reset() -> u64 {
    3000
}

fn default_dispatch() -> u64 {
    2000
}

fn default_billing() -> u64 {
    1500
}
