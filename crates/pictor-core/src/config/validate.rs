//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.simulated.delay_ms == 0 {
            return Err(ConfigError::ValidationError(
                "simulated.delay_ms must be > 0".into(),
            ));
        }
        if self.simulated.placeholder_endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "simulated.placeholder_endpoint must not be empty".into(),
            ));
        }
        if self.clipdrop.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "clipdrop.endpoint must not be empty".into(),
            ));
        }
        if self.clipdrop.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "clipdrop.timeout_ms must be > 0".into(),
            ));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::ValidationError(
                "logging.format must be \"pretty\" or \"json\"".into(),
            ));
        }
        Ok(())
    }
}
