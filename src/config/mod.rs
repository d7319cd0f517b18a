//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `ENCOUNTER_GUIDE` prefix
//! and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use encounter_guide::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Default jurisdiction: {}", config.location.default_jurisdiction);
//! ```

mod ai;
mod error;
mod location;
mod logging;
mod timing;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use location::LocationConfig;
pub use logging::LoggingConfig;
pub use timing::TimingConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Completion backend (required: `api_key` has no default)
    pub ai: AiConfig,

    /// Position, geocoding and default selection
    #[serde(default)]
    pub location: LocationConfig,

    /// Alert lifecycle and simulated collaborator delays
    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ENCOUNTER_GUIDE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ENCOUNTER_GUIDE__AI__API_KEY=...` -> `ai.api_key = ...`
    /// - `ENCOUNTER_GUIDE__TIMING__AUTO_RAISE_DELAY_MS=2000` -> `timing.auto_raise_delay_ms = 2000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ENCOUNTER_GUIDE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.location.validate()?;
        self.timing.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("ENCOUNTER_GUIDE__AI__API_KEY", "sk-or-xxx");
    }

    fn clear_env() {
        env::remove_var("ENCOUNTER_GUIDE__AI__API_KEY");
        env::remove_var("ENCOUNTER_GUIDE__AI__MODEL");
        env::remove_var("ENCOUNTER_GUIDE__LOCATION__DEFAULT_JURISDICTION");
        env::remove_var("ENCOUNTER_GUIDE__LOCATION__DEVICE_LATITUDE");
        env::remove_var("ENCOUNTER_GUIDE__LOCATION__DEVICE_LONGITUDE");
        env::remove_var("ENCOUNTER_GUIDE__TIMING__AUTO_RAISE_DELAY_MS");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.ai.api_key, "sk-or-xxx");
        assert_eq!(config.location.default_jurisdiction, "California");
        assert_eq!(config.timing.auto_raise_delay_ms, 2000);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().validate().is_ok());
    }

    #[test]
    fn test_missing_api_key_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        assert!(AppConfig::load().is_err());
    }

    #[test]
    fn test_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("ENCOUNTER_GUIDE__AI__MODEL", "openai/gpt-4o-mini");
        env::set_var("ENCOUNTER_GUIDE__LOCATION__DEFAULT_JURISDICTION", "Texas");
        env::set_var("ENCOUNTER_GUIDE__LOCATION__DEVICE_LATITUDE", "30.27");
        env::set_var("ENCOUNTER_GUIDE__LOCATION__DEVICE_LONGITUDE", "-97.74");
        env::set_var("ENCOUNTER_GUIDE__TIMING__AUTO_RAISE_DELAY_MS", "500");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.model, "openai/gpt-4o-mini");
        assert_eq!(config.location.default_jurisdiction().unwrap().name(), "Texas");
        assert!(config.location.device_position().is_some());
        assert_eq!(config.timing.auto_raise_delay_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_jurisdiction_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("ENCOUNTER_GUIDE__LOCATION__DEFAULT_JURISDICTION", "Gondor");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(
            result.unwrap().validate(),
            Err(ValidationError::UnknownJurisdiction(_))
        ));
    }
}
