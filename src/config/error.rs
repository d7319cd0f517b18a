//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("AI base URL must be http or https")]
    InvalidBaseUrl,

    #[error("Invalid timeout: {0} must be greater than zero")]
    InvalidTimeout(&'static str),

    #[error("Temperature {0} outside [0, 2]")]
    InvalidTemperature(f32),

    #[error("Max tokens must be greater than zero")]
    InvalidMaxTokens,

    #[error("Unknown default jurisdiction: {0}")]
    UnknownJurisdiction(String),

    #[error("Device latitude and longitude must be set together")]
    IncompleteDevicePosition,

    #[error("Device position out of range")]
    DevicePositionOutOfRange,

    #[error("Invalid delay: {0} must be greater than zero")]
    InvalidDelay(&'static str),

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
