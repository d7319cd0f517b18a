//! AI backend configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Completion backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// API key for the completion backend
    pub api_key: String,

    /// Chat-completions base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_script_temperature")]
    pub script_temperature: f32,

    #[serde(default = "default_script_max_tokens")]
    pub script_max_tokens: u32,

    #[serde(default = "default_guide_temperature")]
    pub guide_temperature: f32,

    #[serde(default = "default_guide_max_tokens")]
    pub guide_max_tokens: u32,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AI__API_KEY"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout("ai.timeout_secs"));
        }
        for temperature in [self.script_temperature, self.guide_temperature] {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ValidationError::InvalidTemperature(temperature));
            }
        }
        if self.script_max_tokens == 0 || self.guide_max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
            script_temperature: default_script_temperature(),
            script_max_tokens: default_script_max_tokens(),
            guide_temperature: default_guide_temperature(),
            guide_max_tokens: default_guide_max_tokens(),
        }
    }
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_model() -> String {
    "google/gemini-2.0-flash-001".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_script_temperature() -> f32 {
    0.3
}

fn default_script_max_tokens() -> u32 {
    500
}

fn default_guide_temperature() -> f32 {
    0.2
}

fn default_guide_max_tokens() -> u32 {
    400
}
