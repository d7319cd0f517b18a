//! GuidanceProvider - AI-backed legal scripts and guides with fallback.
//!
//! Both public operations are total: any failure (transport error, error
//! status, blank or malformed content) is logged and replaced with the
//! static content for the requested language. Each call makes a single
//! attempt.

use std::sync::Arc;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::domain::foundation::{ErrorCode, Jurisdiction, Language};
use crate::domain::guidance::{
    fallback_guide, fallback_scripts, guide_prompt, parse_script_response, script_prompt, Prompt,
    ScriptParseError, ScriptSet,
};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, GenerationPurpose, MessageRole, RequestMetadata,
};

/// Sampling parameters for the two generation call sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub script_temperature: f32,
    pub script_max_tokens: u32,
    pub guide_temperature: f32,
    pub guide_max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            script_temperature: 0.3,
            script_max_tokens: 500,
            guide_temperature: 0.2,
            guide_max_tokens: 400,
        }
    }
}

/// Why a generation attempt was replaced by fallback content.
#[derive(Debug, Error)]
enum GenerationFailure {
    #[error("provider error: {0}")]
    Provider(#[from] AIError),

    #[error("provider returned empty content")]
    EmptyResponse,

    #[error("malformed script: {0}")]
    MalformedScript(#[from] ScriptParseError),
}

impl GenerationFailure {
    fn code(&self) -> ErrorCode {
        ErrorCode::GenerationFailure
    }
}

pub struct GuidanceProvider {
    ai: Arc<dyn AIProvider>,
    settings: GenerationSettings,
}

impl GuidanceProvider {
    pub fn new(ai: Arc<dyn AIProvider>, settings: GenerationSettings) -> Self {
        Self { ai, settings }
    }

    /// Generates "what to say" / "what not to say" lists for a scenario.
    ///
    /// Never fails: returns the fallback lists for `language` when the
    /// backend cannot produce a well-formed answer.
    pub async fn generate_script(
        &self,
        jurisdiction: Jurisdiction,
        scenario: &str,
        language: Language,
    ) -> ScriptSet {
        match self.try_generate_script(jurisdiction, scenario, language).await {
            Ok(scripts) => scripts,
            Err(err) => {
                warn!(
                    %jurisdiction,
                    %language,
                    code = %err.code(),
                    error = %err,
                    "script generation failed, using fallback"
                );
                fallback_scripts(language)
            }
        }
    }

    /// Generates a short freeform guide for a jurisdiction.
    ///
    /// Never fails and never returns blank text.
    pub async fn generate_guide(&self, jurisdiction: Jurisdiction, language: Language) -> String {
        match self.try_generate_guide(jurisdiction, language).await {
            Ok(guide) => guide,
            Err(err) => {
                warn!(
                    %jurisdiction,
                    %language,
                    code = %err.code(),
                    error = %err,
                    "guide generation failed, using fallback"
                );
                fallback_guide(jurisdiction, language)
            }
        }
    }

    async fn try_generate_script(
        &self,
        jurisdiction: Jurisdiction,
        scenario: &str,
        language: Language,
    ) -> Result<ScriptSet, GenerationFailure> {
        let content = self
            .complete(
                script_prompt(jurisdiction, scenario, language),
                GenerationPurpose::Script,
                self.settings.script_temperature,
                self.settings.script_max_tokens,
            )
            .await?;
        Ok(parse_script_response(&content)?)
    }

    async fn try_generate_guide(
        &self,
        jurisdiction: Jurisdiction,
        language: Language,
    ) -> Result<String, GenerationFailure> {
        self.complete(
            guide_prompt(jurisdiction, language),
            GenerationPurpose::Guide,
            self.settings.guide_temperature,
            self.settings.guide_max_tokens,
        )
        .await
    }

    /// Sends one completion request and returns its trimmed, non-blank text.
    async fn complete(
        &self,
        prompt: Prompt,
        purpose: GenerationPurpose,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, GenerationFailure> {
        let request = CompletionRequest::new(RequestMetadata::new(
            purpose,
            Uuid::new_v4().to_string(),
        ))
        .with_system_prompt(prompt.system)
        .with_message(MessageRole::User, prompt.user)
        .with_temperature(temperature)
        .with_max_tokens(max_tokens);

        let response = self.ai.complete(request).await?;
        let content = response.content.trim();
        if content.is_empty() {
            return Err(GenerationFailure::EmptyResponse);
        }
        Ok(content.to_string())
    }
}
