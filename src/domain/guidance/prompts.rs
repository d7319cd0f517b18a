//! Prompt templates for guidance generation.
//!
//! Prompts are fully determined by their inputs: the same jurisdiction,
//! scenario and language always produce the same text.

use crate::domain::foundation::{Jurisdiction, Language};

/// Scenario used when a guide is purchased without a specific scenario.
pub const DEFAULT_SCENARIO: &str = "traffic stop";

/// Minimum and maximum number of entries requested per script list.
pub const SCRIPT_ITEMS_MIN: usize = 4;
pub const SCRIPT_ITEMS_MAX: usize = 5;

/// Word budget requested for freeform guides.
pub const GUIDE_WORD_LIMIT: usize = 300;

/// A system instruction paired with a user instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Builds the prompt asking for "what to say" / "what not to say" lists.
pub fn script_prompt(jurisdiction: Jurisdiction, scenario: &str, language: Language) -> Prompt {
    let system = format!(
        "{}\nProvide responses in {}.",
        SCRIPT_SYSTEM,
        language.display_name()
    );
    let user = format!(
        r#"Generate specific "what to say" and "what not to say" scripts for a police encounter in {jurisdiction} involving: {scenario}.

Format the response as JSON with two arrays:
- "whatToSay": {min}-{max} specific phrases to use
- "whatNotToSay": {min}-{max} things to avoid saying or doing

Keep phrases concise and practical for high-stress situations. Respond with the JSON object only."#,
        jurisdiction = jurisdiction,
        scenario = scenario,
        min = SCRIPT_ITEMS_MIN,
        max = SCRIPT_ITEMS_MAX,
    );
    Prompt { system, user }
}

/// Builds the prompt asking for a short freeform jurisdiction guide.
pub fn guide_prompt(jurisdiction: Jurisdiction, language: Language) -> Prompt {
    let system = format!(
        "{}\nProvide responses in {}.",
        GUIDE_SYSTEM,
        language.display_name()
    );
    let user = format!(
        r#"Generate a comprehensive but concise guide for citizen rights during police encounters in {jurisdiction}.

Include:
- Key state-specific laws and rights
- Practical steps to take during encounters
- Important legal protections unique to {jurisdiction}
- Emergency contact information guidelines

Keep it under {limit} words and focus on actionable advice."#,
        jurisdiction = jurisdiction,
        limit = GUIDE_WORD_LIMIT,
    );
    Prompt { system, user }
}

const SCRIPT_SYSTEM: &str = "You are a legal expert specializing in civil rights and police interactions.
Generate practical, legally sound advice for citizens during police encounters.
Focus on de-escalation and constitutional rights protection.";

const GUIDE_SYSTEM: &str = "You are a legal expert specializing in state-specific civil rights laws.
Provide accurate, up-to-date information about citizen rights during police encounters.
Focus on practical guidance that citizens can use to protect themselves legally.";
