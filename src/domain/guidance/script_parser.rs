//! Parsing of structured script responses.
//!
//! A response is accepted only as a whole: two named lists of strings,
//! each non-empty after blank entries are dropped. Anything else is an
//! error and no partial list is returned.

use serde::Deserialize;
use thiserror::Error;

use super::ScriptSet;

/// Why a script response was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptParseError {
    #[error("response is empty")]
    Empty,

    #[error("response is not a valid script object: {0}")]
    Malformed(String),

    #[error("response contains an empty '{0}' list")]
    EmptyList(&'static str),
}

#[derive(Debug, Deserialize)]
struct RawScript {
    #[serde(rename = "whatToSay")]
    what_to_say: Vec<String>,
    #[serde(rename = "whatNotToSay")]
    what_not_to_say: Vec<String>,
}

/// Parses a model response into a script set.
///
/// A single surrounding Markdown code fence (```` ```json ... ``` ````) is
/// tolerated; extra keys in the object are ignored.
pub fn parse_script_response(content: &str) -> Result<ScriptSet, ScriptParseError> {
    let body = strip_code_fence(content.trim());
    if body.is_empty() {
        return Err(ScriptParseError::Empty);
    }

    let raw: RawScript =
        serde_json::from_str(body).map_err(|e| ScriptParseError::Malformed(e.to_string()))?;

    if raw.what_to_say.iter().all(|s| s.trim().is_empty()) {
        return Err(ScriptParseError::EmptyList("whatToSay"));
    }
    if raw.what_not_to_say.iter().all(|s| s.trim().is_empty()) {
        return Err(ScriptParseError::EmptyList("whatNotToSay"));
    }

    ScriptSet::new(raw.what_to_say, raw.what_not_to_say)
        .ok_or(ScriptParseError::Malformed("script lists are empty".to_string()))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the optional language tag on the opening fence line.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => return text,
    };
    rest.trim_end()
        .strip_suffix("```")
        .map(str::trim)
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "whatToSay": ["Am I being detained?", "I do not consent to searches"],
        "whatNotToSay": ["Don't run", "Don't lie"]
    }"#;

    #[test]
    fn parses_plain_json() {
        let set = parse_script_response(VALID).unwrap();
        assert_eq!(set.say_list()[0], "Am I being detained?");
        assert_eq!(set.avoid_list().len(), 2);
    }

    #[test]
    fn parses_fenced_json() {
        let fenced = format!("```json\n{}\n```", VALID);
        assert!(parse_script_response(&fenced).is_ok());
    }

    #[test]
    fn ignores_extra_keys() {
        let json = r#"{"whatToSay":["a"],"whatNotToSay":["b"],"notes":"x"}"#;
        assert!(parse_script_response(json).is_ok());
    }

    #[test]
    fn rejects_blank_response() {
        assert_eq!(parse_script_response("   "), Err(ScriptParseError::Empty));
    }

    #[test]
    fn rejects_prose() {
        assert!(matches!(
            parse_script_response("Here are some tips: stay calm."),
            Err(ScriptParseError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_missing_key() {
        assert!(matches!(
            parse_script_response(r#"{"whatToSay":["a"]}"#),
            Err(ScriptParseError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_non_text_entries() {
        assert!(matches!(
            parse_script_response(r#"{"whatToSay":["a", 3],"whatNotToSay":["b"]}"#),
            Err(ScriptParseError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_empty_lists() {
        assert_eq!(
            parse_script_response(r#"{"whatToSay":[],"whatNotToSay":["b"]}"#),
            Err(ScriptParseError::EmptyList("whatToSay"))
        );
        assert_eq!(
            parse_script_response(r#"{"whatToSay":["a"],"whatNotToSay":["  "]}"#),
            Err(ScriptParseError::EmptyList("whatNotToSay"))
        );
    }

    #[test]
    fn unterminated_fence_is_malformed() {
        assert!(matches!(
            parse_script_response("```json\n{\"whatToSay\":[\"a\"]"),
            Err(ScriptParseError::Malformed(_))
        ));
    }
}
