//! Legal guide entity and its scripted phrases.

use serde::Serialize;

use crate::domain::foundation::{GuideId, Jurisdiction, Language, Timestamp};

/// Scripted phrases for a police encounter.
///
/// # Invariants
///
/// - Both lists are non-empty
/// - No entry is blank
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptSet {
    /// Phrases to say, in recommended order.
    #[serde(rename = "whatToSay")]
    say_list: Vec<String>,
    /// Things to avoid saying or doing.
    #[serde(rename = "whatNotToSay")]
    avoid_list: Vec<String>,
}

impl ScriptSet {
    /// Builds a script set, dropping blank entries.
    ///
    /// Returns `None` if either list ends up empty.
    pub fn new<S: Into<String>>(
        say_list: impl IntoIterator<Item = S>,
        avoid_list: impl IntoIterator<Item = S>,
    ) -> Option<Self> {
        let clean = |items: Vec<String>| -> Vec<String> {
            items
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        };
        let say_list = clean(say_list.into_iter().map(Into::into).collect());
        let avoid_list = clean(avoid_list.into_iter().map(Into::into).collect());

        if say_list.is_empty() || avoid_list.is_empty() {
            return None;
        }
        Some(Self {
            say_list,
            avoid_list,
        })
    }

    /// Builds a script set from constant tables that are known to be non-empty.
    pub(crate) fn from_table(say_list: &[&str], avoid_list: &[&str]) -> Self {
        Self {
            say_list: say_list.iter().map(|s| s.to_string()).collect(),
            avoid_list: avoid_list.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn say_list(&self) -> &[String] {
        &self.say_list
    }

    pub fn avoid_list(&self) -> &[String] {
        &self.avoid_list
    }
}

/// A bundle of jurisdiction- and language-specific guidance.
///
/// Immutable once created. Identity is the `id`; two guides for the same
/// jurisdiction and language are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalGuide {
    id: GuideId,
    jurisdiction: Jurisdiction,
    language: Language,
    content: String,
    scripts: ScriptSet,
    created_at: Timestamp,
}

impl LegalGuide {
    pub fn new(
        jurisdiction: Jurisdiction,
        language: Language,
        content: impl Into<String>,
        scripts: ScriptSet,
    ) -> Self {
        Self {
            id: GuideId::new(),
            jurisdiction,
            language,
            content: content.into(),
            scripts,
            created_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> &GuideId {
        &self.id
    }

    pub fn jurisdiction(&self) -> Jurisdiction {
        self.jurisdiction
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn scripts(&self) -> &ScriptSet {
        &self.scripts
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// True if this guide was produced for the given selection.
    pub fn matches(&self, jurisdiction: Jurisdiction, language: Language) -> bool {
        self.jurisdiction == jurisdiction && self.language == language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_set_drops_blank_entries() {
        let set = ScriptSet::new(vec!["  Am I free to leave? ", ""], vec!["Don't run"]).unwrap();
        assert_eq!(set.say_list(), &["Am I free to leave?".to_string()]);
        assert_eq!(set.avoid_list().len(), 1);
    }

    #[test]
    fn script_set_requires_both_lists() {
        assert!(ScriptSet::new(Vec::<String>::new(), vec!["x".to_string()]).is_none());
        assert!(ScriptSet::new(vec!["x"], vec!["   "]).is_none());
    }

    #[test]
    fn script_set_serializes_with_wire_names() {
        let set = ScriptSet::new(vec!["a"], vec!["b"]).unwrap();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["whatToSay"][0], "a");
        assert_eq!(json["whatNotToSay"][0], "b");
    }

    #[test]
    fn guides_with_same_selection_have_distinct_ids() {
        let scripts = ScriptSet::new(vec!["a"], vec!["b"]).unwrap();
        let j = Jurisdiction::default();
        let first = LegalGuide::new(j, Language::English, "text", scripts.clone());
        let second = LegalGuide::new(j, Language::English, "text", scripts);
        assert_ne!(first.id(), second.id());
        assert!(first.matches(j, Language::English));
        assert!(!first.matches(j, Language::Spanish));
    }
}
