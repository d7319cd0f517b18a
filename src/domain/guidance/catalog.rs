//! Guide catalog - the append-only set of unlocked guides.
//!
//! # Ownership
//!
//! The catalog owns every guide inserted into it. Entries are never removed
//! or replaced during a session, and repeated purchases for the same
//! jurisdiction and language each add their own entry.

use crate::domain::foundation::{GuideId, Jurisdiction, Language};

use super::{fallback_scripts, LegalGuide};

/// Append-only collection of unlocked guides, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct GuideCatalog {
    guides: Vec<LegalGuide>,
}

impl GuideCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the two sample guides shipped with the app.
    pub fn with_sample_guides() -> Self {
        let mut catalog = Self::new();
        for (name, content) in [
            ("California", "California-specific legal rights and procedures..."),
            ("Texas", "Texas-specific legal rights and procedures..."),
        ] {
            if let Ok(jurisdiction) = Jurisdiction::parse(name) {
                catalog.append(LegalGuide::new(
                    jurisdiction,
                    Language::English,
                    content,
                    fallback_scripts(Language::English),
                ));
            }
        }
        catalog
    }

    /// Appends a guide. Existing entries are untouched.
    pub fn append(&mut self, guide: LegalGuide) {
        self.guides.push(guide);
    }

    /// All guides, oldest first.
    pub fn guides(&self) -> &[LegalGuide] {
        &self.guides
    }

    pub fn get(&self, id: &GuideId) -> Option<&LegalGuide> {
        self.guides.iter().find(|g| g.id() == id)
    }

    /// Guides for a jurisdiction and language, oldest first.
    pub fn for_selection(
        &self,
        jurisdiction: Jurisdiction,
        language: Language,
    ) -> impl Iterator<Item = &LegalGuide> {
        self.guides
            .iter()
            .filter(move |g| g.matches(jurisdiction, language))
    }

    /// Most recently appended guide for a jurisdiction and language.
    pub fn latest_for(&self, jurisdiction: Jurisdiction, language: Language) -> Option<&LegalGuide> {
        self.guides
            .iter()
            .rev()
            .find(|g| g.matches(jurisdiction, language))
    }

    pub fn len(&self) -> usize {
        self.guides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guide(name: &str, language: Language, content: &str) -> LegalGuide {
        LegalGuide::new(
            Jurisdiction::parse(name).unwrap(),
            language,
            content,
            fallback_scripts(language),
        )
    }

    #[test]
    fn sample_catalog_has_two_english_guides() {
        let catalog = GuideCatalog::with_sample_guides();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.guides().iter().all(|g| g.language() == Language::English));
    }

    #[test]
    fn append_preserves_existing_entries_and_order() {
        let mut catalog = GuideCatalog::with_sample_guides();
        let before: Vec<_> = catalog.guides().to_vec();

        catalog.append(guide("Ohio", Language::Spanish, "guía"));

        assert_eq!(catalog.len(), before.len() + 1);
        assert_eq!(&catalog.guides()[..before.len()], before.as_slice());
        assert_eq!(catalog.guides().last().unwrap().content(), "guía");
    }

    #[test]
    fn duplicates_for_same_selection_are_kept() {
        let mut catalog = GuideCatalog::new();
        catalog.append(guide("Ohio", Language::English, "first"));
        catalog.append(guide("Ohio", Language::English, "second"));

        let ohio = Jurisdiction::parse("Ohio").unwrap();
        assert_eq!(catalog.for_selection(ohio, Language::English).count(), 2);
        assert_eq!(
            catalog.latest_for(ohio, Language::English).unwrap().content(),
            "second"
        );
    }

    #[test]
    fn get_finds_by_id() {
        let mut catalog = GuideCatalog::new();
        let g = guide("Utah", Language::English, "x");
        let id = *g.id();
        catalog.append(g);
        assert!(catalog.get(&id).is_some());
        assert!(catalog.get(&GuideId::new()).is_none());
    }

    #[test]
    fn latest_for_misses_other_language() {
        let catalog = GuideCatalog::with_sample_guides();
        let ca = Jurisdiction::parse("California").unwrap();
        assert!(catalog.latest_for(ca, Language::Spanish).is_none());
        assert!(catalog.latest_for(ca, Language::English).is_some());
    }
}
