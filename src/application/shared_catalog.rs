//! Shared, concurrently readable guide catalog.
//!
//! Any number of readers may hold the catalog at once. Appending is
//! restricted to this crate so that only the coordinator mutates it.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{GuideId, Jurisdiction, Language};
use crate::domain::guidance::{GuideCatalog, LegalGuide};

#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<GuideCatalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: GuideCatalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Copy of every guide, oldest first.
    pub async fn guides(&self) -> Vec<LegalGuide> {
        self.inner.read().await.guides().to_vec()
    }

    pub async fn get(&self, id: &GuideId) -> Option<LegalGuide> {
        self.inner.read().await.get(id).cloned()
    }

    pub async fn latest_for(
        &self,
        jurisdiction: Jurisdiction,
        language: Language,
    ) -> Option<LegalGuide> {
        self.inner
            .read()
            .await
            .latest_for(jurisdiction, language)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    pub(crate) async fn append(&self, guide: LegalGuide) {
        self.inner.write().await.append(guide);
    }
}
