//! Location source reporting a configured device position.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::foundation::Coordinates;
use crate::ports::{LocationError, LocationSource, PositionOptions};

/// Returns a fixed position, or `PermissionDenied` when none is configured.
#[derive(Debug, Clone, Default)]
pub struct FixedLocationSource {
    position: Option<Coordinates>,
    requests: Arc<AtomicUsize>,
}

impl FixedLocationSource {
    pub fn new(position: Option<Coordinates>) -> Self {
        Self {
            position,
            requests: Arc::default(),
        }
    }

    /// Source that behaves as if the user refused location access.
    pub fn denied() -> Self {
        Self::new(None)
    }

    /// Number of position requests served.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationSource for FixedLocationSource {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinates, LocationError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.position.ok_or(LocationError::PermissionDenied)
    }
}
