//! Bounding-box reverse geocoder.
//!
//! Stand-in for a remote lookup service: classifies coordinates with
//! `ClassificationRules` after a simulated network latency. Latencies can be
//! queued per request to reproduce out-of-order completion.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

use crate::domain::foundation::{Coordinates, Jurisdiction};
use crate::domain::jurisdiction::ClassificationRules;
use crate::ports::{GeocodingError, ReverseGeocoder};

#[derive(Debug, Clone)]
pub struct BoundingBoxGeocoder {
    rules: ClassificationRules,
    latency: Duration,
    queued_latencies: Arc<Mutex<VecDeque<Duration>>>,
}

impl BoundingBoxGeocoder {
    pub fn new(rules: ClassificationRules, latency: Duration) -> Self {
        Self {
            rules,
            latency,
            queued_latencies: Arc::default(),
        }
    }

    /// Overrides the latency of the next requests, in call order. Requests
    /// beyond the queue use the default latency.
    pub fn with_latencies(self, latencies: impl IntoIterator<Item = Duration>) -> Self {
        self.queued_latencies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(latencies);
        self
    }

    fn next_latency(&self) -> Duration {
        self.queued_latencies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(self.latency)
    }
}

#[async_trait]
impl ReverseGeocoder for BoundingBoxGeocoder {
    async fn reverse_geocode(&self, coords: Coordinates) -> Result<Jurisdiction, GeocodingError> {
        let latency = self.next_latency();
        sleep(latency).await;

        let jurisdiction = self.rules.classify(&coords);
        debug!(%coords, %jurisdiction, ?latency, "coordinates classified");
        Ok(jurisdiction)
    }
}
