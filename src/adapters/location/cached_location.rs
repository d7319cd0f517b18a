//! Location source decorator that reuses recent fixes.
//!
//! A fix younger than the request's `max_age` is returned without asking
//! the inner source again. Failures are never cached.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

use crate::domain::foundation::Coordinates;
use crate::ports::{LocationError, LocationSource, PositionOptions};

pub struct CachedLocationSource<S> {
    inner: S,
    last_fix: Mutex<Option<(Coordinates, Instant)>>,
}

impl<S: LocationSource> CachedLocationSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            last_fix: Mutex::new(None),
        }
    }
}

#[async_trait]
impl<S: LocationSource> LocationSource for CachedLocationSource<S> {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinates, LocationError> {
        if let Some((coords, at)) = *self.last_fix.lock().await {
            if at.elapsed() < options.max_age {
                debug!(%coords, age = ?at.elapsed(), "reusing cached position");
                return Ok(coords);
            }
        }

        let coords = self.inner.current_position(options).await?;
        *self.last_fix.lock().await = Some((coords, Instant::now()));
        Ok(coords)
    }
}
