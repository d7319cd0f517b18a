//! Simulated alert dispatcher.
//!
//! Waits a fixed delay and reports delivery to every contact. Every request
//! is recorded, including failed ones, so tests can inspect the payload.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

use crate::domain::alert::{AlertRequest, DispatchReceipt};
use crate::domain::foundation::Timestamp;
use crate::ports::{AlertDispatcher, DispatchError};

#[derive(Debug, Default)]
struct DispatcherState {
    requests: Vec<AlertRequest>,
    failure: Option<DispatchError>,
}

/// Alert dispatcher that always delivers after a delay unless told to fail.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAlertDispatcher {
    delay: Duration,
    state: Arc<Mutex<DispatcherState>>,
}

impl SimulatedAlertDispatcher {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: Arc::default(),
        }
    }

    /// Fails every subsequent dispatch with `error`, or succeeds again with `None`.
    pub fn set_failure(&self, error: Option<DispatchError>) {
        self.state().failure = error;
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<AlertRequest> {
        self.state().requests.clone()
    }

    fn state(&self) -> MutexGuard<'_, DispatcherState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl AlertDispatcher for SimulatedAlertDispatcher {
    async fn dispatch(&self, request: &AlertRequest) -> Result<DispatchReceipt, DispatchError> {
        self.state().requests.push(request.clone());

        sleep(self.delay).await;

        if let Some(error) = self.state().failure.clone() {
            return Err(error);
        }

        info!(
            alert_id = %request.alert_id,
            contacts = request.contacts.len(),
            has_location = request.location.is_some(),
            "alert delivered"
        );
        Ok(DispatchReceipt {
            alert_id: request.alert_id,
            delivered_to: request.contacts.len(),
            sent_at: Timestamp::now(),
        })
    }
}
