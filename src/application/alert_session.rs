//! AlertSession - the timed emergency alert state machine.
//!
//! # Transitions
//!
//! | Operation | From      | To                  | Otherwise                 |
//! |-----------|-----------|---------------------|---------------------------|
//! | `raise`   | Idle      | Active              | no-op                     |
//! | `confirm` | Active    | Sending, then Sent  | `InvalidTransition`       |
//! | `cancel`  | Active    | Idle                | `InvalidTransition`       |
//! | auto-reset| Sent      | Idle (after delay)  | stale timer is a no-op    |
//!
//! A failed dispatch returns the session from `Sending` to `Active` and
//! reports `DispatchFailed`.
//!
//! # Concurrency
//!
//! All state lives behind one async mutex. The lock is released while the
//! dispatch is in flight; during that window the status is `Sending`, which
//! makes every competing `confirm`/`cancel` fail instead of queueing.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::domain::alert::{
    AlertError, AlertOperation, AlertRequest, AlertStatus, DispatchReceipt, EmergencyContact,
};
use crate::domain::foundation::{AlertId, Coordinates, RecordingId, StateMachine, Timestamp};
use crate::ports::{AlertDispatcher, DispatchError};

use super::timer::TimerSlot;

/// Point-in-time view of an alert session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertSnapshot {
    pub status: AlertStatus,
    pub started_at: Option<Timestamp>,
    pub alert_id: Option<AlertId>,
}

/// Payload details supplied by the caller when confirming an alert.
#[derive(Debug, Clone, Default)]
pub struct AlertContext {
    pub location: Option<Coordinates>,
    pub contacts: Vec<EmergencyContact>,
    pub recorded_media: Option<RecordingId>,
}

#[derive(Debug, Default)]
struct SessionState {
    status: AlertStatus,
    started_at: Option<Timestamp>,
    alert_id: Option<AlertId>,
    reset: TimerSlot,
}

impl SessionState {
    fn move_to(&mut self, target: AlertStatus) {
        debug_assert!(self.status.can_transition_to(&target));
        if target == AlertStatus::Idle {
            self.started_at = None;
            self.alert_id = None;
        }
        self.status = target;
    }

    fn snapshot(&self) -> AlertSnapshot {
        AlertSnapshot {
            status: self.status,
            started_at: self.started_at,
            alert_id: self.alert_id,
        }
    }
}

struct SessionInner {
    state: Mutex<SessionState>,
    dispatcher: Arc<dyn AlertDispatcher>,
    reset_delay: Duration,
}

/// Handle to one alert session. Clones share the same session.
#[derive(Clone)]
pub struct AlertSession {
    inner: Arc<SessionInner>,
}

impl AlertSession {
    /// Creates a session in `Idle`.
    pub fn new(dispatcher: Arc<dyn AlertDispatcher>, reset_delay: Duration) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                state: Mutex::new(SessionState::default()),
                dispatcher,
                reset_delay,
            }),
        }
    }

    pub async fn status(&self) -> AlertStatus {
        self.inner.state.lock().await.status
    }

    pub async fn snapshot(&self) -> AlertSnapshot {
        self.inner.state.lock().await.snapshot()
    }

    /// True while an auto-reset is scheduled.
    pub async fn has_pending_reset(&self) -> bool {
        self.inner.state.lock().await.reset.is_pending()
    }

    /// Raises the alert prompt. Returns false when the session was not idle.
    pub async fn raise(&self) -> bool {
        let mut state = self.inner.state.lock().await;
        if state.status != AlertStatus::Idle {
            debug!(status = %state.status, "raise ignored");
            return false;
        }

        // Guards against a leftover reset timer acting on the new alert.
        state.reset.cancel();
        state.move_to(AlertStatus::Active);
        state.started_at = Some(Timestamp::now());
        let alert_id = AlertId::new();
        state.alert_id = Some(alert_id);

        info!(%alert_id, "alert raised");
        true
    }

    /// Sends the alert and waits for delivery.
    ///
    /// On success the session is `Sent` and an auto-reset is scheduled. On
    /// dispatch failure the session is back in `Active`.
    pub async fn confirm(&self, context: AlertContext) -> Result<DispatchReceipt, AlertError> {
        let request = {
            let mut state = self.inner.state.lock().await;
            if state.status != AlertStatus::Active {
                return Err(AlertError::invalid_transition(
                    AlertOperation::Confirm,
                    state.status,
                ));
            }
            state.move_to(AlertStatus::Sending);

            AlertRequest {
                alert_id: *state.alert_id.get_or_insert_with(AlertId::new),
                raised_at: *state.started_at.get_or_insert_with(Timestamp::now),
                location: context.location,
                recorded_media: context.recorded_media,
                contacts: context.contacts,
            }
        };

        info!(
            alert_id = %request.alert_id,
            contacts = request.contacts.len(),
            "dispatching alert"
        );

        // The session owns the delivery, so dropping this future cannot
        // strand the status in `Sending`.
        let inner = Arc::clone(&self.inner);
        let alert_id = request.alert_id;
        let delivery = tokio::spawn(async move {
            let result = inner.dispatcher.dispatch(&request).await;
            Self::finish_dispatch(&inner, alert_id, result).await
        });

        match delivery.await {
            Ok(outcome) => outcome,
            Err(join_err) => {
                let mut state = self.inner.state.lock().await;
                if state.status == AlertStatus::Sending {
                    state.move_to(AlertStatus::Active);
                }
                warn!(%alert_id, error = %join_err, "alert delivery task aborted");
                Err(AlertError::DispatchFailed(join_err.to_string()))
            }
        }
    }

    async fn finish_dispatch(
        inner: &Arc<SessionInner>,
        alert_id: AlertId,
        result: Result<DispatchReceipt, DispatchError>,
    ) -> Result<DispatchReceipt, AlertError> {
        let mut state = inner.state.lock().await;
        match result {
            Ok(receipt) => {
                state.move_to(AlertStatus::Sent);
                Self::schedule_reset(inner, &mut state);
                info!(alert_id = %receipt.alert_id, delivered_to = receipt.delivered_to, "alert sent");
                Ok(receipt)
            }
            Err(err) => {
                state.move_to(AlertStatus::Active);
                warn!(%alert_id, error = %err, "alert dispatch failed");
                Err(AlertError::DispatchFailed(err.to_string()))
            }
        }
    }

    /// Dismisses an active alert without sending it.
    pub async fn cancel(&self) -> Result<(), AlertError> {
        let mut state = self.inner.state.lock().await;
        if state.status != AlertStatus::Active {
            return Err(AlertError::invalid_transition(
                AlertOperation::Cancel,
                state.status,
            ));
        }
        state.move_to(AlertStatus::Idle);
        info!("alert cancelled");
        Ok(())
    }

    fn schedule_reset(inner: &Arc<SessionInner>, state: &mut SessionState) {
        let ticket = state.reset.arm();
        let inner = Arc::clone(inner);

        let handle = tokio::spawn(async move {
            sleep(inner.reset_delay).await;

            let mut state = inner.state.lock().await;
            if !state.reset.fire(ticket) {
                return;
            }
            if state.status != AlertStatus::Sent {
                debug!(status = %state.status, "stale auto-reset ignored");
                return;
            }
            state.move_to(AlertStatus::Idle);
            info!("alert session reset");
        });

        state.reset.set_handle(ticket, handle);
    }
}

impl std::fmt::Debug for AlertSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertSession")
            .field("reset_delay", &self.inner.reset_delay)
            .finish_non_exhaustive()
    }
}
