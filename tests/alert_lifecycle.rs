//! Integration tests for the emergency-alert lifecycle.
//!
//! Walks the full transition table of `AlertSession` with a simulated
//! dispatcher and virtual time:
//! 1. `raise` only leaves `Idle`
//! 2. `confirm` only leaves `Active`, passing through `Sending`
//! 3. `cancel` only leaves `Active`
//! 4. `Sent` returns to `Idle` on its own after the reset delay

use std::sync::Arc;
use std::time::Duration;

use encounter_guide::adapters::SimulatedAlertDispatcher;
use encounter_guide::application::{AlertContext, AlertSession};
use encounter_guide::domain::alert::{AlertError, AlertOperation, AlertStatus, EmergencyContact};
use encounter_guide::domain::foundation::{Coordinates, ErrorCode, RecordingId};
use encounter_guide::ports::DispatchError;
use tokio::time::sleep;

// =============================================================================
// Test Infrastructure
// =============================================================================

const DISPATCH_DELAY: Duration = Duration::from_secs(2);
const RESET_DELAY: Duration = Duration::from_secs(3);

fn session() -> (AlertSession, SimulatedAlertDispatcher) {
    let dispatcher = SimulatedAlertDispatcher::new(DISPATCH_DELAY);
    let session = AlertSession::new(Arc::new(dispatcher.clone()), RESET_DELAY);
    (session, dispatcher)
}

fn context() -> AlertContext {
    AlertContext {
        location: Some(Coordinates::new(34.05, -118.24)),
        contacts: vec![EmergencyContact::parse("trusted_friend").unwrap()],
        recorded_media: Some(RecordingId::new()),
    }
}

async fn session_in(status: AlertStatus) -> AlertSession {
    let (session, _) = session();
    match status {
        AlertStatus::Idle => {}
        AlertStatus::Active => {
            session.raise().await;
        }
        AlertStatus::Sending => {
            session.raise().await;
            let confirming = session.clone();
            tokio::spawn(async move { confirming.confirm(context()).await });
            sleep(Duration::from_millis(10)).await;
        }
        AlertStatus::Sent => {
            session.raise().await;
            session.confirm(context()).await.unwrap();
        }
    }
    assert_eq!(session.status().await, status);
    session
}

// =============================================================================
// raise
// =============================================================================

#[tokio::test(start_paused = true)]
async fn raise_from_idle_activates() {
    let session = session_in(AlertStatus::Idle).await;

    assert!(session.raise().await);

    let snap = session.snapshot().await;
    assert_eq!(snap.status, AlertStatus::Active);
    assert!(snap.started_at.is_some());
    assert!(snap.alert_id.is_some());
}

#[tokio::test(start_paused = true)]
async fn raise_is_noop_outside_idle() {
    for status in [AlertStatus::Active, AlertStatus::Sending, AlertStatus::Sent] {
        let session = session_in(status).await;
        let before = session.snapshot().await;

        assert!(!session.raise().await, "raise from {status} should be ignored");
        assert_eq!(session.snapshot().await, before);
    }
}

// =============================================================================
// confirm
// =============================================================================

#[tokio::test(start_paused = true)]
async fn confirm_passes_through_sending_to_sent() {
    let (session, dispatcher) = session();
    session.raise().await;

    let confirming = session.clone();
    let task = tokio::spawn(async move { confirming.confirm(context()).await });

    sleep(Duration::from_millis(10)).await;
    assert_eq!(session.status().await, AlertStatus::Sending);

    let receipt = task.await.unwrap().unwrap();
    assert_eq!(session.status().await, AlertStatus::Sent);
    assert_eq!(receipt.delivered_to, 1);

    let requests = dispatcher.requests();
    let request = &requests[0];
    assert_eq!(Some(request.alert_id), session.snapshot().await.alert_id);
    assert_eq!(request.contacts.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn confirm_rejected_outside_active() {
    for status in [AlertStatus::Idle, AlertStatus::Sending, AlertStatus::Sent] {
        let session = session_in(status).await;

        let err = session.confirm(context()).await.unwrap_err();

        assert_eq!(
            err,
            AlertError::InvalidTransition {
                operation: AlertOperation::Confirm,
                from: status,
            }
        );
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }
}

#[tokio::test(start_paused = true)]
async fn failed_dispatch_returns_to_active() {
    let (session, dispatcher) = session();
    dispatcher.set_failure(Some(DispatchError::Unavailable("no signal".into())));
    session.raise().await;

    let err = session.confirm(context()).await.unwrap_err();

    assert!(matches!(err, AlertError::DispatchFailed(_)));
    assert_eq!(err.code(), ErrorCode::DispatchFailure);
    assert_eq!(session.status().await, AlertStatus::Active);

    dispatcher.set_failure(None);
    session.confirm(context()).await.unwrap();
    assert_eq!(session.status().await, AlertStatus::Sent);
    assert_eq!(dispatcher.requests().len(), 2);
}

// =============================================================================
// cancel
// =============================================================================

#[tokio::test(start_paused = true)]
async fn cancel_from_active_returns_to_idle() {
    let session = session_in(AlertStatus::Active).await;

    session.cancel().await.unwrap();

    let snap = session.snapshot().await;
    assert_eq!(snap.status, AlertStatus::Idle);
    assert!(snap.started_at.is_none());
}

#[tokio::test(start_paused = true)]
async fn cancel_rejected_outside_active() {
    for status in [AlertStatus::Idle, AlertStatus::Sending, AlertStatus::Sent] {
        let session = session_in(status).await;

        let err = session.cancel().await.unwrap_err();

        assert_eq!(
            err,
            AlertError::InvalidTransition {
                operation: AlertOperation::Cancel,
                from: status,
            }
        );
        assert_eq!(session.status().await, status);
    }
}

// =============================================================================
// automatic reset
// =============================================================================

#[tokio::test(start_paused = true)]
async fn sent_resets_to_idle_after_delay() {
    let session = session_in(AlertStatus::Sent).await;
    assert!(session.has_pending_reset().await);

    sleep(RESET_DELAY - Duration::from_millis(1)).await;
    assert_eq!(session.status().await, AlertStatus::Sent);

    sleep(Duration::from_millis(2)).await;
    assert_eq!(session.status().await, AlertStatus::Idle);
    assert!(!session.has_pending_reset().await);
}

#[tokio::test(start_paused = true)]
async fn new_alert_after_reset_gets_new_id() {
    let session = session_in(AlertStatus::Sent).await;
    let first = session.snapshot().await.alert_id;

    sleep(RESET_DELAY + Duration::from_millis(1)).await;
    assert!(session.raise().await);

    let second = session.snapshot().await.alert_id;
    assert!(second.is_some());
    assert_ne!(first, second);
}
