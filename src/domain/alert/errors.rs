//! Alert session errors.

use std::fmt;
use thiserror::Error;

use crate::domain::foundation::ErrorCode;

use super::AlertStatus;

/// User-invoked operations on an alert session that can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertOperation {
    Confirm,
    Cancel,
}

impl fmt::Display for AlertOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertOperation::Confirm => write!(f, "confirm"),
            AlertOperation::Cancel => write!(f, "cancel"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertError {
    /// The operation is not permitted from the session's current status.
    #[error("cannot {operation} an alert while {from}")]
    InvalidTransition {
        operation: AlertOperation,
        from: AlertStatus,
    },

    /// Delivery failed; the session is back in `Active` and may be retried.
    #[error("alert dispatch failed: {0}")]
    DispatchFailed(String),
}

impl AlertError {
    pub fn invalid_transition(operation: AlertOperation, from: AlertStatus) -> Self {
        AlertError::InvalidTransition { operation, from }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AlertError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            AlertError::DispatchFailed(_) => ErrorCode::DispatchFailure,
        }
    }
}
