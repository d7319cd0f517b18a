//! AlertStatus enum for the emergency alert lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of an emergency alert session.
///
/// The cycle is `Idle -> Active -> Sending -> Sent -> Idle`. `Sending` is
/// transient and covers an in-flight dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    #[default]
    Idle,
    Active,
    Sending,
    Sent,
}

impl AlertStatus {
    /// Returns true while a dispatch is in flight.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, AlertStatus::Sending)
    }
}

impl StateMachine for AlertStatus {
    /// Valid transitions:
    /// - Idle -> Active (raise)
    /// - Active -> Sending (confirm)
    /// - Active -> Idle (cancel)
    /// - Sending -> Sent (dispatch delivered)
    /// - Sending -> Active (dispatch failed)
    /// - Sent -> Idle (auto-reset)
    fn can_transition_to(&self, target: &Self) -> bool {
        use AlertStatus::*;
        matches!(
            (self, target),
            (Idle, Active)
                | (Active, Sending)
                | (Active, Idle)
                | (Sending, Sent)
                | (Sending, Active)
                | (Sent, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AlertStatus::*;
        match self {
            Idle => vec![Active],
            Active => vec![Sending, Idle],
            Sending => vec![Sent, Active],
            Sent => vec![Idle],
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlertStatus::Idle => "Idle",
            AlertStatus::Active => "Active",
            AlertStatus::Sending => "Sending",
            AlertStatus::Sent => "Sent",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AlertStatus; 4] = [
        AlertStatus::Idle,
        AlertStatus::Active,
        AlertStatus::Sending,
        AlertStatus::Sent,
    ];

    #[test]
    fn default_is_idle() {
        assert_eq!(AlertStatus::default(), AlertStatus::Idle);
    }

    #[test]
    fn valid_transitions_agree_with_can_transition_to() {
        for from in ALL {
            for to in ALL {
                assert_eq!(
                    from.can_transition_to(&to),
                    from.valid_transitions().contains(&to),
                    "{} -> {}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn no_status_is_terminal() {
        assert!(ALL.iter().all(|s| !s.is_terminal()));
    }

    #[test]
    fn sent_cannot_go_back_to_active() {
        assert!(AlertStatus::Sent.transition_to(AlertStatus::Active).is_err());
    }

    #[test]
    fn idle_cannot_skip_to_sending() {
        assert!(!AlertStatus::Idle.can_transition_to(&AlertStatus::Sending));
    }

    #[test]
    fn only_sending_is_in_flight() {
        assert!(AlertStatus::Sending.is_in_flight());
        assert!(!AlertStatus::Active.is_in_flight());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&AlertStatus::Sending).unwrap(),
            "\"sending\""
        );
        let status: AlertStatus = serde_json::from_str("\"sent\"").unwrap();
        assert_eq!(status, AlertStatus::Sent);
    }
}
