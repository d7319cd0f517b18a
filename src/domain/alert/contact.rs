//! Emergency contact value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

const PHONE_MIN_LEN: usize = 10;
const HANDLE_MIN_LEN: usize = 3;

/// A destination for emergency alerts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EmergencyContact {
    Phone(String),
    Handle(String),
}

impl EmergencyContact {
    /// Parses user input as a phone number or an account handle.
    ///
    /// Phone numbers may start with `+` and contain digits, spaces, `-` and
    /// parentheses. Handles are letters, digits and underscores.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(ValidationError::empty_field("emergency_contact"));
        }

        if is_phone(value) {
            return Ok(EmergencyContact::Phone(value.to_string()));
        }
        if is_handle(value) {
            return Ok(EmergencyContact::Handle(value.to_string()));
        }

        Err(ValidationError::invalid_format(
            "emergency_contact",
            "expected a phone number or a handle",
        ))
    }

    pub fn as_str(&self) -> &str {
        match self {
            EmergencyContact::Phone(v) | EmergencyContact::Handle(v) => v,
        }
    }
}

fn is_phone(value: &str) -> bool {
    let body = value.strip_prefix('+').unwrap_or(value);
    value.chars().count() >= PHONE_MIN_LEN
        && body.chars().any(|c| c.is_ascii_digit())
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
}

fn is_handle(value: &str) -> bool {
    value.len() >= HANDLE_MIN_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for EmergencyContact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_phone_numbers() {
        for raw in ["+1 (555) 123-4567", "555-123-4567", "5551234567"] {
            assert_eq!(
                EmergencyContact::parse(raw).unwrap(),
                EmergencyContact::Phone(raw.to_string())
            );
        }
    }

    #[test]
    fn parses_handles() {
        assert_eq!(
            EmergencyContact::parse("  legal_aid ").unwrap(),
            EmergencyContact::Handle("legal_aid".to_string())
        );
    }

    #[test]
    fn short_digit_run_is_a_handle() {
        assert!(matches!(
            EmergencyContact::parse("911").unwrap(),
            EmergencyContact::Handle(_)
        ));
    }

    #[test]
    fn rejects_blank() {
        assert!(matches!(
            EmergencyContact::parse("   "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn rejects_garbage() {
        for raw in ["ab", "mom@example", "----------", "+1 555 123 4567 ext"] {
            assert!(
                matches!(
                    EmergencyContact::parse(raw),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "{raw}"
            );
        }
    }
}
