//! Alert dispatch payload and receipt.

use serde::Serialize;

use crate::domain::foundation::{AlertId, Coordinates, RecordingId, Timestamp};

use super::EmergencyContact;

/// Everything the dispatch collaborator needs to deliver one alert.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertRequest {
    pub alert_id: AlertId,
    pub raised_at: Timestamp,
    pub location: Option<Coordinates>,
    pub recorded_media: Option<RecordingId>,
    pub contacts: Vec<EmergencyContact>,
}

/// Confirmation returned by a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchReceipt {
    pub alert_id: AlertId,
    pub delivered_to: usize,
    pub sent_at: Timestamp,
}
