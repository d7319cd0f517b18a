//! Billing gateway port for one-off guidance purchases.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::foundation::Timestamp;
use crate::domain::guidance::PurchaseKind;

/// Port for charging the user for a purchase.
///
/// A successful charge is final; a failed one must leave no side effects.
#[async_trait]
pub trait BillingGateway: Send + Sync {
    async fn charge(&self, kind: PurchaseKind) -> Result<PurchaseReceipt, BillingError>;
}

/// Proof of a completed charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    pub receipt_id: Uuid,
    pub kind: PurchaseKind,
    pub amount_cents: u32,
    pub charged_at: Timestamp,
}

impl PurchaseReceipt {
    /// Creates a receipt for `kind` at its list price.
    pub fn new(kind: PurchaseKind) -> Self {
        Self {
            receipt_id: Uuid::new_v4(),
            kind,
            amount_cents: kind.price_cents(),
            charged_at: Timestamp::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    #[error("payment declined: {0}")]
    Declined(String),

    #[error("billing unavailable: {0}")]
    Unavailable(String),
}
