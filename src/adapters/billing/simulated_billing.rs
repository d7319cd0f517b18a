//! Simulated billing gateway.
//!
//! Stands in for a real payment processor: waits a fixed delay, then
//! approves the charge at list price. Can be switched to decline every
//! charge for testing the failed-purchase path.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

use crate::domain::guidance::PurchaseKind;
use crate::ports::{BillingError, BillingGateway, PurchaseReceipt};

/// Billing gateway that approves after a delay.
#[derive(Debug, Clone, Default)]
pub struct SimulatedBilling {
    delay: Duration,
    declining: Arc<AtomicBool>,
    charges: Arc<Mutex<Vec<PurchaseReceipt>>>,
}

impl SimulatedBilling {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// Makes every subsequent charge succeed or be declined.
    pub fn set_declining(&self, declining: bool) {
        self.declining.store(declining, Ordering::SeqCst);
    }

    /// Receipts of approved charges, oldest first.
    pub fn charges(&self) -> Vec<PurchaseReceipt> {
        self.charges
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl BillingGateway for SimulatedBilling {
    async fn charge(&self, kind: PurchaseKind) -> Result<PurchaseReceipt, BillingError> {
        sleep(self.delay).await;

        if self.declining.load(Ordering::SeqCst) {
            return Err(BillingError::Declined(format!("{} was not approved", kind)));
        }

        let receipt = PurchaseReceipt::new(kind);
        info!(
            receipt_id = %receipt.receipt_id,
            kind = %kind,
            amount_cents = receipt.amount_cents,
            "charge approved"
        );
        self.charges
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(receipt.clone());
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn approves_after_delay() {
        let billing = SimulatedBilling::new(Duration::from_millis(1500));
        let start = tokio::time::Instant::now();

        let receipt = billing.charge(PurchaseKind::DetailedGuide).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert_eq!(receipt.amount_cents, 100);
        assert_eq!(billing.charges().len(), 1);
    }

    #[tokio::test]
    async fn declines_when_configured() {
        let billing = SimulatedBilling::new(Duration::ZERO);
        billing.set_declining(true);

        let result = billing.charge(PurchaseKind::BasicScript).await;

        assert!(matches!(result, Err(BillingError::Declined(_))));
        assert!(billing.charges().is_empty());
    }
}
