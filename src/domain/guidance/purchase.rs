//! Purchasable guidance products.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of guidance a user can unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseKind {
    BasicScript,
    DetailedGuide,
    JurisdictionSpecific,
    PremiumAccess,
}

impl PurchaseKind {
    /// Price in US cents.
    pub fn price_cents(&self) -> u32 {
        match self {
            PurchaseKind::BasicScript => 50,
            PurchaseKind::DetailedGuide => 100,
            PurchaseKind::JurisdictionSpecific => 200,
            PurchaseKind::PremiumAccess => 500,
        }
    }

    /// True when unlocking this kind generates new catalog content.
    pub fn generates_guide(&self) -> bool {
        matches!(self, PurchaseKind::JurisdictionSpecific)
    }
}

impl fmt::Display for PurchaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PurchaseKind::BasicScript => "basic_script",
            PurchaseKind::DetailedGuide => "detailed_guide",
            PurchaseKind::JurisdictionSpecific => "jurisdiction_specific",
            PurchaseKind::PremiumAccess => "premium_access",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_match_price_list() {
        assert_eq!(PurchaseKind::BasicScript.price_cents(), 50);
        assert_eq!(PurchaseKind::DetailedGuide.price_cents(), 100);
        assert_eq!(PurchaseKind::JurisdictionSpecific.price_cents(), 200);
        assert_eq!(PurchaseKind::PremiumAccess.price_cents(), 500);
    }

    #[test]
    fn only_jurisdiction_specific_generates() {
        assert!(PurchaseKind::JurisdictionSpecific.generates_guide());
        assert!(!PurchaseKind::BasicScript.generates_guide());
        assert!(!PurchaseKind::PremiumAccess.generates_guide());
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&PurchaseKind::JurisdictionSpecific).unwrap(),
            "\"jurisdiction_specific\""
        );
    }
}
