use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Percent};

/// One immutable snapshot of contract inputs. The engine reads nothing else;
/// every derived figure (listed price, discount bases, amortization nets) is
/// recomputed from this snapshot on each invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractParameters {
    /// Total Contract Price. Schemes compute only when positive; zero or
    /// negative yields the insufficient-input placeholder result.
    pub total_contract_price: Money,

    /// Upfront reservation fee, subtracted from down-payment-style schemes.
    #[serde(default)]
    pub reservation_fee: Money,

    /// Registration fee as a percentage of the selected fee base (1.5 = 1.5%).
    #[serde(default)]
    pub registration_fee_percent: Percent,

    /// Move-in fee as a percentage of the listed price.
    #[serde(default)]
    pub move_in_fee_percent: Percent,

    /// When true, every scheme charges the registration fee against its
    /// listed (VAT-exclusive) price; when false, against its raw base amount.
    #[serde(default)]
    pub use_listed_price_for_registration_fee: bool,

    /// Spot Cash term discount percentage, applied against TCP.
    #[serde(default)]
    pub spot_cash_discount_percent: Percent,

    /// Deferred Payment term discount percentage, applied against TCP.
    #[serde(default)]
    pub deferred_discount_percent: Percent,

    /// Spot Down Payment discount percentage, applied against the 20% down
    /// payment rather than TCP.
    #[serde(default)]
    pub spot_down_discount_percent: Percent,

    /// Deferred Payment term lengths in months, already normalized.
    #[serde(default)]
    pub deferred_terms: Vec<u32>,

    /// 20/80 down-payment term lengths in months, already normalized.
    #[serde(default)]
    pub payment_20_80_terms: Vec<u32>,
}

impl ContractParameters {
    pub fn has_contract_price(&self) -> bool {
        self.total_contract_price > Decimal::ZERO
    }
}

/// Normalize a raw term list as producers must before calling the engine:
/// non-positive entries are dropped, duplicates are dropped, and the order
/// of surviving terms is preserved.
pub fn normalize_terms(raw: &[i64]) -> Vec<u32> {
    let mut seen: Vec<u32> = Vec::with_capacity(raw.len());
    for &t in raw {
        if t <= 0 {
            continue;
        }
        let t = t as u32;
        if !seen.contains(&t) {
            seen.push(t);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_non_positive() {
        assert_eq!(normalize_terms(&[12, 0, -6, 24]), vec![12, 24]);
    }

    #[test]
    fn test_normalize_drops_duplicates_keeps_order() {
        assert_eq!(normalize_terms(&[36, 12, 36, 24, 12]), vec![36, 12, 24]);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize_terms(&[]).is_empty());
        assert!(normalize_terms(&[0, -1]).is_empty());
    }
}
