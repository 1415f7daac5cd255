use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::Money;

/// Contracts at or below this TCP are sold VAT-inclusive with no exclusion,
/// so the listed price equals the base amount unchanged.
pub const VAT_EXEMPTION_THRESHOLD: Decimal = dec!(3_600_000);

/// 12% VAT divisor applied above the threshold.
pub const VAT_DIVISOR: Decimal = dec!(1.12);

/// Derive the listed price (TLP) for a scheme's base amount.
///
/// The threshold test always compares the original TCP, never the
/// discounted base: Spot Cash passes its discounted price as `base` but
/// still qualifies for the exemption on the strength of the raw TCP.
pub fn listed_price(base: Money, total_contract_price: Money) -> Money {
    if total_contract_price <= VAT_EXEMPTION_THRESHOLD {
        base
    } else {
        base / VAT_DIVISOR
    }
}
