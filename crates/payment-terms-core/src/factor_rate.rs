use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Percent};

/// One fixed long-term financing bucket. The factor rate already encodes
/// both interest and term length, so installments are a direct
/// multiplication against the balance, never an amount/term division.
#[derive(Debug, Clone, Copy)]
pub struct FactorRateBucket {
    pub term_years: u32,
    pub annual_rate_percent: Percent,
    pub factor_rate: Decimal,
}

/// The in-house financing buckets. Not user-configurable; these change only
/// when the developer's financing desk reprices the long-term program.
pub const FACTOR_RATE_BUCKETS: [FactorRateBucket; 3] = [
    FactorRateBucket {
        term_years: 5,
        annual_rate_percent: dec!(10),
        factor_rate: dec!(0.0212470447),
    },
    FactorRateBucket {
        term_years: 7,
        annual_rate_percent: dec!(13),
        factor_rate: dec!(0.0181919633),
    },
    FactorRateBucket {
        term_years: 10,
        annual_rate_percent: dec!(15),
        factor_rate: dec!(0.0161334957),
    },
];

/// One row of the fixed long-term financing table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorRateRow {
    pub term_years: u32,
    pub annual_rate_percent: Percent,
    pub factor_rate: Decimal,
    /// balance * factor rate
    pub installment: Money,
    /// (balance + registration fee) * factor rate
    pub installment_with_registration_fee: Money,
}

/// Expand the 80%-balance amount into the three fixed buckets. A
/// non-positive balance has no financing table at all (unavailable), rather
/// than rows of zeroes.
pub fn factor_rate_table(balance_80: Money, balance_80_with_reg: Money) -> Vec<FactorRateRow> {
    if balance_80 <= Decimal::ZERO {
        return Vec::new();
    }

    FACTOR_RATE_BUCKETS
        .iter()
        .map(|bucket| FactorRateRow {
            term_years: bucket.term_years,
            annual_rate_percent: bucket.annual_rate_percent,
            factor_rate: bucket.factor_rate,
            installment: balance_80 * bucket.factor_rate,
            installment_with_registration_fee: balance_80_with_reg * bucket.factor_rate,
        })
        .collect()
}
