use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Monthly installments for one term length under the four fee-inclusion
/// combinations the proposal table shows side by side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub term_months: u32,
    /// net amount / term
    pub base: Money,
    /// (net amount + registration fee) / term
    pub with_registration_fee: Money,
    /// (net amount + move-in fee) / term
    pub with_move_in_fee: Money,
    /// (net amount + both fees) / term
    pub with_both: Money,
}

/// Expand a net payable amount over the caller-supplied term lengths.
///
/// An empty term set or a non-positive net amount is insufficient input:
/// the result is an empty table, never a row of divisions by zero. Terms
/// arrive already normalized (positive, de-duplicated) and row order
/// matches the input order.
pub fn amortization_rows(
    net_amount: Money,
    registration_fee: Money,
    move_in_fee: Money,
    terms: &[u32],
) -> Vec<AmortizationRow> {
    if terms.is_empty() || net_amount <= Decimal::ZERO {
        return Vec::new();
    }

    terms
        .iter()
        .map(|&term| {
            let months = Decimal::from(term);
            AmortizationRow {
                term_months: term,
                base: net_amount / months,
                with_registration_fee: (net_amount + registration_fee) / months,
                with_move_in_fee: (net_amount + move_in_fee) / months,
                with_both: (net_amount + registration_fee + move_in_fee) / months,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rows_follow_input_order() {
        let rows = amortization_rows(dec!(120_000), dec!(0), dec!(0), &[24, 12]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].term_months, 24);
        assert_eq!(rows[0].base, dec!(5_000));
        assert_eq!(rows[1].term_months, 12);
        assert_eq!(rows[1].base, dec!(10_000));
    }

    #[test]
    fn test_fee_inclusion_variants() {
        let rows = amortization_rows(dec!(1_980_000), dec!(30_000), dec!(20_000), &[12]);
        let row = &rows[0];
        assert_eq!(row.base, dec!(165_000));
        assert_eq!(row.with_registration_fee, dec!(167_500));
        assert_eq!(
            row.with_move_in_fee.round_dp(2),
            dec!(166_666.67)
        );
        assert_eq!(row.with_both.round_dp(2), dec!(169_166.67));
    }

    #[test]
    fn test_row_sum_law() {
        // with_both * term == net + reg + move_in within 1e-6
        let rows = amortization_rows(dec!(1_234_567.89), dec!(54_321.01), dec!(9_876.54), &[7, 36]);
        for row in rows {
            let reassembled = row.with_both * Decimal::from(row.term_months);
            let expected = dec!(1_234_567.89) + dec!(54_321.01) + dec!(9_876.54);
            assert!((reassembled - expected).abs() < dec!(0.000001));
        }
    }

    #[test]
    fn test_empty_terms_yield_empty_table() {
        assert!(amortization_rows(dec!(100_000), dec!(0), dec!(0), &[]).is_empty());
    }

    #[test]
    fn test_non_positive_net_yields_empty_table() {
        assert!(amortization_rows(dec!(0), dec!(10), dec!(10), &[12]).is_empty());
        assert!(amortization_rows(dec!(-5_000), dec!(10), dec!(10), &[12]).is_empty());
    }
}
