use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::amortization::{amortization_rows, AmortizationRow};
use crate::fees;
use crate::listed_price::listed_price;
use crate::params::ContractParameters;
use crate::types::Money;

/// Deferred Payment: the full contract price amortized interest-free over
/// the buyer's chosen terms. Fees are based on raw TCP; the schedule base
/// nets out both the discount and the reservation fee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeferredTerms {
    pub discount_amount: Money,
    /// TCP - discount - reservation fee; the amount amortized.
    pub net_amount: Money,
    pub listed_price: Money,
    pub registration_fee: Money,
    pub move_in_fee: Money,
    /// Empty when the term set is empty or the net amount is non-positive.
    pub amortization: Vec<AmortizationRow>,
}

pub fn compute(params: &ContractParameters) -> Option<DeferredTerms> {
    if !params.has_contract_price() {
        return None;
    }

    let tcp = params.total_contract_price;
    let discount_amount = tcp * params.deferred_discount_percent / dec!(100);

    let tlp = listed_price(tcp, tcp);
    let registration_fee = fees::registration_fee(
        tcp,
        params.registration_fee_percent,
        params.use_listed_price_for_registration_fee,
        tlp,
    );
    let move_in_fee = fees::move_in_fee(tlp, params.move_in_fee_percent);

    let net_amount = tcp - discount_amount - params.reservation_fee;
    let amortization = amortization_rows(
        net_amount,
        registration_fee,
        move_in_fee,
        &params.deferred_terms,
    );

    Some(DeferredTerms {
        discount_amount,
        net_amount,
        listed_price: tlp,
        registration_fee,
        move_in_fee,
        amortization,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn sample_params() -> ContractParameters {
        ContractParameters {
            total_contract_price: dec!(2_000_000),
            reservation_fee: dec!(20_000),
            registration_fee_percent: dec!(1.5),
            move_in_fee_percent: dec!(1),
            use_listed_price_for_registration_fee: true,
            deferred_terms: vec![12, 24],
            ..Default::default()
        }
    }

    #[test]
    fn test_reference_scenario_below_threshold() {
        let terms = compute(&sample_params()).unwrap();
        // At or below 3.6M no VAT is removed.
        assert_eq!(terms.listed_price, dec!(2_000_000));
        assert_eq!(terms.registration_fee, dec!(30_000));
        assert_eq!(terms.move_in_fee, dec!(20_000));
        assert_eq!(terms.net_amount, dec!(1_980_000));

        assert_eq!(terms.amortization.len(), 2);
        let first = &terms.amortization[0];
        assert_eq!(first.term_months, 12);
        assert_eq!(first.base, dec!(165_000));
        assert_eq!(first.with_both.round_dp(2), dec!(169_166.67));
    }

    #[test]
    fn test_discount_and_reservation_both_reduce_net() {
        let mut params = sample_params();
        params.deferred_discount_percent = dec!(2);
        let terms = compute(&params).unwrap();
        assert_eq!(terms.discount_amount, dec!(40_000));
        assert_eq!(terms.net_amount, dec!(1_940_000));
    }

    #[test]
    fn test_fees_based_on_raw_tcp_not_discounted() {
        let mut params = sample_params();
        params.deferred_discount_percent = dec!(10);
        let terms = compute(&params).unwrap();
        // Listed price and fees ignore the discount entirely.
        assert_eq!(terms.listed_price, dec!(2_000_000));
        assert_eq!(terms.registration_fee, dec!(30_000));
    }

    #[test]
    fn test_empty_term_set_yields_empty_table() {
        let mut params = sample_params();
        params.deferred_terms = vec![];
        let terms = compute(&params).unwrap();
        assert!(terms.amortization.is_empty());
        // The fee figures are still reported.
        assert_eq!(terms.registration_fee, dec!(30_000));
    }

    #[test]
    fn test_oversized_reservation_fee_empties_table() {
        let mut params = sample_params();
        params.reservation_fee = dec!(2_500_000);
        let terms = compute(&params).unwrap();
        assert!(terms.net_amount < Decimal::ZERO);
        assert!(terms.amortization.is_empty());
    }
}
