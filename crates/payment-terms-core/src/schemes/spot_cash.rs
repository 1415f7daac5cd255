use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::fees;
use crate::listed_price::listed_price;
use crate::params::ContractParameters;
use crate::types::Money;

/// Spot Cash: a single lump payment at the discounted contract price.
///
/// The only scheme whose listed-price base is its discounted price rather
/// than raw TCP, and the only one reporting a grand total. The reservation
/// fee is never subtracted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotCashTerms {
    pub discount_amount: Money,
    /// TCP minus the term discount; the net figure for this scheme.
    pub net_price: Money,
    pub listed_price: Money,
    pub registration_fee: Money,
    pub move_in_fee: Money,
    /// net price + registration fee + move-in fee
    pub total_payment: Money,
}

pub fn compute(params: &ContractParameters) -> Option<SpotCashTerms> {
    if !params.has_contract_price() {
        return None;
    }

    let tcp = params.total_contract_price;
    let discount_amount = tcp * params.spot_cash_discount_percent / dec!(100);
    let net_price = tcp - discount_amount;

    // Threshold test against the original TCP even though the base is the
    // discounted price.
    let tlp = listed_price(net_price, tcp);
    let registration_fee = fees::registration_fee(
        net_price,
        params.registration_fee_percent,
        params.use_listed_price_for_registration_fee,
        tlp,
    );
    let move_in_fee = fees::move_in_fee(tlp, params.move_in_fee_percent);

    Some(SpotCashTerms {
        discount_amount,
        net_price,
        listed_price: tlp,
        registration_fee,
        move_in_fee,
        total_payment: net_price + registration_fee + move_in_fee,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_params() -> ContractParameters {
        ContractParameters {
            total_contract_price: dec!(5_000_000),
            reservation_fee: dec!(40_000),
            registration_fee_percent: dec!(1.5),
            move_in_fee_percent: dec!(1),
            spot_cash_discount_percent: dec!(5),
            ..Default::default()
        }
    }

    #[test]
    fn test_reference_scenario() {
        let terms = compute(&sample_params()).unwrap();
        assert_eq!(terms.discount_amount, dec!(250_000));
        assert_eq!(terms.net_price, dec!(4_750_000));
        assert_eq!(terms.listed_price.round_dp(2), dec!(4_241_071.43));
        assert_eq!(terms.registration_fee, dec!(71_250));
        assert_eq!(terms.move_in_fee.round_dp(2), dec!(42_410.71));
        assert_eq!(terms.total_payment.round_dp(2), dec!(4_863_660.71));
    }

    #[test]
    fn test_reservation_fee_never_subtracted() {
        let mut params = sample_params();
        params.reservation_fee = dec!(500_000);
        let terms = compute(&params).unwrap();
        assert_eq!(terms.net_price, dec!(4_750_000));
    }

    #[test]
    fn test_toggle_moves_registration_fee_to_listed_price() {
        let mut params = sample_params();
        params.use_listed_price_for_registration_fee = true;
        let terms = compute(&params).unwrap();
        assert_eq!(terms.registration_fee, terms.listed_price * dec!(0.015));
        // Everything except the registration fee is untouched by the toggle.
        let baseline = compute(&sample_params()).unwrap();
        assert_eq!(terms.discount_amount, baseline.discount_amount);
        assert_eq!(terms.move_in_fee, baseline.move_in_fee);
    }

    #[test]
    fn test_below_threshold_listed_price_equals_net_price() {
        let mut params = sample_params();
        params.total_contract_price = dec!(3_000_000);
        let terms = compute(&params).unwrap();
        assert_eq!(terms.listed_price, terms.net_price);
    }

    #[test]
    fn test_zero_tcp_is_insufficient_input() {
        let mut params = sample_params();
        params.total_contract_price = dec!(0);
        assert!(compute(&params).is_none());
    }
}
