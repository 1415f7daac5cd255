use serde::{Deserialize, Serialize};

use crate::amortization::{amortization_rows, AmortizationRow};
use crate::fees;
use crate::listed_price::listed_price;
use crate::params::ContractParameters;
use crate::schemes::{BALANCE_RATIO, DOWN_PAYMENT_RATIO};
use crate::types::Money;

/// 20/80 Payment: the 20% down payment amortized over the buyer's chosen
/// terms with the 80% balance financed separately. This scheme has no
/// discount input; the reservation fee nets directly against the down
/// payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwentyEightyTerms {
    /// 20% of TCP.
    pub down_payment: Money,
    /// down payment - reservation fee; the amount amortized.
    pub net_down_payment: Money,
    /// 80% of TCP, left to long-term financing.
    pub balance_80: Money,
    pub listed_price: Money,
    pub registration_fee: Money,
    pub move_in_fee: Money,
    /// net down payment + move-in fee
    pub with_move_in_fee: Money,
    /// net down payment + registration fee
    pub with_registration_fee: Money,
    /// net down payment + both fees
    pub with_both: Money,
    /// Empty when the term set is empty or the net down payment is
    /// non-positive.
    pub amortization: Vec<AmortizationRow>,
}

pub fn compute(params: &ContractParameters) -> Option<TwentyEightyTerms> {
    if !params.has_contract_price() {
        return None;
    }

    let tcp = params.total_contract_price;
    let down_payment = tcp * DOWN_PAYMENT_RATIO;
    let net_down_payment = down_payment - params.reservation_fee;
    let balance_80 = tcp * BALANCE_RATIO;

    let tlp = listed_price(tcp, tcp);
    let registration_fee = fees::registration_fee(
        tcp,
        params.registration_fee_percent,
        params.use_listed_price_for_registration_fee,
        tlp,
    );
    let move_in_fee = fees::move_in_fee(tlp, params.move_in_fee_percent);

    let amortization = amortization_rows(
        net_down_payment,
        registration_fee,
        move_in_fee,
        &params.payment_20_80_terms,
    );

    Some(TwentyEightyTerms {
        down_payment,
        net_down_payment,
        balance_80,
        listed_price: tlp,
        registration_fee,
        move_in_fee,
        with_move_in_fee: net_down_payment + move_in_fee,
        with_registration_fee: net_down_payment + registration_fee,
        with_both: net_down_payment + registration_fee + move_in_fee,
        amortization,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn sample_params() -> ContractParameters {
        ContractParameters {
            total_contract_price: dec!(5_000_000),
            reservation_fee: dec!(40_000),
            registration_fee_percent: dec!(1.5),
            move_in_fee_percent: dec!(1),
            payment_20_80_terms: vec![12, 24, 36],
            ..Default::default()
        }
    }

    #[test]
    fn test_net_down_payment() {
        let terms = compute(&sample_params()).unwrap();
        assert_eq!(terms.down_payment, dec!(1_000_000));
        assert_eq!(terms.net_down_payment, dec!(960_000));
        assert_eq!(terms.balance_80, dec!(4_000_000));
    }

    #[test]
    fn test_composite_figures() {
        let terms = compute(&sample_params()).unwrap();
        assert_eq!(
            terms.with_move_in_fee,
            terms.net_down_payment + terms.move_in_fee
        );
        assert_eq!(
            terms.with_registration_fee,
            terms.net_down_payment + terms.registration_fee
        );
        assert_eq!(
            terms.with_both,
            terms.net_down_payment + terms.registration_fee + terms.move_in_fee
        );
    }

    #[test]
    fn test_amortization_over_net_down_payment() {
        let terms = compute(&sample_params()).unwrap();
        assert_eq!(terms.amortization.len(), 3);
        assert_eq!(terms.amortization[0].base, dec!(960_000) / dec!(12));
        assert_eq!(terms.amortization[2].term_months, 36);
    }

    #[test]
    fn test_reservation_fee_above_down_payment_empties_table() {
        let mut params = sample_params();
        params.reservation_fee = dec!(1_200_000);
        let terms = compute(&params).unwrap();
        // Reported figures go negative by policy; only the schedule is
        // withheld.
        assert_eq!(terms.net_down_payment, dec!(-200_000));
        assert!(terms.amortization.is_empty());
    }
}
