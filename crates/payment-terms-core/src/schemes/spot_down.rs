use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::fees;
use crate::listed_price::listed_price;
use crate::params::ContractParameters;
use crate::schemes::{BALANCE_RATIO, DOWN_PAYMENT_RATIO};
use crate::types::Money;

/// Spot Down Payment: 20% paid outright with a discount on that down
/// payment only; the 80% balance is reported here but financed separately
/// (see the 80%-Balance scheme). No amortization table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotDownTerms {
    /// 20% of TCP.
    pub down_payment: Money,
    /// Discount applied to the down payment, not to TCP.
    pub discount_amount: Money,
    /// Down payment net of its discount; the amount due at spot.
    pub net_down_payment: Money,
    /// 80% of TCP, left to long-term financing.
    pub balance_80: Money,
    pub listed_price: Money,
    pub registration_fee: Money,
    pub move_in_fee: Money,
}

pub fn compute(params: &ContractParameters) -> Option<SpotDownTerms> {
    if !params.has_contract_price() {
        return None;
    }

    let tcp = params.total_contract_price;
    let down_payment = tcp * DOWN_PAYMENT_RATIO;
    let discount_amount = down_payment * params.spot_down_discount_percent / dec!(100);
    let balance_80 = tcp * BALANCE_RATIO;

    let tlp = listed_price(tcp, tcp);
    let registration_fee = fees::registration_fee(
        tcp,
        params.registration_fee_percent,
        params.use_listed_price_for_registration_fee,
        tlp,
    );
    let move_in_fee = fees::move_in_fee(tlp, params.move_in_fee_percent);

    Some(SpotDownTerms {
        down_payment,
        discount_amount,
        net_down_payment: down_payment - discount_amount,
        balance_80,
        listed_price: tlp,
        registration_fee,
        move_in_fee,
    })
}
