use serde::{Deserialize, Serialize};

use crate::factor_rate::{factor_rate_table, FactorRateRow};
use crate::fees;
use crate::listed_price::listed_price;
use crate::params::ContractParameters;
use crate::schemes::BALANCE_RATIO;
use crate::types::Money;

/// 80%-Balance long-term financing: the financed balance expanded into the
/// fixed factor-rate buckets. Terms here are not user-configurable and no
/// move-in fee applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance80Terms {
    /// 80% of TCP.
    pub balance_80: Money,
    pub listed_price: Money,
    pub registration_fee: Money,
    pub balance_80_with_registration_fee: Money,
    /// Empty when the balance is non-positive (unavailable).
    pub financing: Vec<FactorRateRow>,
}

pub fn compute(params: &ContractParameters) -> Option<Balance80Terms> {
    if !params.has_contract_price() {
        return None;
    }

    let tcp = params.total_contract_price;
    let balance_80 = tcp * BALANCE_RATIO;

    let tlp = listed_price(tcp, tcp);
    let registration_fee = fees::registration_fee(
        tcp,
        params.registration_fee_percent,
        params.use_listed_price_for_registration_fee,
        tlp,
    );
    let balance_80_with_registration_fee = balance_80 + registration_fee;

    let financing = factor_rate_table(balance_80, balance_80_with_registration_fee);

    Some(Balance80Terms {
        balance_80,
        listed_price: tlp,
        registration_fee,
        balance_80_with_registration_fee,
        financing,
    })
}
