use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::params::ContractParameters;
use crate::schemes::{
    balance_80, deferred, payment_20_80, spot_cash, spot_down, Balance80Terms, DeferredTerms,
    SpotCashTerms, SpotDownTerms, TwentyEightyTerms,
};
use crate::types::{with_metadata, ComputationOutput};

/// Parallel breakdowns of the five payment schemes for one contract. Every
/// field is `None` when the contract price is not positive; consumers must
/// render that placeholder state distinctly from computed zeroes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_cash: Option<SpotCashTerms>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deferred: Option<DeferredTerms>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_down: Option<SpotDownTerms>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_20_80: Option<TwentyEightyTerms>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_80: Option<Balance80Terms>,
}

/// Compute all five scheme breakdowns from one parameter snapshot.
///
/// Pure and synchronous: no I/O, no shared state, every derived figure
/// recomputed from the snapshot. Hosts re-invoke it on any parameter
/// change rather than patching a previous result.
pub fn compute(params: &ContractParameters) -> ComputationOutput<QuoteBreakdown> {
    let start = Instant::now();
    let warnings = collect_warnings(params);

    let breakdown = QuoteBreakdown {
        spot_cash: spot_cash::compute(params),
        deferred: deferred::compute(params),
        spot_down: spot_down::compute(params),
        payment_20_80: payment_20_80::compute(params),
        balance_80: balance_80::compute(params),
    };

    let elapsed = start.elapsed().as_micros() as u64;

    with_metadata(
        "Real Estate Payment Terms Quotation",
        params,
        warnings,
        elapsed,
        breakdown,
    )
}

/// Advisory only. Out-of-range inputs still flow through the formulas
/// unchanged; range enforcement belongs to producers.
fn collect_warnings(params: &ContractParameters) -> Vec<String> {
    let mut warnings = Vec::new();

    if params.total_contract_price <= Decimal::ZERO {
        warnings.push(
            "Total contract price is not positive — all schemes reported as insufficient input"
                .into(),
        );
        return warnings;
    }

    for (label, pct) in [
        ("Registration fee", params.registration_fee_percent),
        ("Move-in fee", params.move_in_fee_percent),
        ("Spot Cash discount", params.spot_cash_discount_percent),
        ("Deferred discount", params.deferred_discount_percent),
        ("Spot Down discount", params.spot_down_discount_percent),
    ] {
        if pct < Decimal::ZERO {
            warnings.push(format!("{label} percent {pct} is negative"));
        }
        if pct > dec!(100) {
            warnings.push(format!("{label} percent {pct} exceeds 100%"));
        }
    }

    if params.reservation_fee < Decimal::ZERO {
        warnings.push(format!(
            "Reservation fee {} is negative",
            params.reservation_fee
        ));
    }

    warnings
}
