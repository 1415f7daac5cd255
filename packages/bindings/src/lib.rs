use napi::Result as NapiResult;
use napi_derive::napi;

use payment_terms_core::params::ContractParameters;
use payment_terms_core::reservation::ReservationFeeSchedule;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Compute the full five-scheme quote breakdown. The UI host calls this on
/// every parameter change with a complete snapshot; partial updates are not
/// supported.
#[napi]
pub fn compute_quote(params_json: String) -> NapiResult<String> {
    let params: ContractParameters = serde_json::from_str(&params_json).map_err(to_napi_error)?;
    let output = payment_terms_core::engine::compute(&params);
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Look up the tiered reservation fee for a contract price. Returns the fee
/// as a JSON value (string-encoded decimal, or null when no tier matches).
#[napi]
pub fn reservation_fee_for(schedule_json: String, tcp: String) -> NapiResult<String> {
    let schedule: ReservationFeeSchedule =
        serde_json::from_str(&schedule_json).map_err(to_napi_error)?;
    let schedule = ReservationFeeSchedule::new(schedule.tiers).map_err(to_napi_error)?;
    let tcp = tcp.parse().map_err(to_napi_error)?;
    serde_json::to_string(&schedule.fee_for(tcp)).map_err(to_napi_error)
}

/// Normalize a raw term list the way the engine expects: drop non-positive
/// and duplicate entries, preserving order.
#[napi]
pub fn normalize_terms(raw: Vec<i64>) -> Vec<u32> {
    payment_terms_core::params::normalize_terms(&raw)
}
