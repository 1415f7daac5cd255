use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use payment_terms_core::engine;
use payment_terms_core::params::{normalize_terms, ContractParameters};
use payment_terms_core::schemes;

use crate::input;

/// Contract parameters shared by the full quote and the per-scheme
/// subcommands. Blank/omitted flags default to zero, matching how the
/// proposal form treats an empty field.
#[derive(Args)]
pub struct QuoteArgs {
    /// Total Contract Price
    #[arg(long)]
    pub tcp: Option<Decimal>,

    /// Reservation fee amount (overrides --reservation-schedule)
    #[arg(long)]
    pub reservation_fee: Option<Decimal>,

    /// Path to a JSON or YAML reservation-fee tier schedule; used to derive
    /// the reservation fee from --tcp when --reservation-fee is not given
    #[arg(long)]
    pub reservation_schedule: Option<String>,

    /// Registration fee percentage (e.g. 1.5 for 1.5%)
    #[arg(long, default_value = "0")]
    pub registration_fee_percent: Decimal,

    /// Move-in fee percentage
    #[arg(long, default_value = "0")]
    pub move_in_fee_percent: Decimal,

    /// Charge the registration fee against the listed (VAT-exclusive) price
    #[arg(long)]
    pub use_listed_price: bool,

    /// Spot Cash discount percentage
    #[arg(long, default_value = "0")]
    pub spot_cash_discount: Decimal,

    /// Deferred Payment discount percentage
    #[arg(long, default_value = "0")]
    pub deferred_discount: Decimal,

    /// Spot Down Payment discount percentage (applied to the down payment)
    #[arg(long, default_value = "0")]
    pub spot_down_discount: Decimal,

    /// Deferred Payment term lengths in months, comma-separated (e.g. 12,24,36)
    #[arg(long)]
    pub deferred_terms: Option<String>,

    /// 20/80 down-payment term lengths in months, comma-separated
    #[arg(long)]
    pub twenty_eighty_terms: Option<String>,

    /// Path to a JSON ContractParameters file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub enum Scheme {
    SpotCash,
    Deferred,
    SpotDown,
    TwentyEighty,
    Balance80,
}

pub fn run_quote(args: QuoteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = resolve_params(args)?;
    Ok(serde_json::to_value(engine::compute(&params))?)
}

/// Quote a single scheme. Insufficient input serializes as null, which the
/// formatters render as the placeholder state.
pub fn run_scheme(args: QuoteArgs, scheme: Scheme) -> Result<Value, Box<dyn std::error::Error>> {
    let params = resolve_params(args)?;
    let value = match scheme {
        Scheme::SpotCash => serde_json::to_value(schemes::spot_cash::compute(&params))?,
        Scheme::Deferred => serde_json::to_value(schemes::deferred::compute(&params))?,
        Scheme::SpotDown => serde_json::to_value(schemes::spot_down::compute(&params))?,
        Scheme::TwentyEighty => serde_json::to_value(schemes::payment_20_80::compute(&params))?,
        Scheme::Balance80 => serde_json::to_value(schemes::balance_80::compute(&params))?,
    };
    Ok(value)
}

/// Assemble the parameter snapshot from a JSON file, piped stdin, or flags,
/// in that order of precedence.
fn resolve_params(args: QuoteArgs) -> Result<ContractParameters, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return Ok(input::file::read_json(path)?);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let tcp = args
        .tcp
        .ok_or("--tcp is required (or provide --input / piped JSON)")?;

    let reservation_fee = match (args.reservation_fee, &args.reservation_schedule) {
        (Some(fee), _) => fee,
        (None, Some(path)) => {
            let schedule = input::file::read_schedule(path)?;
            schedule.fee_for(tcp).unwrap_or(Decimal::ZERO)
        }
        (None, None) => Decimal::ZERO,
    };

    Ok(ContractParameters {
        total_contract_price: tcp,
        reservation_fee,
        registration_fee_percent: args.registration_fee_percent,
        move_in_fee_percent: args.move_in_fee_percent,
        use_listed_price_for_registration_fee: args.use_listed_price,
        spot_cash_discount_percent: args.spot_cash_discount,
        deferred_discount_percent: args.deferred_discount,
        spot_down_discount_percent: args.spot_down_discount,
        deferred_terms: parse_term_list(args.deferred_terms.as_deref()),
        payment_20_80_terms: parse_term_list(args.twenty_eighty_terms.as_deref()),
    })
}

/// Parse a comma-separated month list. Unparseable entries default to zero
/// and are then dropped by normalization, per the producer contract.
fn parse_term_list(raw: Option<&str>) -> Vec<u32> {
    let raw = match raw {
        Some(s) => s,
        None => return Vec::new(),
    };
    let parsed: Vec<i64> = raw
        .split(',')
        .map(|part| part.trim().parse::<i64>().unwrap_or(0))
        .collect();
    normalize_terms(&parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_term_list() {
        assert_eq!(parse_term_list(Some("12, 24,36")), vec![12, 24, 36]);
        assert_eq!(parse_term_list(Some("12,abc,-6,12")), vec![12]);
        assert!(parse_term_list(Some("")).is_empty());
        assert!(parse_term_list(None).is_empty());
    }
}
