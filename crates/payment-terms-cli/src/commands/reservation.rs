use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use crate::input;

/// Arguments for reservation-fee schedule lookup
#[derive(Args)]
pub struct ReservationFeeArgs {
    /// Total Contract Price to look up
    #[arg(long)]
    pub tcp: Decimal,

    /// Path to a JSON or YAML reservation-fee tier schedule
    #[arg(long)]
    pub schedule: String,
}

pub fn run_reservation_fee(args: ReservationFeeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule = input::file::read_schedule(&args.schedule)?;
    let fee = schedule.fee_for(args.tcp);
    Ok(json!({
        "total_contract_price": args.tcp,
        "reservation_fee": fee,
    }))
}
