mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::quote::QuoteArgs;
use commands::reservation::ReservationFeeArgs;

/// Real-estate payment-terms quotations
#[derive(Parser)]
#[command(
    name = "ptq",
    version,
    about = "Real-estate payment-terms quotations",
    long_about = "Quotes purchase financing for a real-estate contract with decimal \
                  precision: Spot Cash, Deferred Payment, Spot Down Payment, 20/80 \
                  Payment and 80%-Balance long-term financing, each with its \
                  amortization or factor-rate schedule."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Full quote: all five payment schemes side by side
    Quote(QuoteArgs),
    /// Spot Cash scheme only
    SpotCash(QuoteArgs),
    /// Deferred Payment scheme only
    Deferred(QuoteArgs),
    /// Spot Down Payment scheme only
    SpotDown(QuoteArgs),
    /// 20/80 Payment scheme only
    TwentyEighty(QuoteArgs),
    /// 80%-Balance long-term financing only
    Balance80(QuoteArgs),
    /// Look up the tiered reservation fee for a contract price
    ReservationFee(ReservationFeeArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Quote(args) => commands::quote::run_quote(args),
        Commands::SpotCash(args) => commands::quote::run_scheme(args, commands::quote::Scheme::SpotCash),
        Commands::Deferred(args) => commands::quote::run_scheme(args, commands::quote::Scheme::Deferred),
        Commands::SpotDown(args) => commands::quote::run_scheme(args, commands::quote::Scheme::SpotDown),
        Commands::TwentyEighty(args) => {
            commands::quote::run_scheme(args, commands::quote::Scheme::TwentyEighty)
        }
        Commands::Balance80(args) => {
            commands::quote::run_scheme(args, commands::quote::Scheme::Balance80)
        }
        Commands::ReservationFee(args) => commands::reservation::run_reservation_fee(args),
        Commands::Version => {
            println!("ptq {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
