//! Crossrate CLI
//!
//! Loads a quote file and prints one conversion.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crossrate_cli::{load_quotes, CliConfig};
use crossrate_common::Currency;
use crossrate_fx::{ConversionRequest, Converter, RateSide};

/// Crossrate converter CLI
#[derive(Parser, Debug)]
#[command(name = "crossrate")]
#[command(about = "Convert between currencies by chaining quoted pairs")]
struct Args {
    /// Currency to convert from
    from: String,

    /// Currency to convert to
    to: String,

    /// Amount to convert
    #[arg(short, long, default_value = "1")]
    amount: Decimal,

    /// Quote side to use (bid or ask)
    #[arg(short, long, default_value = "ask")]
    side: RateSide,

    /// Quote file, overrides CROSSRATE_QUOTES_PATH
    #[arg(short, long)]
    quotes: Option<PathBuf>,

    /// Print the route used
    #[arg(long)]
    show_path: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = CliConfig::from_env();
    if let Some(path) = args.quotes.clone() {
        config.quotes_path = path;
    }

    init_logging(&config);
    config.log_rejected_env();

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(anyhow::anyhow!("Configuration error: {}", e));
    }

    let from: Currency = args.from.parse().context("Invalid source currency")?;
    let to: Currency = args.to.parse().context("Invalid target currency")?;

    let records = load_quotes(&config.quotes_path)?;
    let converter = Converter::with_config(&records, config.converter.clone())?;
    debug!(currencies = converter.currencies().len(), "Converter ready");

    let request = ConversionRequest::new(args.amount, from, to);
    let request = match args.side {
        RateSide::Bid => request.at_bid(),
        RateSide::Ask => request.at_ask(),
    };
    let conversion = converter.execute(request)?;

    if args.show_path {
        println!("{}", conversion.path);
    }
    println!("{}", converter.format(conversion.output));

    Ok(())
}

fn init_logging(config: &CliConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone()),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
