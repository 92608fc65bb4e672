//! Bondcalc CLI - bond price and yield calculator.
//!
//! # Usage
//!
//! ```bash
//! # Price a coupon bond
//! bondcalc pv-coupon --coupon 50 --face 1000 --periods 10 --yield 0.06
//!
//! # Yield of a zero-coupon bond
//! bondcalc ytm-zero --price 613.913 --face 1000 --periods 10
//!
//! # Yield of a coupon bond, as JSON
//! bondcalc --format json ytm-coupon --price 950 --face 1000 --coupon 50 --periods 10
//!
//! # List the supported formulas
//! bondcalc formulas
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::RunContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let evaluator_config = config::load(cli.config.as_deref())?;
    let ctx = RunContext::new(cli.format, cli.strict, evaluator_config)?;

    match cli.command {
        Commands::PvCoupon(args) => commands::calc::execute(&args, &ctx)?,
        Commands::PvZero(args) => commands::calc::execute(&args, &ctx)?,
        Commands::YtmZero(args) => commands::calc::execute(&args, &ctx)?,
        Commands::YtmCoupon(args) => commands::calc::execute(&args, &ctx)?,
        Commands::Formulas => commands::formulas::execute(ctx.format)?,
    }

    Ok(())
}

/// Logs go to stderr so results on stdout stay machine-readable.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
