//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{PvCouponArgs, PvZeroArgs, YtmCouponArgs, YtmZeroArgs};

/// Bondcalc - bond price and yield calculator
#[derive(Parser)]
#[command(name = "bondcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Reject unreadable numbers instead of reading them as zero
    #[arg(long, global = true)]
    pub strict: bool,

    /// Evaluator configuration file (TOML, or JSON with a .json extension)
    #[arg(long, global = true, env = "BONDCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price of a coupon bond from its yield
    PvCoupon(PvCouponArgs),

    /// Price of a zero-coupon bond from its yield
    PvZero(PvZeroArgs),

    /// Yield to maturity of a zero-coupon bond from its price
    YtmZero(YtmZeroArgs),

    /// Yield to maturity of a coupon bond from its price (solved numerically)
    YtmCoupon(YtmCouponArgs),

    /// List the supported formulas and their inputs
    Formulas,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
