//! Command-line interface definitions.
//!
//! Defines the CLI structure for the evetrade application using `clap`.
//! Every command works over a market snapshot named in the configuration
//! file or passed with `--snapshot`.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::{LocationId, TypeId, Volume};

/// EVE Online market price lookups, order filling and arbitrage quotes
#[derive(Parser, Debug)]
#[command(name = "evetrade")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Market snapshot to use instead of the configured one
    #[arg(short, long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Print bare values only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colors
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the evetrade CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Best sell order for a type at a station
    SellPrice(PriceArgs),

    /// Best buy order reachable from a station
    BuyPrice(PriceArgs),

    /// Fill a volume against a station's orders
    Fill(FillArgs),

    /// Quote buying at one station and selling at another
    Quote(QuoteArgs),

    /// Station tax for a corporation standing
    StationTax(StationTaxArgs),

    /// Resolve generic names from the snapshot's name table
    Names(NamesArgs),
}

/// Arguments for `sell-price` and `buy-price`.
#[derive(Parser, Debug)]
pub struct PriceArgs {
    /// Item type id
    #[arg(long = "type")]
    pub type_id: TypeId,

    /// Station id
    #[arg(long = "station")]
    pub station_id: LocationId,
}

/// Market side to fill against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FillSide {
    /// Buy from the station's sell orders, cheapest first
    #[default]
    Buy,
    /// Sell into buy orders reachable from the station, richest first
    Sell,
}

/// Arguments for `fill`.
#[derive(Parser, Debug)]
pub struct FillArgs {
    /// Item type id
    #[arg(long = "type")]
    pub type_id: TypeId,

    /// Station id
    #[arg(long = "station")]
    pub station_id: LocationId,

    /// Units to fill
    #[arg(long)]
    pub volume: Volume,

    /// Whether you are buying or selling
    #[arg(long, value_enum, default_value_t = FillSide::Buy)]
    pub side: FillSide,

    /// Accept a partial fill even if the configuration requires volume
    #[arg(long)]
    pub partial: bool,

    /// Fill orders below their minimum volume
    #[arg(long)]
    pub ignore_min_volume: bool,
}

/// Arguments for `quote`.
#[derive(Parser, Debug)]
pub struct QuoteArgs {
    /// Item type id
    #[arg(long = "type")]
    pub type_id: TypeId,

    /// Station to buy at
    #[arg(long = "from")]
    pub source: LocationId,

    /// Station to sell at
    #[arg(long = "to")]
    pub destination: LocationId,

    /// Units to move
    #[arg(long)]
    pub volume: Volume,

    /// Accept a partial fill even if the configuration requires volume
    #[arg(long)]
    pub partial: bool,

    /// Corporation standing at the destination (overrides the configuration)
    #[arg(long, allow_hyphen_values = true)]
    pub standing: Option<f64>,
}

/// Arguments for `station-tax`.
#[derive(Parser, Debug)]
pub struct StationTaxArgs {
    /// Corporation standing (overrides the configuration)
    #[arg(long, allow_hyphen_values = true)]
    pub standing: Option<f64>,
}

/// Arguments for `names`.
#[derive(Parser, Debug)]
pub struct NamesArgs {
    /// Ids to resolve
    #[arg(required = true)]
    pub ids: Vec<u64>,

    /// Do not read or write the name cache file
    #[arg(long)]
    pub no_cache: bool,
}
