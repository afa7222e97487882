//! Command-line interface: argument definitions, output and handlers.

pub mod command;
pub mod fill;
pub mod names;
pub mod output;
pub mod price;
pub mod quote;
pub mod tax;

use self::command::{Cli, Commands};
use crate::error::Result;
use crate::infrastructure::bootstrap::Market;
use crate::infrastructure::config::Config;

/// Run the parsed command against a loaded configuration.
pub fn execute(cli: &Cli, config: &Config) -> Result<()> {
    if let Commands::StationTax(args) = &cli.command {
        return tax::execute(args, &config.market);
    }

    let market = Market::open(&config.market.snapshot)?;
    match &cli.command {
        Commands::SellPrice(args) => price::execute_sell(args, &market),
        Commands::BuyPrice(args) => price::execute_buy(args, &market),
        Commands::Fill(args) => fill::execute(args, &market, &config.market),
        Commands::Quote(args) => quote::execute(args, &market, &config.market),
        Commands::Names(args) => names::execute(args, &market, &config.names),
        Commands::StationTax(args) => tax::execute(args, &config.market),
    }
}
