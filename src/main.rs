use clap::Parser;
use evetrade::adapter::inbound::cli::command::Cli;
use evetrade::adapter::inbound::cli::output::{self, OutputConfig};
use evetrade::adapter::inbound::cli::execute;
use evetrade::error::Result;
use evetrade::infrastructure::config::Config;
use tracing::debug;

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(snapshot) = &cli.snapshot {
        config.market.snapshot = snapshot.clone();
        config.validate()?;
    }
    Ok(config)
}

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.no_color));

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    config.init_logging();
    debug!(command = ?cli.command, "evetrade starting");

    if let Err(e) = execute(&cli, &config) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
