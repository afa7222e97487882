//! Handler for `station-tax`.

use serde_json::json;

use super::command::StationTaxArgs;
use super::output;
use crate::domain::station_tax;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::market::{MarketConfig, STANDING_LIMIT};

/// Execute `station-tax`.
pub fn execute(args: &StationTaxArgs, config: &MarketConfig) -> Result<()> {
    let standing = args.standing.unwrap_or(config.corp_standing);
    if !standing.is_finite() || standing.abs() > STANDING_LIMIT {
        return Err(ConfigError::InvalidValue {
            field: "standing",
            reason: format!("must be between -{STANDING_LIMIT} and {STANDING_LIMIT}"),
        }
        .into());
    }

    let tax = station_tax(standing);

    if output::is_json() {
        output::json_output(json!({
            "command": "station-tax",
            "standing": standing,
            "tax": tax,
        }));
        return Ok(());
    }

    output::section("Station tax");
    output::field("Standing", standing);
    output::field("Tax", format!("{:.2}%", tax * 100.0));
    Ok(())
}
