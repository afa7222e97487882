//! Handler for `fill`.

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::{FillArgs, FillSide};
use super::output;
use crate::domain::{fill_orders, reprocessing_tax, station_tax, FillableOrder, UsedOrder};
use crate::error::Result;
use crate::infrastructure::bootstrap::Market;
use crate::infrastructure::config::market::MarketConfig;

#[derive(Tabled)]
struct FillRow {
    #[tabled(rename = "Volume")]
    volume: u64,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl From<&UsedOrder> for FillRow {
    fn from(used: &UsedOrder) -> Self {
        Self {
            volume: used.volume,
            price: used.price.to_string(),
            value: used.value().to_string(),
        }
    }
}

/// Execute `fill`.
pub fn execute(args: &FillArgs, market: &Market, config: &MarketConfig) -> Result<()> {
    let orders = match args.side {
        FillSide::Buy => market.store.sell_orders(args.type_id, args.station_id),
        FillSide::Sell => market
            .provider
            .reachable_buy_orders(args.type_id, args.station_id),
    };
    let orders: Vec<FillableOrder> = orders
        .iter()
        .map(|order| FillableOrder::from(order.as_ref()))
        .collect();

    let mut options = config
        .fill_options()
        .ignoring_min_volume(config.ignore_min_volume || args.ignore_min_volume);
    if args.partial {
        options.require_volume = false;
    }

    let outcome = fill_orders(&orders, args.volume, options)?;
    let tax = match args.side {
        FillSide::Sell => reprocessing_tax(
            outcome.used(),
            station_tax(config.corp_standing),
            outcome.filled_volume(),
        ),
        FillSide::Buy => 0.0,
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "fill",
            "type_id": args.type_id,
            "station_id": args.station_id,
            "complete": outcome.is_complete(),
            "filled": outcome.filled_volume(),
            "shortfall": outcome.shortfall(),
            "total": outcome.total_value(),
            "tax": tax,
            "orders": outcome.used(),
        }));
        return Ok(());
    }

    if output::is_quiet() {
        output::field("Total", outcome.total_value());
        return Ok(());
    }

    output::section("Fill");
    let rows: Vec<FillRow> = outcome.used().iter().map(FillRow::from).collect();
    if rows.is_empty() {
        output::note("(no orders used)");
    } else {
        output::lines(&Table::new(rows).to_string());
    }

    output::section("Totals");
    output::field("Filled", outcome.filled_volume());
    output::field("Total", format!("{} ISK", outcome.total_value()));
    if !outcome.is_complete() {
        output::warning(&format!("{} units could not be filled", outcome.shortfall()));
    }
    if args.side == FillSide::Sell {
        output::field("Station tax", format!("{tax:.2} ISK"));
    }
    Ok(())
}
