//! Handler for `quote`.

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::QuoteArgs;
use super::output;
use crate::application::quote;
use crate::error::Result;
use crate::infrastructure::bootstrap::Market;
use crate::infrastructure::config::market::MarketConfig;

#[derive(Tabled)]
struct LegRow {
    #[tabled(rename = "Leg")]
    leg: &'static str,
    #[tabled(rename = "Volume")]
    volume: u64,
    #[tabled(rename = "Price")]
    price: String,
}

/// Execute `quote`.
pub fn execute(args: &QuoteArgs, market: &Market, config: &MarketConfig) -> Result<()> {
    let sources = market.store.sell_orders(args.type_id, args.source);
    let destinations = market
        .provider
        .reachable_buy_orders(args.type_id, args.destination);

    let mut options = config.fill_options();
    if args.partial {
        options.require_volume = false;
    }
    let standing = args.standing.unwrap_or(config.corp_standing);

    let quote = quote(&sources, &destinations, args.volume, options, standing)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "quote",
            "type_id": args.type_id,
            "from": args.source,
            "to": args.destination,
            "quote": quote,
            "margin": quote.margin(),
        }));
        return Ok(());
    }

    if output::is_quiet() {
        output::field("Profit", quote.profit);
        return Ok(());
    }

    let rows: Vec<LegRow> = quote
        .buy_fill
        .iter()
        .map(|used| LegRow {
            leg: "buy",
            volume: used.volume,
            price: used.price.to_string(),
        })
        .chain(quote.sell_fill.iter().map(|used| LegRow {
            leg: "sell",
            volume: used.volume,
            price: used.price.to_string(),
        }))
        .collect();

    output::section("Quote");
    if rows.is_empty() {
        output::note("(no orders used)");
    } else {
        output::lines(&Table::new(rows).to_string());
    }

    output::section("Totals");
    output::field("Bought", quote.bought);
    output::field("Sold", quote.sold);
    output::field("Cost", format!("{} ISK", quote.cost));
    output::field("Revenue", format!("{} ISK", quote.revenue));
    output::field("Tax", format!("{} ISK ({:.2}%)", quote.tax, quote.tax_rate * 100.0));
    output::field("Profit", output::signed(quote.profit));
    if quote.sold < quote.bought {
        output::warning(&format!(
            "{} units could not be sold",
            quote.bought - quote.sold
        ));
    }
    Ok(())
}
