//! Handlers for `sell-price` and `buy-price`.

use serde_json::json;

use super::command::PriceArgs;
use super::output;
use crate::domain::ExternalOrder;
use crate::error::Result;
use crate::infrastructure::bootstrap::Market;

/// Execute `sell-price`.
pub fn execute_sell(args: &PriceArgs, market: &Market) -> Result<()> {
    let order = market.provider.type_sell_price(args.type_id, args.station_id);
    render("sell-price", "Best sell order", args, &order);
    Ok(())
}

/// Execute `buy-price`.
pub fn execute_buy(args: &PriceArgs, market: &Market) -> Result<()> {
    let order = market.provider.type_buy_price(args.type_id, args.station_id);
    render("buy-price", "Best reachable buy order", args, &order);
    Ok(())
}

fn render(command: &str, title: &str, args: &PriceArgs, order: &ExternalOrder) {
    let found = !order.is_sentinel();

    if output::is_json() {
        output::json_output(json!({
            "command": command,
            "type_id": args.type_id,
            "station_id": args.station_id,
            "found": found,
            "price": order.price(),
            "volume_remaining": order.volume_remaining(),
            "location_id": order.location_id(),
            "range": order.range().to_string(),
        }));
        return;
    }

    if output::is_quiet() {
        output::field("Price", order.price());
        return;
    }

    output::section(title);
    output::field("Type", args.type_id);
    output::field("Station", args.station_id);
    if !found {
        output::warning("no matching order");
        output::field("Price", order.price());
        return;
    }

    output::field("Price", output::highlight(format!("{} ISK", order.price())));
    output::field("Volume", order.volume_remaining());
    output::field("Location", order.location_id());
    output::field("Range", order.range());
}
