//! Two-leg arbitrage quotes.
//!
//! A quote buys a volume from the source market's sell orders, cheapest
//! first, then sells what was bought into the destination's buy orders,
//! richest first. Station tax applies to the sale.

use std::sync::Arc;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{
    checked_station_tax, fill_orders, DomainError, ExternalOrder, FillOptions,
    FillableOrder, UsedOrder, Volume,
};

/// Priced result of moving a volume between two markets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// Units bought at the source.
    pub bought: Volume,
    /// Units sold at the destination.
    pub sold: Volume,
    /// ISK spent buying.
    pub cost: Decimal,
    /// ISK received selling, before tax.
    pub revenue: Decimal,
    /// Station tax fraction applied to the sale.
    pub tax_rate: f64,
    /// ISK owed in tax.
    pub tax: Decimal,
    /// Revenue minus cost and tax.
    pub profit: Decimal,
    /// Slices taken from source sell orders.
    pub buy_fill: Vec<UsedOrder>,
    /// Slices sold into destination buy orders.
    pub sell_fill: Vec<UsedOrder>,
}

impl Quote {
    /// Returns true if the trade makes money after tax.
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.profit > Decimal::ZERO
    }

    /// Profit as a fraction of cost, zero when nothing was bought.
    #[must_use]
    pub fn margin(&self) -> Decimal {
        if self.cost.is_zero() {
            return Decimal::ZERO;
        }
        self.profit / self.cost
    }
}

fn fillable(orders: &[Arc<ExternalOrder>], ascending: bool) -> Vec<FillableOrder> {
    let mut fillable: Vec<FillableOrder> =
        orders.iter().map(|order| FillableOrder::from(order.as_ref())).collect();
    if ascending {
        fillable.sort_by(|a, b| a.price.cmp(&b.price));
    } else {
        fillable.sort_by(|a, b| b.price.cmp(&a.price));
    }
    fillable
}

/// Quote buying `volume` from `sell_orders` and selling it into
/// `buy_orders`.
///
/// Orders are sorted here. A standing outside -10..=10 fails with
/// [`DomainError::InvalidStanding`]. With `options.require_volume` either leg running
/// short fails with [`DomainError::InsufficientVolume`]; otherwise the
/// quote covers whatever both legs could fill.
pub fn quote(
    sell_orders: &[Arc<ExternalOrder>],
    buy_orders: &[Arc<ExternalOrder>],
    volume: Volume,
    options: FillOptions,
    corp_standing: f64,
) -> Result<Quote, DomainError> {
    let tax_rate = checked_station_tax(corp_standing)?;

    let bought = fill_orders(&fillable(sell_orders, true), volume, options)?;
    let bought_volume = bought.filled_volume();

    let sold = fill_orders(&fillable(buy_orders, false), bought_volume, options)?;
    let sold_volume = sold.filled_volume();

    // Units bought but not sold are carried at cost.
    let cost = bought.total_value();
    let revenue = sold.total_value();
    // Tax is charged on the sale value.
    let rate = Decimal::from_f64(tax_rate).ok_or(DomainError::InvalidStanding(corp_standing))?;
    let tax = (revenue * rate).round_dp(2);

    Ok(Quote {
        bought: bought_volume,
        sold: sold_volume,
        cost,
        revenue,
        tax_rate,
        tax,
        profit: revenue - cost - tax,
        buy_fill: bought.into_used(),
        sell_fill: sold.into_used(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LocationId, OrderSide, TypeId};
    use rust_decimal_macros::dec;

    fn order(side: OrderSide, volume: Volume, price: Decimal) -> Arc<ExternalOrder> {
        Arc::new(
            ExternalOrder::builder(side, TypeId::new(34), LocationId::new(1))
                .price(price)
                .volume_remaining(volume)
                .build(),
        )
    }

    #[test]
    fn buys_cheapest_and_sells_richest() {
        let sells = [
            order(OrderSide::Sell, 10, dec!(6)),
            order(OrderSide::Sell, 10, dec!(5)),
        ];
        let buys = [
            order(OrderSide::Buy, 5, dec!(7)),
            order(OrderSide::Buy, 50, dec!(8)),
        ];

        // Perfect standing: no tax.
        let quote = quote(&sells, &buys, 15, FillOptions::strict(), 10.0).unwrap();

        assert_eq!(quote.buy_fill, vec![UsedOrder::new(10, dec!(5)), UsedOrder::new(5, dec!(6))]);
        assert_eq!(quote.sell_fill, vec![UsedOrder::new(15, dec!(8))]);
        assert_eq!(quote.cost, dec!(80));
        assert_eq!(quote.revenue, dec!(120));
        assert_eq!(quote.tax, dec!(0));
        assert_eq!(quote.profit, dec!(40));
        assert_eq!(quote.margin(), dec!(0.5));
    }

    #[test]
    fn tax_reduces_profit() {
        let sells = [order(OrderSide::Sell, 100, dec!(1))];
        let buys = [order(OrderSide::Buy, 100, dec!(2))];

        // Zero standing: 5% of 200 ISK.
        let quote = quote(&sells, &buys, 100, FillOptions::strict(), 0.0).unwrap();

        assert_eq!(quote.tax, dec!(10));
        assert_eq!(quote.profit, dec!(90));
        assert!(quote.is_profitable());
    }

    #[test]
    fn strict_quote_fails_on_thin_destination() {
        let sells = [order(OrderSide::Sell, 100, dec!(1))];
        let buys = [order(OrderSide::Buy, 10, dec!(2))];

        let err = quote(&sells, &buys, 100, FillOptions::strict(), 0.0).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientVolume {
                requested: 100,
                available: 10
            }
        );
    }

    #[test]
    fn rejects_standing_out_of_range() {
        let sells = [order(OrderSide::Sell, 100, dec!(1))];
        let buys = [order(OrderSide::Buy, 100, dec!(2))];

        let err = quote(&sells, &buys, 100, FillOptions::strict(), -1e30).unwrap_err();
        assert_eq!(err, DomainError::InvalidStanding(-1e30));

        let err = quote(&sells, &buys, 100, FillOptions::strict(), 10.5).unwrap_err();
        assert_eq!(err, DomainError::InvalidStanding(10.5));
    }

    #[test]
    fn partial_quote_keeps_unsold_units_at_cost() {
        let sells = [order(OrderSide::Sell, 100, dec!(1))];
        let buys = [order(OrderSide::Buy, 10, dec!(2))];

        let quote = quote(&sells, &buys, 100, FillOptions::partial(), 10.0).unwrap();

        assert_eq!(quote.bought, 100);
        assert_eq!(quote.sold, 10);
        assert_eq!(quote.profit, dec!(-80));
        assert!(!quote.is_profitable());
    }
}
