//! Station and reprocessing tax.

use rust_decimal::prelude::ToPrimitive;

use super::error::DomainError;
use super::fill::UsedOrder;
use super::money::Volume;

/// Corporation standings range from -10 to 10.
pub const STANDING_LIMIT: f64 = 10.0;

/// Base station tax in percent at zero standing.
const BASE_STATION_TAX_PERCENT: f64 = 5.0;

/// Tax reduction in percent per point of corporation standing.
const TAX_REDUCTION_PER_STANDING: f64 = 0.75;

/// Station tax fraction for a corporation standing.
///
/// 5% at zero standing, reduced by 0.75% per standing point and never
/// negative; standing 6.67 or better is tax free.
///
/// ```
/// use evetrade::domain::tax::station_tax;
///
/// assert!((station_tax(0.0) - 0.05).abs() < 1e-12);
/// assert!((station_tax(4.0) - 0.02).abs() < 1e-12);
/// assert_eq!(station_tax(10.0), 0.0);
/// ```
#[must_use]
pub fn station_tax(corp_standing: f64) -> f64 {
    (BASE_STATION_TAX_PERCENT - TAX_REDUCTION_PER_STANDING * corp_standing).max(0.0) / 100.0
}

/// Station tax fraction, rejecting standings outside -10..=10.
pub fn checked_station_tax(corp_standing: f64) -> Result<f64, DomainError> {
    if !corp_standing.is_finite() || corp_standing.abs() > STANDING_LIMIT {
        return Err(DomainError::InvalidStanding(corp_standing));
    }
    Ok(station_tax(corp_standing))
}

/// ISK tax owed when reprocessing `desired_volume` units valued at the
/// volume-weighted average price of `orders`.
///
/// Returns zero for an empty fill or a zero volume.
#[must_use]
pub fn reprocessing_tax(orders: &[UsedOrder], station_tax: f64, desired_volume: Volume) -> f64 {
    let filled: Volume = orders.iter().map(|order| order.volume).sum();
    if filled == 0 || desired_volume == 0 {
        return 0.0;
    }

    let value: f64 = orders
        .iter()
        .map(|order| order.value().to_f64().unwrap_or(0.0))
        .sum();
    let average_price = value / filled as f64;

    average_price * desired_volume as f64 * station_tax
}
