//! Monetary types for price and volume representation.

use rust_decimal::Decimal;

/// ISK price represented as a Decimal for precision.
pub type Price = Decimal;

/// Item volume (unit count). Orders never trade fractional units.
pub type Volume = u64;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn price_scales_by_volume() {
        let price: Price = dec!(1.50);
        let volume: Volume = 100;

        assert_eq!(price * Decimal::from(volume), dec!(150.00));
    }
}
