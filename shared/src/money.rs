//! Money helpers using rust_decimal for precision
//!
//! All monetary values in the core are `Decimal` and carry raw fractional
//! currency units end to end. Nothing rounds during composition or summation;
//! rounding to 2 decimal places happens once, at the presentation boundary,
//! via [`format_amount`].

use rust_decimal::prelude::*;

pub use rust_decimal::Decimal;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

// ── Stock menu prices ───────────────────────────────────────────────

pub const ESPRESSO: Decimal = Decimal::from_parts(500, 0, 0, false, 2);
pub const CAPPUCCINO: Decimal = Decimal::from_parts(800, 0, 0, false, 2);
pub const LATTE: Decimal = Decimal::from_parts(750, 0, 0, false, 2);

pub const MILK: Decimal = Decimal::from_parts(150, 0, 0, false, 2);
pub const CHOCOLATE: Decimal = Decimal::from_parts(200, 0, 0, false, 2);
pub const WHIPPED_CREAM: Decimal = Decimal::from_parts(250, 0, 0, false, 2);

/// Format a monetary value with exactly two fractional digits
///
/// This is the only place precision is dropped; core arithmetic never calls
/// it.
pub fn format_amount(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_prices() {
        assert_eq!(ESPRESSO, Decimal::new(500, 2));
        assert_eq!(CAPPUCCINO, Decimal::new(800, 2));
        assert_eq!(LATTE, Decimal::new(750, 2));
        assert_eq!(MILK, Decimal::new(150, 2));
        assert_eq!(CHOCOLATE, Decimal::new(200, 2));
        assert_eq!(WHIPPED_CREAM, Decimal::new(250, 2));
    }

    #[test]
    fn test_format_amount_two_digits() {
        assert_eq!(format_amount(Decimal::new(750, 2)), "7.50");
        assert_eq!(format_amount(Decimal::new(5, 0)), "5.00");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_format_amount_rounds_half_up() {
        // 7.505 -> 7.51 under midpoint-away-from-zero
        assert_eq!(format_amount(Decimal::new(7505, 3)), "7.51");
        assert_eq!(format_amount(Decimal::new(7504, 3)), "7.50");
    }
}
