//! Priced menu item capability

use rust_decimal::Decimal;
use std::fmt;

/// Anything that can be put on an order: a description and a price
///
/// Implementations must keep `price() >= 0` and must return a description
/// that deterministically reflects the full composition chain, outermost
/// wrapper last. Prices carry raw fractional units; implementations never
/// round.
pub trait MenuItem: fmt::Debug {
    fn description(&self) -> String;
    fn price(&self) -> Decimal;
}
