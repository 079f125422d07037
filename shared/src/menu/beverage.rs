//! Stock beverages

use super::item::MenuItem;
use crate::money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base drink, fixed set
///
/// Each variant has a fixed description and base price and is immutable once
/// constructed. Value semantics: every construction yields a fresh instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Beverage {
    Espresso,
    Cappuccino,
    Latte,
}

impl Beverage {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Espresso => "Espresso",
            Self::Cappuccino => "Cappuccino",
            Self::Latte => "Latte",
        }
    }

    pub fn base_price(&self) -> Decimal {
        match self {
            Self::Espresso => money::ESPRESSO,
            Self::Cappuccino => money::CAPPUCCINO,
            Self::Latte => money::LATTE,
        }
    }
}

impl MenuItem for Beverage {
    fn description(&self) -> String {
        self.label().to_string()
    }

    fn price(&self) -> Decimal {
        self.base_price()
    }
}

impl fmt::Display for Beverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_prices_and_descriptions() {
        assert_eq!(Beverage::Espresso.description(), "Espresso");
        assert_eq!(Beverage::Espresso.price(), Decimal::new(500, 2));

        assert_eq!(Beverage::Cappuccino.description(), "Cappuccino");
        assert_eq!(Beverage::Cappuccino.price(), Decimal::new(800, 2));

        assert_eq!(Beverage::Latte.description(), "Latte");
        assert_eq!(Beverage::Latte.price(), Decimal::new(750, 2));
    }
}
