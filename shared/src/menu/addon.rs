//! Add-on wrappers for menu items

use super::item::MenuItem;
use crate::money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Extra ingredient added on top of a drink
///
/// Each kind carries a fixed label suffix and price increment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddOnKind {
    Milk,
    Chocolate,
    WhippedCream,
}

impl AddOnKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Milk => "Milk",
            Self::Chocolate => "Chocolate",
            Self::WhippedCream => "Whipped cream",
        }
    }

    pub fn surcharge(&self) -> Decimal {
        match self {
            Self::Milk => money::MILK,
            Self::Chocolate => money::CHOCOLATE,
            Self::WhippedCream => money::WHIPPED_CREAM,
        }
    }
}

impl fmt::Display for AddOnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A menu item wrapping exactly one inner item
///
/// Owns its inner item exclusively. The wrapped description is the inner
/// description plus the kind's suffix, appended left to right as wrapping
/// occurs; the wrapped price is the inner price plus the kind's increment.
/// Add-ons stack: wrapping an already wrapped item accumulates both.
#[derive(Debug)]
pub struct AddOn {
    kind: AddOnKind,
    inner: Box<dyn MenuItem>,
}

impl AddOn {
    pub fn new(kind: AddOnKind, inner: impl MenuItem + 'static) -> Self {
        Self {
            kind,
            inner: Box::new(inner),
        }
    }

    pub fn kind(&self) -> AddOnKind {
        self.kind
    }
}

impl MenuItem for AddOn {
    fn description(&self) -> String {
        format!("{} + {}", self.inner.description(), self.kind.label())
    }

    fn price(&self) -> Decimal {
        self.inner.price() + self.kind.surcharge()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Beverage;

    #[test]
    fn test_single_wrap() {
        let drink = AddOn::new(AddOnKind::Milk, Beverage::Latte);
        assert_eq!(drink.description(), "Latte + Milk");
        assert_eq!(drink.price(), Decimal::new(900, 2)); // 7.50 + 1.50
    }

    #[test]
    fn test_stacked_wraps_accumulate_in_application_order() {
        let drink = AddOn::new(
            AddOnKind::WhippedCream,
            AddOn::new(AddOnKind::Chocolate, Beverage::Espresso),
        );
        assert_eq!(drink.description(), "Espresso + Chocolate + Whipped cream");
        // 5.00 + 2.00 + 2.50
        assert_eq!(drink.price(), Decimal::new(950, 2));
    }

    #[test]
    fn test_price_is_base_plus_sum_of_increments() {
        let base = Beverage::Cappuccino.price();
        let wrapped = AddOn::new(
            AddOnKind::Milk,
            AddOn::new(AddOnKind::Milk, Beverage::Cappuccino),
        );
        assert_eq!(
            wrapped.price(),
            base + AddOnKind::Milk.surcharge() + AddOnKind::Milk.surcharge()
        );
    }
}
