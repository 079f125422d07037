//! Menu composition
//!
//! A menu item is anything with a description and a non-negative price. The
//! stock beverages are the base items; add-ons wrap any item and extend its
//! description and price additively, so `milk(chocolate(latte))` is a single
//! item with a cumulative price. The factory constructs stock beverages from
//! a string kind.

pub mod addon;
pub mod beverage;
pub mod factory;
pub mod item;

// Re-exports
pub use addon::{AddOn, AddOnKind};
pub use beverage::Beverage;
pub use factory::BeverageFactory;
pub use item::MenuItem;
