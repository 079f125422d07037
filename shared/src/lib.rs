//! Beverage Counter - order management domain
//!
//! # Architecture Overview
//!
//! This crate holds the in-memory order domain for a retail beverage counter:
//!
//! - **Menu** (`menu`): priced items, stock beverages, stackable add-ons and
//!   the keyed beverage factory
//! - **Payment** (`payment`): interchangeable payment methods (card, instant
//!   transfer, cash)
//! - **Order** (`order`): the order aggregate, its status lifecycle and the
//!   observers notified on every status change
//! - **Money** (`money`): decimal arithmetic and presentation formatting
//! - **Console** (`console`): the redirectable message stream observers and
//!   payment methods write to
//!
//! # Module Structure
//!
//! ```text
//! shared/src/
//! ├── error.rs       # domain errors, AppResult
//! ├── money.rs       # Decimal helpers, stock prices
//! ├── console.rs     # MessageSink trait + console/memory sinks
//! ├── menu/          # MenuItem, Beverage, AddOn, BeverageFactory
//! ├── payment.rs     # PaymentMethod (card, transfer, cash)
//! └── order/         # Order aggregate, status, observers, snapshot
//! ```
//!
//! Everything here is single-threaded, synchronous and ephemeral: state lives
//! only for the lifetime of one process run.

pub mod console;
pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod payment;

// Re-export 公共类型
pub use console::{ConsoleSink, MemorySink, MessageSink};
pub use error::{AppResult, DomainError, ErrorKind};
pub use menu::{AddOn, AddOnKind, Beverage, BeverageFactory, MenuItem};
pub use money::Decimal;
pub use order::{Order, OrderObserver, OrderSequence, OrderSnapshot, OrderStatus};
pub use payment::PaymentMethod;
