//! Beverage Counter - console front end
//!
//! # Module Structure
//!
//! ```text
//! counter/src/
//! ├── core/          # configuration
//! ├── utils/         # logging
//! ├── receipt.rs     # receipt rendering (presentation boundary)
//! └── main.rs        # demo driver
//! ```
//!
//! The domain lives in the `shared` crate; this crate only wires it to a
//! terminal: environment-driven configuration, tracing setup and the one
//! place monetary values are formatted to two decimals.

pub mod core;
pub mod receipt;
pub mod utils;

// Re-export 公共类型
pub use core::Config;
pub use utils::logger::{init_logger, init_logger_with_level};

/// Prepare the process environment: dotenv then logging
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").ok();
    init_logger_with_level(level.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
   ______                  __
  / ____/___  __  ______  / /____  _____
 / /   / __ \/ / / / __ \/ __/ _ \/ ___/
/ /___/ /_/ / /_/ / / / / /_/  __/ /
\____/\____/\__,_/_/ /_/\__/\___/_/
    "#
    );
}
