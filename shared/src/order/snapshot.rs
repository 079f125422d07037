//! Serializable order summary
//!
//! Computed on demand from the live aggregate; used by presentation layers
//! (receipt rendering, export) that must not hold the aggregate itself.

use super::status::OrderStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One item line as it appears on a receipt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptLine {
    pub description: String,
    /// Raw price; formatting to 2 decimals happens at the output boundary
    pub price: Decimal,
}

/// Point-in-time summary of an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSnapshot {
    pub order_id: u64,
    pub customer: String,
    pub status: OrderStatus,
    pub items: Vec<ReceiptLine>,
    pub total: Decimal,
}
