//! Receipt rendering
//!
//! The presentation boundary: this is where raw decimal prices become
//! two-digit currency strings. The core never formats.

use shared::money::format_amount;
use shared::order::OrderSnapshot;

const WIDTH: usize = 50;

/// Render an order summary as a printable receipt
pub fn render(snapshot: &OrderSnapshot) -> String {
    let mut lines = vec![
        "=".repeat(WIDTH),
        format!(
            "ORDER #{} - Customer: {}",
            snapshot.order_id, snapshot.customer
        ),
        format!("Status: {}", snapshot.status),
        "-".repeat(WIDTH),
    ];

    if snapshot.items.is_empty() {
        lines.push("  (no items yet)".to_string());
    } else {
        for (position, item) in snapshot.items.iter().enumerate() {
            lines.push(format!(
                "  {}. {} - €{}",
                position + 1,
                item.description,
                format_amount(item.price)
            ));
        }
    }

    lines.push("-".repeat(WIDTH));
    lines.push(format!("TOTAL: €{}", format_amount(snapshot.total)));
    lines.push("=".repeat(WIDTH));
    lines.join("\n")
}
