//! Order status observers
//!
//! Observers are notified synchronously, in attachment order, every time an
//! order's status changes. They read the live order by reference; there is
//! no snapshotting between the status write and the notification.
//!
//! Membership in an order's observer set is keyed on [`OrderObserver::observer_id`],
//! an explicit stable identity chosen at construction. Two boards for two
//! physical screens get distinct ids via [`StatusBoard::named`]; structural
//! equality plays no part.

use super::Order;
use super::status::OrderStatus;
use crate::console::MessageSink;
use crate::error::{AppResult, DomainError};
use std::fmt;
use std::rc::Rc;

/// Reacts to order status changes
pub trait OrderObserver: fmt::Debug {
    /// Stable identity used for attach/detach membership
    fn observer_id(&self) -> &str;

    /// Called after each status assignment with the live order
    ///
    /// An error here aborts the remainder of the notification round.
    fn update(&self, order: &Order) -> AppResult<()>;
}

/// Notifies the customer when their drink is being made or is ready
pub struct CustomerNotifier {
    id: String,
    name: String,
    sink: Rc<dyn MessageSink>,
}

impl CustomerNotifier {
    pub fn new(name: impl Into<String>, sink: Rc<dyn MessageSink>) -> AppResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::EmptyCustomerName);
        }
        Ok(Self {
            id: format!("customer-notifier:{name}"),
            name,
            sink,
        })
    }
}

impl OrderObserver for CustomerNotifier {
    fn observer_id(&self) -> &str {
        &self.id
    }

    fn update(&self, order: &Order) -> AppResult<()> {
        match order.status() {
            OrderStatus::Preparing => self.sink.emit(&format!(
                "📱 SMS to {}: order #{} is being prepared",
                self.name,
                order.id()
            )),
            OrderStatus::Ready => self.sink.emit(&format!(
                "📱 SMS to {}: order #{} is READY!",
                self.name,
                order.id()
            )),
            _ => {}
        }
        Ok(())
    }
}

impl fmt::Debug for CustomerNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerNotifier")
            .field("id", &self.id)
            .finish()
    }
}

/// Shop display panel; reacts to every status
pub struct StatusBoard {
    id: String,
    sink: Rc<dyn MessageSink>,
}

impl StatusBoard {
    pub fn new(sink: Rc<dyn MessageSink>) -> Self {
        Self {
            id: "status-board".to_string(),
            sink,
        }
    }

    /// A board with its own identity, for shops running several screens
    pub fn named(label: impl Into<String>, sink: Rc<dyn MessageSink>) -> AppResult<Self> {
        let label = label.into().trim().to_string();
        if label.is_empty() {
            return Err(DomainError::EmptyObserverName);
        }
        Ok(Self {
            id: format!("status-board:{label}"),
            sink,
        })
    }
}

impl OrderObserver for StatusBoard {
    fn observer_id(&self) -> &str {
        &self.id
    }

    fn update(&self, order: &Order) -> AppResult<()> {
        self.sink.emit(&format!(
            "📺 Panel update: order #{} -> {}",
            order.id(),
            order.status()
        ));
        Ok(())
    }
}

impl fmt::Debug for StatusBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusBoard").field("id", &self.id).finish()
    }
}

/// Records a completion metric when an order is delivered
pub struct KitchenMetrics {
    id: String,
    sink: Rc<dyn MessageSink>,
}

impl KitchenMetrics {
    pub fn new(sink: Rc<dyn MessageSink>) -> Self {
        Self {
            id: "kitchen-metrics".to_string(),
            sink,
        }
    }
}

impl OrderObserver for KitchenMetrics {
    fn observer_id(&self) -> &str {
        &self.id
    }

    fn update(&self, order: &Order) -> AppResult<()> {
        if order.status() == OrderStatus::Delivered {
            let timestamp = chrono::Local::now().format("%H:%M:%S");
            self.sink.emit(&format!(
                "📊 Metric recorded: order #{} completed at {timestamp}",
                order.id()
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for KitchenMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KitchenMetrics")
            .field("id", &self.id)
            .finish()
    }
}
