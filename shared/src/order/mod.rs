//! Order aggregate
//!
//! The order is the aggregate root: it owns its items, its status, its
//! observers and its chosen payment method. Status writes go through
//! [`Order::set_status`], which validates nothing at runtime (the enum is
//! the validation) and fans out to every attached observer before returning.

pub mod observer;
pub mod snapshot;
pub mod status;

// Re-exports
pub use observer::{CustomerNotifier, KitchenMetrics, OrderObserver, StatusBoard};
pub use snapshot::{OrderSnapshot, ReceiptLine};
pub use status::OrderStatus;

use crate::error::{AppResult, DomainError};
use crate::menu::MenuItem;
use crate::payment::PaymentMethod;
use rust_decimal::Decimal;

/// Hands out process-unique order identifiers
///
/// Injected into [`Order::new`] rather than living in global state, so tests
/// and embedders run isolated, deterministic sequences. Identifiers are
/// strictly increasing, starting at 1, and each is assigned exactly once.
#[derive(Debug)]
pub struct OrderSequence {
    next: u64,
}

impl OrderSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for OrderSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// A single counter order
#[derive(Debug)]
pub struct Order {
    id: u64,
    customer: String,
    items: Vec<Box<dyn MenuItem>>,
    status: OrderStatus,
    observers: Vec<Box<dyn OrderObserver>>,
    payment: Option<PaymentMethod>,
}

impl Order {
    /// Open an order for a customer
    ///
    /// The customer name is trimmed and must not be empty. The identifier is
    /// drawn from `sequence` and never changes afterwards.
    pub fn new(sequence: &mut OrderSequence, customer: impl Into<String>) -> AppResult<Self> {
        let customer = customer.into().trim().to_string();
        if customer.is_empty() {
            return Err(DomainError::EmptyCustomerName);
        }

        let id = sequence.next_id();
        tracing::info!(order_id = id, customer = %customer, "Order opened");

        Ok(Self {
            id,
            customer,
            items: Vec::new(),
            status: OrderStatus::Received,
            observers: Vec::new(),
            payment: None,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn items(&self) -> &[Box<dyn MenuItem>] {
        &self.items
    }

    /// Append an item; insertion order is significant and duplicates are fine
    pub fn add_item(&mut self, item: impl MenuItem + 'static) {
        self.items.push(Box::new(item));
    }

    /// Sum of current item prices, recomputed on every call, never cached
    ///
    /// Zero for an empty order; this is not an error.
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |total, item| total + item.price())
    }

    /// Choose how this order will be paid, replacing any earlier choice
    pub fn set_payment(&mut self, method: PaymentMethod) {
        self.payment = Some(method);
    }

    pub fn payment(&self) -> Option<&PaymentMethod> {
        self.payment.as_ref()
    }

    /// Settle the order total with the assigned payment method
    ///
    /// State errors when no method is assigned or the order is empty.
    /// Delegates to the method's `pay` and returns its boolean unchanged;
    /// the order status is untouched either way.
    pub fn process_payment(&self) -> AppResult<bool> {
        let payment = self.payment.as_ref().ok_or(DomainError::NoPaymentMethod)?;
        if self.items.is_empty() {
            return Err(DomainError::EmptyOrder);
        }

        let total = self.total();
        let paid = payment.pay(total)?;
        tracing::info!(
            order_id = self.id,
            method = payment.name(),
            total = %total,
            paid,
            "Payment processed"
        );
        Ok(paid)
    }

    /// Attach an observer; a second observer with the same id is ignored
    pub fn attach_observer(&mut self, observer: impl OrderObserver + 'static) {
        if self
            .observers
            .iter()
            .any(|existing| existing.observer_id() == observer.observer_id())
        {
            tracing::debug!(
                order_id = self.id,
                observer = observer.observer_id(),
                "Observer already attached, ignoring"
            );
            return;
        }
        self.observers.push(Box::new(observer));
    }

    /// Detach by id; a no-op when no such observer is attached
    pub fn detach_observer(&mut self, observer_id: &str) {
        self.observers
            .retain(|observer| observer.observer_id() != observer_id);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Assign a new status and notify every observer, in attachment order
    ///
    /// The assignment sticks even if a notification fails; the failing
    /// observer aborts the remainder of the round and its error is returned
    /// wrapped with the observer's id.
    pub fn set_status(&mut self, status: OrderStatus) -> AppResult<()> {
        self.status = status;
        tracing::info!(order_id = self.id, status = %status, "Order status changed");

        for observer in &self.observers {
            observer
                .update(self)
                .map_err(|source| DomainError::ObserverNotification {
                    observer: observer.observer_id().to_string(),
                    source: Box::new(source),
                })?;
        }
        Ok(())
    }

    /// Point-in-time summary for presentation layers
    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            order_id: self.id,
            customer: self.customer.clone(),
            status: self.status,
            items: self
                .items
                .iter()
                .map(|item| ReceiptLine {
                    description: item.description(),
                    price: item.price(),
                })
                .collect(),
            total: self.total(),
        }
    }
}
