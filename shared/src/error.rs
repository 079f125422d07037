//! Domain error types
//!
//! All failures in the core are local, synchronous and typed. Nothing is
//! retried and nothing is logged-and-swallowed: an operation either succeeds
//! or returns one of the variants below at the point of violation.
//!
//! The one non-exceptional failure path is cash with insufficient funds,
//! which is a business outcome (`Ok(false)` from `PaymentMethod::pay`), not
//! an error.

use rust_decimal::Decimal;
use thiserror::Error;

/// Broad classification of a domain error
///
/// Capability mismatches (a non-item into an order, a non-status into a
/// status write) are unrepresentable here: the type system rejects them at
/// compile time, so no `TypeValidation` kind survives at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty or malformed input
    InvalidArgument,
    /// Operation attempted on an order missing a precondition
    State,
    /// An observer failed while a status change was fanning out
    Notification,
}

/// Domain errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    #[error("customer name must not be empty")]
    EmptyCustomerName,

    #[error("beverage kind must not be empty")]
    EmptyBeverageKind,

    #[error("unknown beverage kind: '{key}'. Known kinds: {known}")]
    UnknownBeverageKind { key: String, known: String },

    #[error("payment amount must be positive, got {amount}")]
    InvalidAmount { amount: Decimal },

    #[error("card number must have at least 4 digits")]
    CardNumberTooShort,

    #[error("transfer key must not be empty")]
    EmptyTransferKey,

    #[error("tendered amount must be positive, got {tendered}")]
    InvalidTendered { tendered: Decimal },

    #[error("observer name must not be empty")]
    EmptyObserverName,

    #[error("no payment method assigned")]
    NoPaymentMethod,

    #[error("order has no items; add items before paying")]
    EmptyOrder,

    #[error("observer '{observer}' failed during notification")]
    ObserverNotification {
        observer: String,
        #[source]
        source: Box<DomainError>,
    },
}

impl DomainError {
    /// Classify the error for callers that branch on failure category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyCustomerName
            | Self::EmptyBeverageKind
            | Self::UnknownBeverageKind { .. }
            | Self::InvalidAmount { .. }
            | Self::CardNumberTooShort
            | Self::EmptyTransferKey
            | Self::InvalidTendered { .. }
            | Self::EmptyObserverName => ErrorKind::InvalidArgument,
            Self::NoPaymentMethod | Self::EmptyOrder => ErrorKind::State,
            Self::ObserverNotification { .. } => ErrorKind::Notification,
        }
    }
}

/// Type alias for Result with DomainError
pub type AppResult<T> = Result<T, DomainError>;
