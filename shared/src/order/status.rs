//! Order lifecycle states

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status
///
/// The enumeration is the whole contract: a status write can only ever carry
/// one of these values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Received,
    Preparing,
    Ready,
    Delivered,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Received => write!(f, "Received"),
            Self::Preparing => write!(f, "Preparing"),
            Self::Ready => write!(f, "Ready"),
            Self::Delivered => write!(f, "Delivered"),
        }
    }
}
