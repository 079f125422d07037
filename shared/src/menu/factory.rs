//! Keyed beverage construction

use super::beverage::Beverage;
use crate::error::{AppResult, DomainError};

/// Registry of known kinds, fixed after initialization
///
/// Read-only, so safe to share across orders without locking.
const REGISTRY: &[(&str, Beverage)] = &[
    ("espresso", Beverage::Espresso),
    ("cappuccino", Beverage::Cappuccino),
    ("latte", Beverage::Latte),
];

/// Constructs stock beverages from a string kind
pub struct BeverageFactory;

impl BeverageFactory {
    /// Create a fresh beverage for the given kind
    ///
    /// The kind is matched case-insensitively after trimming whitespace.
    /// An empty kind or one not present in the registry fails with an
    /// invalid-argument error; the unknown-kind message enumerates the
    /// registered kinds.
    pub fn create(kind: &str) -> AppResult<Beverage> {
        let normalized = kind.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::EmptyBeverageKind);
        }

        let beverage = REGISTRY
            .iter()
            .find(|(key, _)| *key == normalized)
            .map(|(_, beverage)| *beverage)
            .ok_or_else(|| DomainError::UnknownBeverageKind {
                key: kind.to_string(),
                known: Self::known_kinds().join(", "),
            })?;

        tracing::info!(beverage = beverage.label(), "Preparing beverage");
        Ok(beverage)
    }

    /// Kinds currently accepted by [`Self::create`]
    pub fn known_kinds() -> Vec<&'static str> {
        REGISTRY.iter().map(|(key, _)| *key).collect()
    }
}
