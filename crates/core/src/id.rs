//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of an order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

/// Identifier of a customer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(Uuid);

/// Identifier of an inbound request (goods entering the warehouse).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InboundId(Uuid);

/// Identifier of an outbound request (goods leaving the warehouse).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutboundId(Uuid);

macro_rules! impl_uuid_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a new identifier from an injected source.
            ///
            /// Prefer drawing IDs from an [`IdSource`] so generation stays
            /// deterministic in tests.
            pub fn new(id: Uuid) -> Self {
                Self(id)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = Uuid::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(uuid))
            }
        }
    };
}

impl_uuid_newtype!(OrderId, "OrderId");
impl_uuid_newtype!(CustomerId, "CustomerId");
impl_uuid_newtype!(InboundId, "InboundId");
impl_uuid_newtype!(OutboundId, "OutboundId");

/// Business key of a product (e.g. `"P001"`).
///
/// Products are keyed by an externally assigned code, not a generated id, so
/// this is a value object rather than a uuid newtype.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::invalid_id("ProductCode: empty"));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Identifier generation capability.
///
/// Injected into services so id generation can be swapped for a deterministic
/// source in tests.
pub trait IdSource: Send + Sync {
    fn next(&self) -> Uuid;
}

/// Production source: UUIDv7 (time-ordered).
#[derive(Debug, Default, Copy, Clone)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next(&self) -> Uuid {
        Uuid::now_v7()
    }
}

/// Deterministic source: monotonic counter widened into a uuid.
#[derive(Debug, Default)]
pub struct SequenceSource(AtomicU64);

impl SequenceSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequenceSource {
    fn next(&self) -> Uuid {
        let n = self.0.fetch_add(1, Ordering::Relaxed) + 1;
        Uuid::from_u128(n as u128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_code_rejects_empty() {
        assert!(ProductCode::new("").is_err());
        assert!(ProductCode::new("   ").is_err());
        assert_eq!(ProductCode::new("P001").unwrap().as_str(), "P001");
    }

    #[test]
    fn sequence_source_is_monotonic() {
        let ids = SequenceSource::new();
        let a = ids.next();
        let b = ids.next();
        assert_ne!(a, b);
        assert!(a.as_u128() < b.as_u128());
    }

    #[test]
    fn order_id_parses_round_trip() {
        let id = OrderId::new(Uuid::now_v7());
        let parsed: OrderId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn order_id_rejects_garbage() {
        let err = "not-a-uuid".parse::<OrderId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }
}
