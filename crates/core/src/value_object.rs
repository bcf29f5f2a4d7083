//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two instances
/// with the same attribute values are equal. To "modify" one, construct a new
/// instance with the new values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
