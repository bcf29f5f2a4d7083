//! Entity trait: stable identity across state changes.

/// Marker + minimal interface for domain entities.
///
/// An entity keeps the same identifier through every snapshot of its state;
/// two snapshots with the same id describe the same thing at different times.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
