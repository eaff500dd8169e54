//! Entity trait: records with a stable identity across lookups.

/// Entity marker + minimal interface.
///
/// Implemented by catalogue records that a store looks up by key (a product is the
/// same product whatever name the store currently returns for it).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
