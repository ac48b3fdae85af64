//! Entity trait: identity that survives state changes.

/// Entity marker + minimal interface.
///
/// A product record keeps its id while its stock changes; that is what makes
/// it an entity rather than a value.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
