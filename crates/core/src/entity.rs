//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Run every invariant check against the current state.
    ///
    /// Entities re-run this after each mutation rather than checking fields
    /// incrementally, so partial and full validation cannot drift apart.
    fn validate(&self) -> Result<(), crate::error::ValidationError>;
}
