//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same id are the same actor, even when their other
/// attributes differ (e.g. a renamed principal).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison (ignores non-identity attributes).
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
