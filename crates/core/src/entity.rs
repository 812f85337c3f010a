//! Entity trait: things identified by id rather than by value.

/// A domain object with a stable identity.
///
/// Two orders with the same product and price are still different orders;
/// stores look entities up and de-duplicate them by [`Entity::id`].
pub trait Entity {
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> Self::Id;
}
