//! The property contract: a simple typed value with a statically known default.

use uuid::Uuid;

/// A kind of simple value storable in a [`Container`](crate::Container).
///
/// Implementors are *kinds*, not values: the implementing type is only ever
/// used as a map key and is typically an uninhabited enum. The associated
/// [`Value`](Property::Value) is what the container actually stores and hands
/// out.
///
/// `default_value` should be pure per kind so that
/// [`reset`](crate::Container::reset) is meaningful. Generative defaults (a
/// fresh value on every evaluation, like the [`Uuid`] impl below) are allowed;
/// callers must then accept that reset produces a *new* default rather than the
/// original one.
///
/// # Examples
///
/// ```rust
/// use feature_container::{Container, Property};
///
/// enum RetryLimit {}
///
/// impl Property for RetryLimit {
///     type Value = u32;
///     fn default_value() -> u32 {
///         3
///     }
/// }
///
/// let container = Container::new();
/// assert_eq!(container.get::<RetryLimit>(), 3);
/// ```
///
/// The [`property!`](crate::property!) macro expands to exactly this shape.
pub trait Property: 'static {
    /// The stored value type.
    type Value: Clone + Send + Sync + 'static;

    /// The value materialized on first read and restored by reset.
    fn default_value() -> Self::Value;
}

/// [`Uuid`] doubles as a property kind with a *generative* default: every
/// evaluation yields a fresh v4 id.
///
/// Useful as a per-container installation id. Note that
/// [`reset`](crate::Container::reset) therefore stores a *new* id, not the one
/// first materialized.
///
/// ```rust
/// use feature_container::Container;
/// use uuid::Uuid;
///
/// let container = Container::new();
/// let id = container.get::<Uuid>();
/// // The id is sticky until reset.
/// assert_eq!(container.get::<Uuid>(), id);
/// container.reset::<Uuid>();
/// assert_ne!(container.get::<Uuid>(), id);
/// ```
impl Property for Uuid {
    type Value = Uuid;

    fn default_value() -> Uuid {
        Uuid::new_v4()
    }
}
