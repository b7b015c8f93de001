//! The feature contract: a lazily constructed service with container access.

use crate::Container;

/// A kind of lazily built service storable in a [`Container`].
///
/// Like [`Property`](crate::Property) implementors, feature implementors are
/// kinds used as map keys. The difference is construction: instead of a static
/// default, a feature is built by [`load`](Feature::load), which receives the
/// container itself and may read any other property or feature from it. That is
/// plain recursive composition; the container does not understand or validate
/// the resulting dependency graph.
///
/// `load` must not request its own kind, directly or transitively, during its
/// own construction. Same-thread self-loads panic with the kind's name; a
/// cross-thread cycle blocks on the container lock. Either way this is a
/// programming error in the feature, not a recoverable condition.
///
/// Instances are expected to be cheap to clone; service types built from
/// `Arc`-backed state (see the stock collaborators in
/// [`common`](crate::common)) fit naturally.
///
/// # Examples
///
/// ```rust
/// use feature_container::{Container, Feature, Property};
///
/// enum Name {}
/// impl Property for Name {
///     type Value = String;
///     fn default_value() -> String {
///         "world".to_string()
///     }
/// }
///
/// #[derive(Clone)]
/// struct Greeter {
///     greeting: String,
/// }
///
/// impl Feature for Greeter {
///     type Instance = Greeter;
///     fn load(container: &Container) -> Greeter {
///         Greeter {
///             greeting: format!("hi {}", container.get::<Name>()),
///         }
///     }
/// }
///
/// let container = Container::new();
/// assert_eq!(container.feature::<Greeter>().greeting, "hi world");
/// ```
pub trait Feature: 'static {
    /// The constructed service type.
    type Instance: Clone + Send + Sync + 'static;

    /// Builds the instance, pulling dependencies from `container` as needed.
    fn load(container: &Container) -> Self::Instance;
}
