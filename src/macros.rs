//! Macros for declaring property and feature kinds.
//!
//! Kinds are plain uninhabited types implementing [`Property`](crate::Property)
//! or [`Feature`](crate::Feature); these macros only remove the boilerplate of
//! writing those impls by hand. Nothing in the container requires them.

/// Declares a property kind: an uninhabited type plus its
/// [`Property`](crate::Property) impl.
///
/// The default is an arbitrary expression, re-evaluated on every
/// materialization and reset, so it may be generative.
///
/// # Examples
///
/// ```rust
/// use feature_container::{property, Container};
///
/// property!(
///     /// How many times a failed request is retried.
///     pub RetryLimit: u32 = 3
/// );
/// property!(Verbose: bool = false);
///
/// let container = Container::new();
/// assert_eq!(container.get::<RetryLimit>(), 3);
/// assert!(!container.get::<Verbose>());
/// ```
#[macro_export]
macro_rules! property {
    ($(#[$meta:meta])* $vis:vis $name:ident : $value:ty = $default:expr) => {
        $(#[$meta])*
        $vis enum $name {}

        impl $crate::Property for $name {
            type Value = $value;

            fn default_value() -> Self::Value {
                $default
            }
        }
    };
}

/// Declares a feature kind: an uninhabited type plus its
/// [`Feature`](crate::Feature) impl built from a load expression.
///
/// The load expression is anything callable with a `&Container`, typically a
/// closure or a path to a constructor-like function.
///
/// # Examples
///
/// ```rust
/// use feature_container::{feature, property, Container};
///
/// property!(BaseUrl: String = "https://example.invalid".to_string());
///
/// #[derive(Clone)]
/// pub struct ApiClient {
///     pub base_url: String,
/// }
///
/// feature!(
///     /// The HTTP client wired from configuration properties.
///     pub Api: ApiClient = |container: &Container| ApiClient {
///         base_url: container.get::<BaseUrl>(),
///     }
/// );
///
/// let container = Container::new();
/// assert_eq!(
///     container.feature::<Api>().base_url,
///     "https://example.invalid"
/// );
/// ```
#[macro_export]
macro_rules! feature {
    ($(#[$meta:meta])* $vis:vis $name:ident : $instance:ty = $load:expr) => {
        $(#[$meta])*
        $vis enum $name {}

        impl $crate::Feature for $name {
            type Instance = $instance;

            fn load(container: &$crate::Container) -> Self::Instance {
                ($load)(container)
            }
        }
    };
}
