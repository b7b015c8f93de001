//! # Feature Container
//!
//! A thread-safe dependency container that lazily materializes two kinds of
//! entries, simple typed values ("properties") and self-loading services
//! ("features"), and notifies observers on every transition.
//!
//! Entries are keyed by the *kind* type, so any number of values of the same
//! underlying type coexist under distinct kinds. Everything is materialized on
//! first read: properties from a static default, features by a `load` function
//! that receives the container and may pull further properties and features
//! from it.
//!
//! ## Quick Start
//!
//! ```rust
//! use feature_container::{feature, property, Container};
//!
//! property!(Name: String = "world".to_string());
//!
//! #[derive(Clone)]
//! struct Greeter {
//!     greeting: String,
//! }
//!
//! feature!(Greeting: Greeter = |container: &Container| Greeter {
//!     greeting: format!("hi {}", container.get::<Name>()),
//! });
//!
//! let container = Container::new();
//! assert_eq!(container.feature::<Greeting>().greeting, "hi world");
//!
//! container.set::<Name>("you".to_string());
//! container.reset_feature::<Greeting>();
//! assert_eq!(container.feature::<Greeting>().greeting, "hi you");
//! ```
//!
//! ## Features
//!
//! - **Thread-safe**: every operation is linearizable; one reentrant lock
//!   serializes reads, writes and notifications, and lazy `load` functions may
//!   re-enter the container on the same thread.
//! - **Type-safe**: values are stored type-erased but only the owning kind's
//!   accessors ever touch a slot, so decoding cannot miss.
//! - **Observable**: [`Container::observe`] delivers every transition of a
//!   kind until the returned [`Subscription`] is cancelled.
//! - **Traceable**: an optional per-container callback receives a
//!   [`ContainerEvent`] for every operation.
//!
//! ## Main API
//!
//! - [`Container`]: lazy `get`/`set`/`reset` for properties, `feature`/
//!   `set_feature`/`reset_feature` for features, `observe`/`observe_feature`
//!   for notifications; [`Container::shared`] is the process-wide default
//!   instance.
//! - [`Property`] / [`Feature`]: the two extension contracts, declared by
//!   hand or through [`property!`] and [`feature!`].
//! - [`common`]: stock collaborators (clock, randomness, file access,
//!   key-value adapter) built solely on the public contracts.

mod container;
mod container_event;
mod feature;
mod macros;
mod property;
mod subscription;
mod type_key;

pub mod common;

pub use container::Container;
pub use container_event::{ContainerEvent, TraceCallback};
pub use feature::Feature;
pub use property::Property;
pub use subscription::Subscription;
pub use type_key::TypeKey;
