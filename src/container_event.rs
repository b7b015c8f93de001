//! Events emitted by the container during operations.
//!
//! These events are passed to the tracing callback set via
//! [`set_trace_callback`](crate::Container::set_trace_callback). They describe
//! store transitions, not observer activity: per-kind change notifications are
//! a separate mechanism ([`observe`](crate::Container::observe)).

use std::fmt;

/// A single container operation, as seen by the tracing callback.
///
/// # Examples
///
/// ```rust
/// use feature_container::ContainerEvent;
///
/// let event = ContainerEvent::Set { type_name: "app::Count" };
/// assert_eq!(event.to_string(), "set { type_name: app::Count }");
/// ```
#[derive(Debug, Clone)]
pub enum ContainerEvent {
    /// A property or feature was read. `materialized` is true when this read
    /// created the entry (lazy default or load), false on a plain cache hit.
    Get {
        /// Name of the kind that was read.
        type_name: &'static str,
        /// Whether this read materialized the entry.
        materialized: bool,
    },

    /// A property value or feature instance was written.
    Set {
        /// Name of the kind that was written.
        type_name: &'static str,
    },

    /// A property was reset to a freshly evaluated default.
    Reset {
        /// Name of the kind that was reset.
        type_name: &'static str,
    },

    /// A feature entry was removed by reset; the next read rebuilds it.
    Evict {
        /// Name of the kind that was evicted.
        type_name: &'static str,
    },
}

/// Type alias for the user-supplied tracing callback.
///
/// The callback runs synchronously inside container operations and must be
/// thread-safe; it must not block indefinitely.
pub type TraceCallback = dyn Fn(&ContainerEvent) + Send + Sync + 'static;

impl fmt::Display for ContainerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerEvent::Get {
                type_name,
                materialized,
            } => {
                write!(
                    f,
                    "get {{ type_name: {type_name}, materialized: {materialized} }}"
                )
            }
            ContainerEvent::Set { type_name } => write!(f, "set {{ type_name: {type_name} }}"),
            ContainerEvent::Reset { type_name } => write!(f, "reset {{ type_name: {type_name} }}"),
            ContainerEvent::Evict { type_name } => write!(f, "evict {{ type_name: {type_name} }}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_get() {
        let event = ContainerEvent::Get {
            type_name: "Count",
            materialized: true,
        };
        assert_eq!(
            event.to_string(),
            "get { type_name: Count, materialized: true }"
        );
    }

    #[test]
    fn display_set() {
        let event = ContainerEvent::Set { type_name: "Count" };
        assert_eq!(event.to_string(), "set { type_name: Count }");
    }

    #[test]
    fn display_reset() {
        let event = ContainerEvent::Reset { type_name: "Count" };
        assert_eq!(event.to_string(), "reset { type_name: Count }");
    }

    #[test]
    fn display_evict() {
        let event = ContainerEvent::Evict { type_name: "Clock" };
        assert_eq!(event.to_string(), "evict { type_name: Clock }");
    }

    #[test]
    fn event_clone() {
        let event = ContainerEvent::Set { type_name: "Count" };
        let cloned = event.clone();
        assert_eq!(format!("{:?}", event), format!("{:?}", cloned));
    }
}
