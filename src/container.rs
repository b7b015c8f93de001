//! The central lock-guarded store for properties and features.
//!
//! A [`Container`] lazily materializes entries on first read: properties from
//! their static default, features by running their `load` function with the
//! container itself, so a feature may pull its own dependencies through the
//! same path. Reads, writes, resets and observer management are all serialized
//! by one reentrant lock, so every operation is linearizable and lazy
//! construction may re-enter the container on the same thread.

use std::any::Any;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, LazyLock};

use parking_lot::{Mutex, ReentrantMutex};
use uuid::Uuid;

use crate::container_event::{ContainerEvent, TraceCallback};
use crate::feature::Feature;
use crate::property::Property;
use crate::subscription::Subscription;
use crate::type_key::TypeKey;

/// Type-erased stored value: a property's current value or a feature's
/// instance. Only the owning kind's accessors ever write a given slot.
type Entry = Box<dyn Any + Send + Sync>;

/// Type-erased observer callback. The registering accessor wraps the typed
/// callback so the downcast can never miss in practice.
type ObserverFn = Arc<dyn Fn(&dyn Any) + Send + Sync>;

#[derive(Default)]
pub(crate) struct State {
    entries: HashMap<TypeKey, Entry>,
    pub(crate) observers: HashMap<TypeKey, HashMap<Uuid, ObserverFn>>,
    /// Feature kinds currently inside their own `load`, used to turn a
    /// same-thread self-load into a panic instead of unbounded recursion.
    loading: HashSet<TypeKey>,
}

pub(crate) struct Inner {
    /// One critical section guards both stores. The lock is reentrant because
    /// lazy construction happens inside it and may call back into the
    /// container; the `RefCell` borrows are scoped so no borrow is ever live
    /// across user code.
    pub(crate) state: ReentrantMutex<RefCell<State>>,
    trace: Mutex<Option<Arc<TraceCallback>>>,
}

static SHARED: LazyLock<Container> = LazyLock::new(Container::new);

/// The central store providing lazy `get`/`set`/`reset`/`observe` over
/// [`Property`] and [`Feature`] kinds.
///
/// `Container` is a cheap handle: cloning it yields another handle to the same
/// store. Independent containers share nothing.
///
/// # Examples
///
/// ```rust
/// use feature_container::{property, Container};
///
/// property!(Count: u64 = 0);
///
/// let container = Container::new();
/// assert_eq!(container.get::<Count>(), 0);
/// container.set::<Count>(5);
/// assert_eq!(container.get::<Count>(), 5);
/// container.reset::<Count>();
/// assert_eq!(container.get::<Count>(), 0);
/// ```
#[derive(Clone)]
pub struct Container {
    inner: Arc<Inner>,
}

impl Container {
    /// Creates an empty container with no entries and no observers.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                state: ReentrantMutex::new(RefCell::new(State::default())),
                trace: Mutex::new(None),
            }),
        }
    }

    /// The process-wide default container.
    ///
    /// Created on first use and never torn down. This is a convenience for an
    /// application's composition root; nothing in the crate reaches into it
    /// implicitly, and code that takes a `&Container` works identically with
    /// the shared instance or an isolated one.
    pub fn shared() -> &'static Container {
        &SHARED
    }

    // ---------------------------------------------------------------------
    // Property access
    // ---------------------------------------------------------------------

    /// Reads the current value of property `P`, materializing the default on
    /// first access.
    ///
    /// A materializing read stores `P::default_value()` and synchronously
    /// notifies every observer of `P` before returning. Racing first reads
    /// serialize on the container lock, so exactly one default materializes
    /// and every caller sees it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use feature_container::{property, Container};
    ///
    /// property!(Greeting: &'static str = "hello");
    ///
    /// let container = Container::new();
    /// assert_eq!(container.get::<Greeting>(), "hello");
    /// ```
    pub fn get<P: Property>(&self) -> P::Value {
        let key = TypeKey::of::<P>();
        let state = self.inner.state.lock();
        if let Some(value) = decode_entry::<P::Value>(&state, key) {
            self.emit(ContainerEvent::Get {
                type_name: key.type_name(),
                materialized: false,
            });
            return value;
        }
        let value = P::default_value();
        state
            .borrow_mut()
            .entries
            .insert(key, Box::new(value.clone()));
        log::trace!("[container] materialized property {}", key.type_name());
        self.emit(ContainerEvent::Get {
            type_name: key.type_name(),
            materialized: true,
        });
        notify(&state, key, &value);
        value
    }

    /// Overwrites the value of property `P` unconditionally.
    ///
    /// Observers of `P` are notified synchronously, even when the new value
    /// equals the old one; the container performs no comparison.
    pub fn set<P: Property>(&self, value: P::Value) {
        let key = TypeKey::of::<P>();
        let state = self.inner.state.lock();
        state
            .borrow_mut()
            .entries
            .insert(key, Box::new(value.clone()));
        log::trace!("[container] set property {}", key.type_name());
        self.emit(ContainerEvent::Set {
            type_name: key.type_name(),
        });
        notify(&state, key, &value);
    }

    /// Restores property `P` to a freshly evaluated default and notifies its
    /// observers.
    ///
    /// With a generative default (e.g. the [`Uuid`] property impl) the stored
    /// value is a *new* default, not necessarily equal to any prior one.
    pub fn reset<P: Property>(&self) {
        let key = TypeKey::of::<P>();
        let state = self.inner.state.lock();
        let value = P::default_value();
        state
            .borrow_mut()
            .entries
            .insert(key, Box::new(value.clone()));
        log::debug!("[container] reset property {}", key.type_name());
        self.emit(ContainerEvent::Reset {
            type_name: key.type_name(),
        });
        notify(&state, key, &value);
    }

    // ---------------------------------------------------------------------
    // Feature access
    // ---------------------------------------------------------------------

    /// Returns the instance of feature `F`, constructing it via
    /// [`F::load`](Feature::load) on first access.
    ///
    /// `load` runs inside the container's critical section and receives the
    /// container itself, so it may read other properties and features through
    /// the same path; the lock tolerates same-thread re-entry. A `load` that
    /// requests its own kind panics (see [`Feature`]).
    ///
    /// The freshly loaded instance is stored and delivered to every observer
    /// of `F` before this call returns.
    pub fn feature<F: Feature>(&self) -> F::Instance {
        let key = TypeKey::of::<F>();
        let state = self.inner.state.lock();
        if let Some(instance) = decode_entry::<F::Instance>(&state, key) {
            self.emit(ContainerEvent::Get {
                type_name: key.type_name(),
                materialized: false,
            });
            return instance;
        }
        if !state.borrow_mut().loading.insert(key) {
            panic!(
                "feature `{}` requested itself during its own load",
                key.type_name()
            );
        }
        let guard = LoadGuard {
            state: &state,
            key,
        };
        let instance = F::load(self);
        drop(guard);
        state
            .borrow_mut()
            .entries
            .insert(key, Box::new(instance.clone()));
        log::debug!("[container] loaded feature {}", key.type_name());
        self.emit(ContainerEvent::Get {
            type_name: key.type_name(),
            materialized: true,
        });
        notify(&state, key, &instance);
        instance
    }

    /// Overwrites the instance of feature `F` unconditionally and notifies its
    /// observers.
    ///
    /// The usual way to install a test double:
    ///
    /// ```rust
    /// use feature_container::common::Clock;
    /// use feature_container::Container;
    /// use std::time::Duration;
    ///
    /// let container = Container::new();
    /// container.set_feature::<Clock>(Clock::fixed(Duration::from_secs(7)));
    /// assert_eq!(container.feature::<Clock>().now(), Duration::from_secs(7));
    /// ```
    pub fn set_feature<F: Feature>(&self, instance: F::Instance) {
        let key = TypeKey::of::<F>();
        let state = self.inner.state.lock();
        state
            .borrow_mut()
            .entries
            .insert(key, Box::new(instance.clone()));
        log::trace!("[container] set feature {}", key.type_name());
        self.emit(ContainerEvent::Set {
            type_name: key.type_name(),
        });
        notify(&state, key, &instance);
    }

    /// Removes the stored instance of feature `F`; the next
    /// [`feature`](Container::feature) call rebuilds it lazily.
    ///
    /// Unlike property [`reset`](Container::reset), this does *not* notify
    /// observers at reset time; they hear about the replacement instance on
    /// the next lazy load or explicit [`set_feature`](Container::set_feature).
    /// The asymmetry is kept for compatibility with the container's original
    /// contract; see DESIGN.md before relying on it.
    pub fn reset_feature<F: Feature>(&self) {
        let key = TypeKey::of::<F>();
        let state = self.inner.state.lock();
        state.borrow_mut().entries.remove(&key);
        log::debug!("[container] evicted feature {}", key.type_name());
        self.emit(ContainerEvent::Evict {
            type_name: key.type_name(),
        });
    }

    // ---------------------------------------------------------------------
    // Observation
    // ---------------------------------------------------------------------

    /// Registers `observer` for every transition of property `P` and returns
    /// its cancellation token.
    ///
    /// Registering has no effect on the stored value; in particular it does
    /// not materialize the default. The first delivery is the next transition:
    /// an explicit `set`, a `reset`, or the first lazy materialization
    /// triggered by any caller's `get`.
    ///
    /// Observers run synchronously inside the triggering operation's critical
    /// section. An observer may call back into the container on its own
    /// thread, but it must not wait on another thread that needs this
    /// container, and it must not block indefinitely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use feature_container::{property, Container};
    /// use std::sync::atomic::{AtomicU64, Ordering};
    /// use std::sync::Arc;
    ///
    /// property!(Count: u64 = 0);
    ///
    /// let container = Container::new();
    /// let seen = Arc::new(AtomicU64::new(u64::MAX));
    /// let sink = seen.clone();
    /// let subscription = container.observe::<Count>(move |value| {
    ///     sink.store(*value, Ordering::SeqCst);
    /// });
    ///
    /// container.set::<Count>(5);
    /// assert_eq!(seen.load(Ordering::SeqCst), 5);
    ///
    /// subscription.cancel();
    /// container.set::<Count>(9);
    /// assert_eq!(seen.load(Ordering::SeqCst), 5);
    /// ```
    pub fn observe<P: Property>(
        &self,
        observer: impl Fn(&P::Value) + Send + Sync + 'static,
    ) -> Subscription {
        self.observe_erased(
            TypeKey::of::<P>(),
            Arc::new(move |value: &dyn Any| {
                if let Some(value) = value.downcast_ref::<P::Value>() {
                    observer(value);
                }
            }),
        )
    }

    /// Registers `observer` for every transition of feature `F`.
    ///
    /// Same contract as [`observe`](Container::observe). Note that feature
    /// [`reset_feature`](Container::reset_feature) does not notify; the next
    /// materialization or `set_feature` does.
    pub fn observe_feature<F: Feature>(
        &self,
        observer: impl Fn(&F::Instance) + Send + Sync + 'static,
    ) -> Subscription {
        self.observe_erased(
            TypeKey::of::<F>(),
            Arc::new(move |instance: &dyn Any| {
                if let Some(instance) = instance.downcast_ref::<F::Instance>() {
                    observer(instance);
                }
            }),
        )
    }

    fn observe_erased(&self, key: TypeKey, observer: ObserverFn) -> Subscription {
        let id = Uuid::new_v4();
        let state = self.inner.state.lock();
        state
            .borrow_mut()
            .observers
            .entry(key)
            .or_default()
            .insert(id, observer);
        Subscription::new(Arc::downgrade(&self.inner), key, id)
    }

    // ---------------------------------------------------------------------
    // Tracing
    // ---------------------------------------------------------------------

    /// Installs a tracing callback invoked on every container operation.
    ///
    /// The callback slot is per-container; replacing it is atomic. The
    /// callback runs synchronously inside operations (though not under the
    /// callback slot's own lock), so it must be fast and must not block.
    ///
    /// ```rust
    /// use feature_container::Container;
    ///
    /// let container = Container::new();
    /// container.set_trace_callback(|event| log::trace!("[container] {event}"));
    /// ```
    pub fn set_trace_callback(&self, callback: impl Fn(&ContainerEvent) + Send + Sync + 'static) {
        *self.inner.trace.lock() = Some(Arc::new(callback));
    }

    /// Removes the tracing callback; no further events are emitted.
    pub fn clear_trace_callback(&self) {
        *self.inner.trace.lock() = None;
    }

    fn emit(&self, event: ContainerEvent) {
        let callback = self.inner.trace.lock().clone();
        if let Some(callback) = callback {
            callback(&event);
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        let state = state.borrow();
        f.debug_struct("Container")
            .field("entries", &state.entries.len())
            .field(
                "observers",
                &state.observers.values().map(HashMap::len).sum::<usize>(),
            )
            .finish()
    }
}

/// Decodes and clones the entry for `key`, if present.
///
/// A present entry that fails to decode means some accessor wrote a slot it
/// does not own. That is a broken invariant, reported as a panic rather than
/// an error.
fn decode_entry<T: Clone + 'static>(state: &RefCell<State>, key: TypeKey) -> Option<T> {
    let state = state.borrow();
    let entry = state.entries.get(&key)?;
    match entry.downcast_ref::<T>() {
        Some(value) => Some(value.clone()),
        None => panic!(
            "entry for `{}` does not decode as `{}`",
            key.type_name(),
            std::any::type_name::<T>()
        ),
    }
}

/// Delivers `value` to the current observers of `key`, in unspecified order.
///
/// The observer set is snapshotted first so callbacks may register or cancel
/// observers on this kind without invalidating the iteration.
fn notify(state: &RefCell<State>, key: TypeKey, value: &dyn Any) {
    let observers: Vec<ObserverFn> = {
        let state = state.borrow();
        match state.observers.get(&key) {
            Some(map) => map.values().cloned().collect(),
            None => Vec::new(),
        }
    };
    for observer in &observers {
        observer(value);
    }
}

/// Clears the construction-in-progress marker even when `load` unwinds.
struct LoadGuard<'a> {
    state: &'a RefCell<State>,
    key: TypeKey,
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        self.state.borrow_mut().loading.remove(&self.key);
    }
}
