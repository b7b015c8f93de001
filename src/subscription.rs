//! Cancellation tokens for observer registrations.

use std::sync::Weak;

use uuid::Uuid;

use crate::container::Inner;
use crate::type_key::TypeKey;

/// Handle to one observer registration, returned by
/// [`observe`](crate::Container::observe) and
/// [`observe_feature`](crate::Container::observe_feature).
///
/// [`cancel`](Subscription::cancel) removes exactly that registration. It is
/// idempotent, and it is safe to call after the container itself has been
/// dropped; the token holds only a non-owning back-reference.
///
/// Dropping a `Subscription` does *not* cancel it; an uncancelled observer
/// stays registered for the lifetime of its container.
#[derive(Debug)]
pub struct Subscription {
    inner: Weak<Inner>,
    key: TypeKey,
    id: Uuid,
}

impl Subscription {
    pub(crate) fn new(inner: Weak<Inner>, key: TypeKey, id: Uuid) -> Self {
        Self { inner, key, id }
    }

    /// Removes the observer this token was issued for.
    ///
    /// No-op when already cancelled or when the container is gone.
    pub fn cancel(&self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let state = inner.state.lock();
        let mut state = state.borrow_mut();
        if let Some(observers) = state.observers.get_mut(&self.key) {
            observers.remove(&self.id);
            if observers.is_empty() {
                state.observers.remove(&self.key);
            }
        }
    }
}
