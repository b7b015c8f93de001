//! Opaque identity of a property or feature kind.
//!
//! The container stores every entry under the [`TypeKey`] of its *kind* type
//! (the type implementing [`Property`](crate::Property) or
//! [`Feature`](crate::Feature)), never under the key of the value it stores.
//! Two keys are equal exactly when they were derived from the same kind.

use std::any::TypeId;

/// Stable, comparable identity of a kind, derived from its static type.
///
/// Keys are only meaningful within the current process; they are never
/// serialized or compared across process boundaries. The retained type name is
/// used solely for log and trace output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Derives the key of the kind `K`.
    pub fn of<K: 'static>() -> Self {
        Self {
            id: TypeId::of::<K>(),
            name: std::any::type_name::<K>(),
        }
    }

    /// Human-readable name of the kind, for diagnostics only.
    pub fn type_name(&self) -> &'static str {
        self.name
    }
}
