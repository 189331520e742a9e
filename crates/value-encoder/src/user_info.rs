//! Caller-supplied context for a root encode pass.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

/// A typemap handed to the root encoder of a pass.
///
/// Values are looked up by type, so independent callers cannot collide on a
/// key. Only the root [`crate::ValueEncoder`] sees the map; fresh encoders
/// created for nested values start without one.
#[derive(Default)]
pub struct UserInfo {
    entries: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl UserInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previously stored one of the same type.
    pub fn insert<T: Any + Send + Sync>(&mut self, value: T) -> Option<T> {
        self.entries
            .insert(TypeId::of::<T>(), Box::new(value))
            .and_then(|prev| prev.downcast().ok())
            .map(|boxed| *boxed)
    }

    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserInfo")
            .field("entries", &self.entries.len())
            .finish()
    }
}
