//! Insertion-ordered object lookup for one kind
//!
//! `ObjectLookup<T>` owns every registered object of one kind, keyed by id.
//! Iteration order is insertion order and stays stable across deletes, so
//! ordinal-based queries from the catalog dispatcher are reproducible.
//!
//! `Lookup<T>` is the shared handle: a cheap-clone wrapper that lets typed
//! callers and the type-erased catalog observe the same backing map.

use gamedata_core::error::{Error, Result};
use gamedata_core::object::GameObject;
use indexmap::IndexMap;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;
use tracing::debug;

/// Name reported for an id with no registered object
///
/// Callers display names for possibly-stale ids (a quest referencing a
/// deleted item) without a presence check first.
pub const DELETED_NAME: &str = "Deleted";

/// Id-keyed ownership store for all objects of one kind
///
/// Membership is authoritative: an object absent from the lookup is deleted
/// as far as the rest of the system is concerned, even if some caller still
/// holds a copy of it.
#[derive(Debug)]
pub struct ObjectLookup<T> {
    objects: IndexMap<i32, T>,
}

impl<T: GameObject> ObjectLookup<T> {
    /// Create an empty lookup
    pub fn new() -> Self {
        Self {
            objects: IndexMap::new(),
        }
    }

    /// Number of registered objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if no objects are registered
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Direct lookup by id
    pub fn get(&self, id: i32) -> Option<&T> {
        self.objects.get(&id)
    }

    /// Mutable lookup by id
    pub fn get_mut(&mut self, id: i32) -> Option<&mut T> {
        self.objects.get_mut(&id)
    }

    /// True if an object with this id is registered
    pub fn contains(&self, id: i32) -> bool {
        self.objects.contains_key(&id)
    }

    /// Display name for an id, or [`DELETED_NAME`] if it is not registered
    pub fn get_name(&self, id: i32) -> String {
        self.objects
            .get(&id)
            .map(|obj| obj.name().to_string())
            .unwrap_or_else(|| DELETED_NAME.to_string())
    }

    /// Register an object under its id
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if the id is already present. The
    /// lookup is unchanged in that case; id assignment is the factory's
    /// responsibility, and a collision here means two factories disagreed.
    pub fn register(&mut self, object: T) -> Result<()> {
        let id = object.id();
        if self.objects.contains_key(&id) {
            return Err(Error::DuplicateId { kind: T::KIND, id });
        }
        self.objects.insert(id, object);
        Ok(())
    }

    /// Remove an object by id, returning it if it was registered
    ///
    /// Survivors keep their relative order; ordinals after the removed
    /// object shift down by one. Ids are never recycled by the lookup.
    pub fn delete(&mut self, id: i32) -> Option<T> {
        self.objects.shift_remove(&id)
    }

    /// Remove every object
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Iterate `(id, object)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (i32, &T)> {
        self.objects.iter().map(|(id, obj)| (*id, obj))
    }

    /// Registered ids in insertion order
    pub fn ids(&self) -> Vec<i32> {
        self.objects.keys().copied().collect()
    }

    /// Object names in insertion order
    pub fn names(&self) -> Vec<String> {
        self.objects.values().map(|o| o.name().to_string()).collect()
    }

    /// Id at a zero-based position in the iteration order
    pub fn id_at(&self, ordinal: usize) -> Option<i32> {
        self.objects.get_index(ordinal).map(|(id, _)| *id)
    }

    /// Object name at a zero-based position in the iteration order
    pub fn name_at(&self, ordinal: usize) -> Option<String> {
        self.objects
            .get_index(ordinal)
            .map(|(_, obj)| obj.name().to_string())
    }

    /// Zero-based position of an id in the iteration order
    pub fn ordinal_of(&self, id: i32) -> Option<usize> {
        self.objects.get_index_of(&id)
    }
}

impl<T: GameObject> Default for ObjectLookup<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle over one kind's [`ObjectLookup`]
///
/// Clones are cheap and all observe the same backing map. The handle also
/// satisfies [`crate::KindCatalog`], which is how the lookup directory serves
/// generic queries over it without knowing `T`.
pub struct Lookup<T: GameObject> {
    inner: Arc<RwLock<ObjectLookup<T>>>,
}

impl<T: GameObject> Lookup<T> {
    /// Create a handle over a fresh, empty lookup
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ObjectLookup::new())),
        }
    }

    /// Acquire shared access to the underlying lookup
    pub fn read(&self) -> RwLockReadGuard<'_, ObjectLookup<T>> {
        self.inner.read()
    }

    /// Acquire exclusive access to the underlying lookup
    pub fn write(&self) -> RwLockWriteGuard<'_, ObjectLookup<T>> {
        self.inner.write()
    }

    /// Register an object under its id
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if the id is already present.
    pub fn register(&self, object: T) -> Result<()> {
        let id = object.id();
        self.inner.write().register(object)?;
        debug!(kind = %T::KIND, id, "registered object");
        Ok(())
    }

    /// Remove an object by id, returning it if it was registered
    pub fn delete(&self, id: i32) -> Option<T> {
        let removed = self.inner.write().delete(id);
        if removed.is_some() {
            debug!(kind = %T::KIND, id, "deleted object");
        }
        removed
    }

    /// Remove an object, addressed by the object itself
    ///
    /// All id-based lookups for it subsequently report not-found; the
    /// caller's copy stays usable.
    pub fn delete_object(&self, object: &T) -> Option<T> {
        self.delete(object.id())
    }

    /// Display name for an id, or [`DELETED_NAME`] if it is not registered
    pub fn get_name(&self, id: i32) -> String {
        self.inner.read().get_name(id)
    }

    /// Number of registered objects
    pub fn count(&self) -> usize {
        self.inner.read().len()
    }

    /// True if an object with this id is registered
    pub fn contains(&self, id: i32) -> bool {
        self.inner.read().contains(id)
    }
}

impl<T: GameObject> Clone for Lookup<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: GameObject> Default for Lookup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: GameObject> std::fmt::Debug for Lookup<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lookup")
            .field("kind", &T::KIND)
            .field("count", &self.count())
            .finish()
    }
}
