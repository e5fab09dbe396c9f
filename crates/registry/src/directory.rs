//! Lookup directory and catalog dispatcher
//!
//! The directory maps every kind tag to its catalog handle and answers the
//! three generic query shapes (name list, ordinal → id, id → ordinal) for
//! code that holds only a kind tag, such as a property-editor widget
//! rendering a "pick an NPC" dropdown.
//!
//! The directory is built once at startup through [`DirectoryBuilder`] and
//! passed by reference to whatever needs lookup access. Construction fails
//! unless every kind is covered, which replaces branch-per-kind dispatch
//! with a one-line registration per kind.
//!
//! ## Usage
//!
//! ```
//! use gamedata_core::ObjectKind;
//! use gamedata_registry::{LookupDirectory, testing::SampleItem};
//!
//! let mut builder = LookupDirectory::builder();
//! let items = builder.lookup::<SampleItem>();
//! // ... one line per remaining kind ...
//! # for kind in ObjectKind::all() {
//! #     if *kind != ObjectKind::Item { builder.empty(*kind); }
//! # }
//! let directory = builder.build().unwrap();
//!
//! items.register(SampleItem::new(5, "Sword")).unwrap();
//! assert_eq!(directory.list_names(ObjectKind::Item), vec!["Sword"]);
//! assert_eq!(directory.id_at_ordinal(ObjectKind::Item, 0), 5);
//! ```

use crate::catalog::{EmptyCatalog, KindCatalog};
use crate::lookup::Lookup;
use gamedata_core::error::{Error, Result};
use gamedata_core::kind::ObjectKind;
use gamedata_core::object::GameObject;
use std::collections::HashMap;
use tracing::info;

/// Kind tag → catalog table serving the generic query shapes
///
/// All queries are read views over the live registries, never cached copies,
/// so they agree with the typed access path at all times.
pub struct LookupDirectory {
    catalogs: HashMap<ObjectKind, Box<dyn KindCatalog>>,
}

impl LookupDirectory {
    /// Start building a directory
    pub fn builder() -> DirectoryBuilder {
        DirectoryBuilder {
            catalogs: HashMap::new(),
        }
    }

    /// Resolve the catalog for a kind
    ///
    /// # Panics
    ///
    /// Panics if the kind has no entry. The kind set is closed, so a missing
    /// entry is a code/catalog mismatch, not a runtime condition; building
    /// through [`DirectoryBuilder::build`] makes this unreachable.
    fn catalog(&self, kind: ObjectKind) -> &dyn KindCatalog {
        match self.catalogs.get(&kind) {
            Some(catalog) => catalog.as_ref(),
            None => panic!("no catalog registered for kind {kind}"),
        }
    }

    /// Names of every registered object of a kind, in registry iteration order
    ///
    /// Empty for a kind with no objects, including non-addressable kinds.
    pub fn list_names(&self, kind: ObjectKind) -> Vec<String> {
        self.catalog(kind).names()
    }

    /// Current number of registered objects of a kind
    pub fn count(&self, kind: ObjectKind) -> usize {
        self.catalog(kind).count()
    }

    /// Id of the object at a zero-based position in the iteration order
    ///
    /// Returns `-1` when `ordinal` is negative, out of bounds, or the kind
    /// has no addressable objects. Lets a UI recover the id behind a
    /// selected row of a flat indexed list.
    pub fn id_at_ordinal(&self, kind: ObjectKind, ordinal: i32) -> i32 {
        if ordinal < 0 {
            return -1;
        }
        self.catalog(kind).id_at(ordinal as usize).unwrap_or(-1)
    }

    /// Zero-based position of an id in the iteration order
    ///
    /// Returns `-1` when the id is not currently registered for the kind, or
    /// the kind has no addressable objects.
    pub fn ordinal_of_id(&self, kind: ObjectKind, id: i32) -> i32 {
        self.catalog(kind)
            .ordinal_of(id)
            .map(|ordinal| ordinal as i32)
            .unwrap_or(-1)
    }
}

impl std::fmt::Debug for LookupDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupDirectory")
            .field("kind_count", &self.catalogs.len())
            .finish()
    }
}

/// Builder assembling a [`LookupDirectory`] one kind at a time
pub struct DirectoryBuilder {
    catalogs: HashMap<ObjectKind, Box<dyn KindCatalog>>,
}

impl DirectoryBuilder {
    /// Register a lookup for `T`'s kind and return the typed handle
    ///
    /// The directory keeps an erased clone of the handle, so typed and
    /// generic access observe the same backing map.
    ///
    /// # Panics
    ///
    /// Panics if the kind already has an entry; two types claiming one kind
    /// is a configuration error.
    pub fn lookup<T: GameObject>(&mut self) -> Lookup<T> {
        let handle = Lookup::<T>::new();
        self.insert(T::KIND, Box::new(handle.clone()));
        handle
    }

    /// Register a kind that has no addressable objects
    ///
    /// # Panics
    ///
    /// Panics if the kind already has an entry.
    pub fn empty(&mut self, kind: ObjectKind) -> &mut Self {
        self.insert(kind, Box::new(EmptyCatalog::new(kind)));
        self
    }

    fn insert(&mut self, kind: ObjectKind, catalog: Box<dyn KindCatalog>) {
        if self.catalogs.insert(kind, catalog).is_some() {
            panic!("kind {kind} registered twice");
        }
    }

    /// Finish the build, checking coverage of the closed kind set
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingLookup`] naming the first kind without an
    /// entry. An incomplete directory never serves queries.
    pub fn build(self) -> Result<LookupDirectory> {
        for kind in ObjectKind::all() {
            if !self.catalogs.contains_key(kind) {
                return Err(Error::MissingLookup(*kind));
            }
        }
        info!(kinds = self.catalogs.len(), "lookup directory built");
        Ok(LookupDirectory {
            catalogs: self.catalogs,
        })
    }
}
