//! Type-erased catalog capability
//!
//! The lookup directory must answer count/name/ordinal queries against a
//! typed lookup without knowing its object type at compile time. This module
//! defines the small capability interface that makes that possible, plus the
//! catalog used for kinds that have no addressable objects at all.

use crate::lookup::Lookup;
use gamedata_core::kind::ObjectKind;
use gamedata_core::object::GameObject;

/// Capability interface over one kind's registry
///
/// Implementations are live views over the backing map, never cached copies:
/// a registration or delete made through the typed path is immediately
/// visible through every method here. Ordinals are zero-based positions in
/// the registry's stable insertion order.
pub trait KindCatalog: Send + Sync {
    /// The kind this catalog serves
    fn kind(&self) -> ObjectKind;

    /// Current number of registered objects
    fn count(&self) -> usize;

    /// Name of the object at an ordinal, or `None` when out of range
    fn name_at(&self, ordinal: usize) -> Option<String>;

    /// Id of the object at an ordinal, or `None` when out of range
    fn id_at(&self, ordinal: usize) -> Option<i32>;

    /// Ordinal of a registered id, or `None` when the id is absent
    fn ordinal_of(&self, id: i32) -> Option<usize>;

    /// All object names in registry iteration order
    fn names(&self) -> Vec<String> {
        (0..self.count()).filter_map(|i| self.name_at(i)).collect()
    }
}

impl<T: GameObject> KindCatalog for Lookup<T> {
    fn kind(&self) -> ObjectKind {
        T::KIND
    }

    fn count(&self) -> usize {
        self.read().len()
    }

    fn name_at(&self, ordinal: usize) -> Option<String> {
        self.read().name_at(ordinal)
    }

    fn id_at(&self, ordinal: usize) -> Option<i32> {
        self.read().id_at(ordinal)
    }

    fn ordinal_of(&self, id: i32) -> Option<usize> {
        self.read().ordinal_of(id)
    }

    // One lock acquisition, so the list is a consistent snapshot
    fn names(&self) -> Vec<String> {
        self.read().names()
    }
}

/// Catalog for a kind with no addressable objects
///
/// Queries against it succeed with empty results; they are not errors.
#[derive(Debug, Clone, Copy)]
pub struct EmptyCatalog {
    kind: ObjectKind,
}

impl EmptyCatalog {
    /// Create a catalog for a non-addressable kind
    pub fn new(kind: ObjectKind) -> Self {
        Self { kind }
    }
}

impl KindCatalog for EmptyCatalog {
    fn kind(&self) -> ObjectKind {
        self.kind
    }

    fn count(&self) -> usize {
        0
    }

    fn name_at(&self, _ordinal: usize) -> Option<String> {
        None
    }

    fn id_at(&self, _ordinal: usize) -> Option<i32> {
        None
    }

    fn ordinal_of(&self, _id: i32) -> Option<usize> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SampleItem;

    #[test]
    fn catalog_is_object_safe_and_send_sync() {
        fn accepts_catalog(_: &dyn KindCatalog) {}
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        let _ = accepts_catalog as fn(&dyn KindCatalog);
        assert_send::<Box<dyn KindCatalog>>();
        assert_sync::<Box<dyn KindCatalog>>();
    }

    #[test]
    fn lookup_catalog_reports_kind_from_type() {
        let handle: Lookup<SampleItem> = Lookup::new();
        let catalog: &dyn KindCatalog = &handle;
        assert_eq!(catalog.kind(), ObjectKind::Item);
    }

    #[test]
    fn lookup_catalog_sees_typed_writes_live() {
        let handle = Lookup::new();
        let erased: Box<dyn KindCatalog> = Box::new(handle.clone());

        assert_eq!(erased.count(), 0);

        handle.register(SampleItem::new(5, "Sword")).unwrap();
        handle.register(SampleItem::new(2, "Shield")).unwrap();

        assert_eq!(erased.count(), 2);
        assert_eq!(erased.name_at(0), Some("Sword".to_string()));
        assert_eq!(erased.id_at(1), Some(2));
        assert_eq!(erased.ordinal_of(2), Some(1));
        assert_eq!(erased.names(), vec!["Sword", "Shield"]);

        handle.delete(5);
        assert_eq!(erased.count(), 1);
        assert_eq!(erased.ordinal_of(2), Some(0));
        assert_eq!(erased.ordinal_of(5), None);
    }

    #[test]
    fn lookup_catalog_out_of_range_is_none() {
        let handle = Lookup::new();
        handle.register(SampleItem::new(1, "x")).unwrap();
        let catalog: &dyn KindCatalog = &handle;
        assert_eq!(catalog.name_at(1), None);
        assert_eq!(catalog.id_at(1), None);
    }

    #[test]
    fn empty_catalog_always_empty() {
        let catalog = EmptyCatalog::new(ObjectKind::Time);
        assert_eq!(catalog.kind(), ObjectKind::Time);
        assert_eq!(catalog.count(), 0);
        assert_eq!(catalog.name_at(0), None);
        assert_eq!(catalog.id_at(0), None);
        assert_eq!(catalog.ordinal_of(0), None);
        assert!(catalog.names().is_empty());
    }
}
