//! Identifier-keyed game object registry with a cross-kind catalog dispatcher
//!
//! Game-configuration entities (items, NPCs, maps, quests, ...) each need a
//! process-wide store keyed by integer id, a way to snapshot and roll back
//! their serialized state, and a way for generic tooling to enumerate them by
//! kind tag alone. This crate ties those together:
//!
//! - [`GameObject`]: the contract every stored object implements
//! - [`Lookup`]: the typed, shared registry handle for one kind
//! - [`LookupDirectory`]: the kind-tag dispatcher for generic tooling
//!
//! # Example
//!
//! ```
//! use gamedata::{LookupDirectory, ObjectKind};
//! use gamedata_registry::testing::SampleItem;
//!
//! let mut builder = LookupDirectory::builder();
//! let items = builder.lookup::<SampleItem>();
//! # for kind in ObjectKind::all() {
//! #     if *kind != ObjectKind::Item { builder.empty(*kind); }
//! # }
//! let directory = builder.build().unwrap();
//!
//! items.register(SampleItem::new(5, "Sword")).unwrap();
//!
//! // Typed and generic access agree on contents and ordering.
//! assert_eq!(items.get_name(5), "Sword");
//! assert_eq!(directory.list_names(ObjectKind::Item), vec!["Sword"]);
//! assert_eq!(directory.ordinal_of_id(ObjectKind::Item, 5), 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use gamedata_core::{BackupSlot, Error, GameObject, ObjectKind, Result};
pub use gamedata_registry::{
    DirectoryBuilder, EmptyCatalog, KindCatalog, Lookup, LookupDirectory, ObjectLookup,
};
