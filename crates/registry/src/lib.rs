//! Typed registries and the cross-kind catalog dispatcher
//!
//! This crate provides the storage and dispatch layer over the
//! [`gamedata_core`] contract:
//!
//! - [`ObjectLookup`]: insertion-ordered id → object store for one kind
//! - [`Lookup`]: shared handle over an `ObjectLookup`, cloneable and safe to
//!   hand to both typed callers and the type-erased catalog
//! - [`KindCatalog`]: the capability interface the dispatcher uses without
//!   knowing the concrete object type
//! - [`LookupDirectory`]: kind tag → catalog table answering the generic
//!   query shapes (name list, ordinal → id, id → ordinal)
//!
//! Both access paths are live views over the same backing map: a delete made
//! through a typed handle is immediately visible through the directory.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod directory;
pub mod lookup;
pub mod testing;

pub use catalog::{EmptyCatalog, KindCatalog};
pub use directory::{DirectoryBuilder, LookupDirectory};
pub use lookup::{Lookup, ObjectLookup};
