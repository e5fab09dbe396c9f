//! Core types and traits for the gamedata registry
//!
//! This crate defines the foundational types used throughout the system:
//! - ObjectKind: Closed set of kind tags, one per configuration object type
//! - GameObject: The contract every stored object implements (identity,
//!   serialization, backup/restore)
//! - BackupSlot: Single held snapshot of an object's serialized state
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod kind;
pub mod object;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use kind::ObjectKind;
pub use object::{BackupSlot, GameObject};
