//! Error types for the gamedata registry
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Absence is not an error here: a missing id surfaces as `None`, `-1`, or the
//! `"Deleted"` name depending on the call shape, so callers check rather than
//! catch. The variants below cover the genuinely exceptional cases.

use crate::kind::ObjectKind;
use thiserror::Error;

/// Result type alias for gamedata operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the gamedata registry
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed binary state passed to `load`
    #[error("decode error for {kind}: {reason}")]
    Decode {
        /// Kind of the object being loaded
        kind: ObjectKind,
        /// Underlying codec failure
        reason: String,
    },

    /// Failure serializing an object's current state
    #[error("encode error for {kind}: {reason}")]
    Encode {
        /// Kind of the object being serialized
        kind: ObjectKind,
        /// Underlying codec failure
        reason: String,
    },

    /// An id was registered twice for the same kind
    #[error("duplicate id {id} registered for {kind}")]
    DuplicateId {
        /// Kind whose registry rejected the registration
        kind: ObjectKind,
        /// The already-present id
        id: i32,
    },

    /// A kind has no entry in the lookup directory
    ///
    /// Raised when building a directory that does not cover every kind.
    /// The kind set is closed, so this is a configuration error, not a
    /// runtime condition to recover from.
    #[error("no lookup registered for kind {0}")]
    MissingLookup(ObjectKind),
}

impl Error {
    /// Build a decode error from any displayable codec failure
    pub fn decode(kind: ObjectKind, reason: impl std::fmt::Display) -> Self {
        Error::Decode {
            kind,
            reason: reason.to_string(),
        }
    }

    /// Build an encode error from any displayable codec failure
    pub fn encode(kind: ObjectKind, reason: impl std::fmt::Display) -> Self {
        Error::Encode {
            kind,
            reason: reason.to_string(),
        }
    }

    /// True if this is a decode error
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// True if this is a duplicate-id error
    pub fn is_duplicate_id(&self) -> bool {
        matches!(self, Error::DuplicateId { .. })
    }
}
