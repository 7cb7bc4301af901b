//! Error types for dxf-entities-rs

use thiserror::Error;

use crate::version::VersionPolicy;

/// Main error type for entity reconstruction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DxfError {
    /// Version identifier is not one of the two supported schema families
    #[error("Unsupported CAD version: {0:?}")]
    UnsupportedVersion(String),

    /// Type tag has no entry in the decoder dispatch table
    #[error("Unknown entity type: {0}")]
    UnknownEntityType(String),

    /// The entity kind exists, but not in the requested format version
    #[error("Entity type {entity} is not available in {version} files")]
    UnsupportedEntityForVersion {
        entity: String,
        version: VersionPolicy,
    },

    /// A required field was absent, or carried a value of an unusable type
    #[error("Missing required field with group code {0}")]
    MissingField(i32),

    /// Container/satellite adjacency was violated
    #[error("Malformed entity structure: {0}")]
    MalformedStructure(String),

    /// Face-index reference or grid lookup outside the valid range
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),
}

/// Result type alias for reconstruction operations
pub type Result<T> = std::result::Result<T, DxfError>;
