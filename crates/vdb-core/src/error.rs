//! Error types for vdb-rs.

use thiserror::Error;

/// The main error type for vdb-rs operations.
///
/// Queries on a [`VolumeAssetSet`](crate::VolumeAssetSet) never fail; they
/// degrade to defaults. Only lookups by name, grid construction and option
/// loading report errors.
#[derive(Error, Debug)]
pub enum VdbError {
    /// No volume slot matches the given name.
    #[error("unknown volume slot '{0}'")]
    UnknownSlot(String),

    /// A volume sequence was created without any frame.
    #[error("volume sequence '{0}' has no frames")]
    EmptySequence(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for vdb-rs operations.
pub type Result<T> = std::result::Result<T, VdbError>;
