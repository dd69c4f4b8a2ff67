//! Error types for the fapiao-core library.
//!
//! The extraction engine itself never fails: malformed lines degrade
//! to partial records and unusable documents come back empty. Errors
//! only arise at the input boundary, when document text cannot be
//! read at all.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the fapiao library.
#[derive(Error, Debug)]
pub enum FapiaoError {
    /// I/O error while reading document text.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document text exists but is not usable as input.
    #[error("unreadable document {path}: {reason}")]
    UnreadableDocument { path: PathBuf, reason: String },
}

/// Result type for the fapiao library.
pub type Result<T> = std::result::Result<T, FapiaoError>;
