//! Error types for nginxgen
//!
//! The block engine itself never fails; errors only occur at the
//! ambient edges (settings deserialization and file I/O).

use thiserror::Error;

/// Result type for nginxgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for nginxgen
#[derive(Error, Debug)]
pub enum Error {
    /// Settings error
    #[error("Settings error: {0}")]
    Settings(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
