//! Error types for Shelfmark Core

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Top-level error type for all catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No record in the catalog carries the requested id
    #[error("No book with ID {0}")]
    NotFound(u64),

    /// The backing file exists but is not a valid book list
    #[error("Malformed catalog file: {0}")]
    Format(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
