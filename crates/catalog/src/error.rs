//! Error types for the catalog crate.
//!
//! Every variant carries enough context (file, product id, field) to point
//! at the offending record without re-reading the source.

use thiserror::Error;

use crate::types::ProductId;

/// Errors that can occur while loading or validating a product catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog document is not a valid JSON array of products
    #[error("Parse error in {source_name}: {reason}")]
    ParseError { source_name: String, reason: String },

    /// A product field had a value outside its allowed domain
    #[error("Invalid value for {field} on product {id}: {value}")]
    InvalidValue {
        id: ProductId,
        field: &'static str,
        value: String,
    },

    /// Two products share the same id
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
