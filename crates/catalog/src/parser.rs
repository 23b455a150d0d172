//! Parser for catalog documents.
//!
//! A catalog file is a JSON array of product objects:
//!
//! ```json
//! [
//!   { "id": 1, "name": "Wireless Headphones", "category": "Electronics",
//!     "price": 199.99, "stock": 35, "rating": 4.5, "brand": "SoundX",
//!     "color": "Black", "createdAt": "2023-09-01", "updatedAt": "2023-09-15" }
//! ]
//! ```
//!
//! Parsing only checks shape; domain rules live in `Catalog::validate`.

use crate::error::{CatalogError, Result};
use crate::types::Product;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a catalog document held in memory.
///
/// `source_name` only appears in error messages.
pub fn parse_products(source_name: &str, input: &str) -> Result<Vec<Product>> {
    serde_json::from_str(input).map_err(|err| CatalogError::ParseError {
        source_name: source_name.to_string(),
        reason: err.to_string(),
    })
}

/// Read and parse a catalog file.
pub fn parse_products_file(path: &Path) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(err),
    })?;

    parse_products(&path.display().to_string(), &content)
}
