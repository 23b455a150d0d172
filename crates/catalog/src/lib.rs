//! # Catalog Crate
//!
//! Product records and the read-only collection they are filtered from.
//!
//! ## Main Components
//!
//! - **types**: `Product` and `Catalog`
//! - **parser**: JSON catalog documents into `Product` values
//! - **loader**: building and validating a `Catalog`
//! - **sample**: the built-in eight-product catalog
//! - **error**: error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("products.json"))?;
//! for product in &catalog {
//!     println!("{} {}", product.id, product.name);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod loader;
pub mod sample;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use sample::sample_products;
pub use types::{Catalog, Product, ProductId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn test_get_and_into_products() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.get(4).map(|p| p.name.as_str()), Some("4K TV"));

        let products = catalog.into_products();
        assert_eq!(products.first().map(|p| p.id), Some(1));
        assert_eq!(products.last().map(|p| p.id), Some(8));
    }

    #[test]
    fn test_product_json_uses_camel_case() {
        let catalog = Catalog::sample();
        let product = &catalog.products()[0];
        let json = serde_json::to_value(product).unwrap();
        assert_eq!(json["createdAt"], "2023-09-01");
        assert_eq!(json["updatedAt"], "2023-09-15");
    }
}
