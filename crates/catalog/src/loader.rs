//! Catalog construction and validation.
//!
//! Every way of building a `Catalog` funnels through `Catalog::new`, so a
//! catalog that exists has already passed validation.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::{Catalog, Product};
use std::collections::HashSet;
use std::path::Path;

impl Catalog {
    /// Build a catalog from products, keeping their order.
    ///
    /// Fails if ids repeat or a product carries an out-of-domain value.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let catalog = Self { products };
        catalog.validate()?;
        tracing::debug!(products = catalog.len(), "catalog built");
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading catalog");
        let products = parser::parse_products_file(path)?;
        Self::new(products)
    }

    /// Load a catalog from an in-memory JSON document.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let products = parser::parse_products("<inline>", input)?;
        Self::new(products)
    }

    /// Check data integrity.
    ///
    /// Rules:
    /// - ids are unique
    /// - names are non-empty
    /// - prices are finite and non-negative
    /// - ratings are finite
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::with_capacity(self.products.len());

        for product in &self.products {
            if !ids.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::InvalidValue {
                    id: product.id,
                    field: "name",
                    value: product.name.clone(),
                });
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidValue {
                    id: product.id,
                    field: "price",
                    value: product.price.to_string(),
                });
            }
            if !product.rating.is_finite() {
                return Err(CatalogError::InvalidValue {
                    id: product.id,
                    field: "rating",
                    value: product.rating.to_string(),
                });
            }
        }

        Ok(())
    }
}
