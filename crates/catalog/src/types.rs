//! Core domain types for the product catalog.
//!
//! A `Product` is an immutable record supplied by whoever owns the data.
//! Only `category`, `price`, `stock` and `brand` take part in filtering;
//! everything else is payload carried through to the caller untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique, stable identifier for a product
pub type ProductId = u32;

// =============================================================================
// Product
// =============================================================================

/// A single catalog entry.
///
/// Field names follow the camelCase JSON used by catalog files
/// (`createdAt`, `updatedAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Non-negative unit price
    pub price: f64,
    /// Units on hand; zero means out of stock
    pub stock: u32,
    pub rating: f64,
    pub brand: String,
    pub color: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl Product {
    /// Whether at least one unit is on hand.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// An ordered, read-only collection of products.
///
/// The order products were supplied in is the order every filter result
/// preserves, so the catalog never reorders its input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub(crate) products: Vec<Product>,
}

impl Catalog {
    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    ///
    /// Linear scan; catalogs are small.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// Consume the catalog and return its products.
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
