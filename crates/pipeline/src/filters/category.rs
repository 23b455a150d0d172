//! Filter on exact category.

use crate::traits::Filter;
use catalog::Product;

/// Keeps products whose category equals the given text exactly.
///
/// No case folding and no partial match: `"electronics"` does not match
/// `"Electronics"`.
pub struct CategoryFilter {
    category: String,
}

impl CategoryFilter {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn matches(&self, product: &Product) -> bool {
        product.category == self.category
    }
}
