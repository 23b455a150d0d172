//! Filter on an inclusive price range.

use crate::traits::Filter;
use catalog::Product;

/// Keeps products priced within `[min, max]`.
///
/// Either bound may be missing. A range with `min > max` is accepted and
/// simply matches nothing.
pub struct PriceRangeFilter {
    min: Option<f64>,
    max: Option<f64>,
}

impl PriceRangeFilter {
    /// Create a new PriceRangeFilter.
    ///
    /// # Arguments
    /// * `min` - Inclusive lower bound, if any
    /// * `max` - Inclusive upper bound, if any
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }
}

impl Filter for PriceRangeFilter {
    fn name(&self) -> &str {
        "PriceRangeFilter"
    }

    fn matches(&self, product: &Product) -> bool {
        let above_min = self.min.is_none_or(|min| product.price >= min);
        let below_max = self.max.is_none_or(|max| product.price <= max);
        above_min && below_max
    }
}
