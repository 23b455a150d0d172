//! Filter on stock availability.

use crate::traits::Filter;
use catalog::Product;

/// Keeps products whose in-stock state equals the requirement.
///
/// `true` keeps products with stock, `false` keeps products without.
pub struct StockFilter {
    in_stock: bool,
}

impl StockFilter {
    pub fn new(in_stock: bool) -> Self {
        Self { in_stock }
    }
}

impl Filter for StockFilter {
    fn name(&self) -> &str {
        "StockFilter"
    }

    fn matches(&self, product: &Product) -> bool {
        product.in_stock() == self.in_stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::product;

    #[test]
    fn test_requires_stock() {
        let filter = StockFilter::new(true);

        assert!(filter.matches(&product(1, "c", 1.0, 1, "b")));
        assert!(!filter.matches(&product(2, "c", 1.0, 0, "b")));
    }

    #[test]
    fn test_false_requires_out_of_stock() {
        let filter = StockFilter::new(false);

        assert!(!filter.matches(&product(1, "c", 1.0, 35, "b")));
        assert!(filter.matches(&product(2, "c", 1.0, 0, "b")));
    }
}
