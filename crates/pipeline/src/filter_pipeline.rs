//! The FilterPipeline combines multiple filters.
//!
//! This module provides the FilterPipeline struct that AND-combines
//! filters using the builder pattern.

use crate::traits::Filter;
use catalog::Product;
use std::borrow::Borrow;

/// AND-combination of filters over a product sequence.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CategoryFilter::new("Electronics"))
///     .add_filter(PriceRangeFilter::new(Some(100.0), None));
///
/// let filtered = pipeline.apply(catalog.iter());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters, in evaluation order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Whether `product` passes every filter. An empty pipeline passes
    /// everything.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|filter| filter.matches(product))
    }

    /// Keep the candidates that pass every filter.
    ///
    /// ## Algorithm
    /// 1. Walk the candidates once, front to back
    /// 2. Evaluate filters in order, stopping at the first rejection
    /// 3. Collect survivors in their original relative order
    ///
    /// Candidates may be owned `Product`s or anything that borrows as one
    /// (`&Product`, `Arc<Product>`); the result has the same item type.
    pub fn apply<I, P>(&self, candidates: I) -> Vec<P>
    where
        I: IntoIterator<Item = P>,
        P: Borrow<Product>,
    {
        let mut input_count = 0usize;
        let filtered: Vec<P> = candidates
            .into_iter()
            .inspect(|_| input_count += 1)
            .filter(|candidate| self.matches(<P as Borrow<Product>>::borrow(candidate)))
            .collect();

        tracing::debug!(
            filters = ?self.filter_names(),
            input = input_count,
            output = filtered.len(),
            "Applied filter pipeline"
        );
        filtered
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{CategoryFilter, PriceRangeFilter, StockFilter};
    use catalog::Catalog;

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let catalog = Catalog::sample();

        let filtered = pipeline.apply(catalog.iter());
        assert_eq!(filtered.len(), catalog.len());
        assert!(pipeline.is_empty());
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(StockFilter::new(false));

        let filtered = pipeline.apply(Catalog::sample().into_products());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
    }

    #[test]
    fn test_filters_are_and_combined() {
        let pipeline = FilterPipeline::new()
            .add_filter(CategoryFilter::new("Electronics"))
            .add_filter(PriceRangeFilter::new(None, Some(500.0)));
        let catalog = Catalog::sample();

        let ids: Vec<u32> = pipeline.apply(catalog.iter()).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(pipeline.filter_names(), vec!["CategoryFilter", "PriceRangeFilter"]);
    }

    #[test]
    fn test_keeps_input_order() {
        let pipeline = FilterPipeline::new().add_filter(StockFilter::new(true));
        let mut products = Catalog::sample().into_products();
        products.reverse();

        let ids: Vec<u32> = pipeline.apply(&products).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![8, 7, 6, 5, 4, 2, 1]);
    }
}
