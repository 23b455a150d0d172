//! Evaluation of a `FilterSpec` against a candidate sequence.
//!
//! `FilterEngine::new` turns each present spec field into a filter, compiling
//! the brand pattern once up front. The engine is then a pure function of
//! its input: no clock, no shared state, no dependence on earlier calls.
//!
//! Candidates are consumed by a single forward pass. Borrowed inputs
//! (`&[Product]`, `&Catalog`) are held immutably for the whole scan, so a
//! writer cannot change the collection underneath an evaluation.

use crate::error::PatternError;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{BrandFilter, CategoryFilter, PriceRangeFilter, StockFilter};
use catalog::Product;
use query::FilterSpec;
use std::borrow::Borrow;

/// A compiled `FilterSpec`.
pub struct FilterEngine {
    pipeline: FilterPipeline,
}

impl FilterEngine {
    /// Compile `spec`.
    ///
    /// Cheap equality checks go first and the brand pattern last. Since
    /// filters are AND-combined the order never changes the result.
    pub fn new(spec: &FilterSpec) -> Result<Self, PatternError> {
        let mut pipeline = FilterPipeline::new();

        if let Some(category) = &spec.category {
            pipeline = pipeline.add_filter(CategoryFilter::new(category.as_str()));
        }
        if spec.min_price.is_some() || spec.max_price.is_some() {
            pipeline = pipeline.add_filter(PriceRangeFilter::new(spec.min_price, spec.max_price));
        }
        if let Some(in_stock) = spec.stock_available {
            pipeline = pipeline.add_filter(StockFilter::new(in_stock));
        }
        if let Some(pattern) = &spec.brand {
            pipeline = pipeline.add_filter(BrandFilter::new(pattern)?);
        }

        tracing::debug!(filters = ?pipeline.filter_names(), "compiled filter spec");
        Ok(Self { pipeline })
    }

    /// Whether the spec places no constraint at all.
    pub fn is_unconstrained(&self) -> bool {
        self.pipeline.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.pipeline.matches(product)
    }

    /// Stable filter: matches keep their input order.
    pub fn apply<I, P>(&self, candidates: I) -> Vec<P>
    where
        I: IntoIterator<Item = P>,
        P: Borrow<Product>,
    {
        self.pipeline.apply(candidates)
    }
}

/// Compile `spec` and evaluate it over `candidates` in one call.
///
/// # Returns
/// * `Ok(Vec<P>)` - The matching candidates, in input order
/// * `Err(PatternError)` - If the brand pattern does not compile
pub fn apply<I, P>(spec: &FilterSpec, candidates: I) -> Result<Vec<P>, PatternError>
where
    I: IntoIterator<Item = P>,
    P: Borrow<Product>,
{
    Ok(FilterEngine::new(spec)?.apply(candidates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;
    use query::FilterKey;

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_spec_is_identity() {
        let catalog = Catalog::sample();
        let engine = FilterEngine::new(&FilterSpec::new()).unwrap();

        assert!(engine.is_unconstrained());
        let result = engine.apply(catalog.iter());
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_one_filter_per_present_field() {
        let spec = FilterSpec::new()
            .with_category("Computers")
            .with_min_price(1.0)
            .with_max_price(2000.0)
            .with_stock_available(true)
            .with_brand("tech");
        let engine = FilterEngine::new(&spec).unwrap();

        assert_eq!(
            engine.pipeline.filter_names(),
            vec!["CategoryFilter", "PriceRangeFilter", "StockFilter", "BrandFilter"]
        );
        let catalog = Catalog::sample();
        assert_eq!(ids(&engine.apply(catalog.iter())), vec![2]);
    }

    #[test]
    fn test_explicit_false_stock_selects_out_of_stock() {
        let catalog = Catalog::sample();
        let spec = FilterSpec::new().with_stock_available(false);

        let result = apply(&spec, catalog.iter()).unwrap();
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn test_empty_category_matches_nothing() {
        let catalog = Catalog::sample();
        let spec = FilterSpec::new().with_category("");

        assert!(apply(&spec, catalog.iter()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_brand_pattern_is_reported() {
        let catalog = Catalog::sample();
        let spec = FilterSpec::new().with_category("Electronics").with_brand("[sound");

        let err = apply(&spec, catalog.iter()).unwrap_err();
        assert_eq!(err.field, FilterKey::Brand);
        assert_eq!(err.pattern, "[sound");
    }

    #[test]
    fn test_owned_candidates_come_back_owned() {
        let spec = FilterSpec::new().with_category("Wearables");
        let result: Vec<Product> = apply(&spec, Catalog::sample().into_products()).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Fitness Tracker");
    }

    #[test]
    fn test_repeated_calls_agree() {
        let catalog = Catalog::sample();
        let engine = FilterEngine::new(&FilterSpec::new().with_brand("o")).unwrap();

        let first = ids(&engine.apply(catalog.iter()));
        let second = ids(&engine.apply(catalog.iter()));
        assert_eq!(first, second);
    }
}
