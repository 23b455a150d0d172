//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that lets each product constraint
//! be written, tested and composed on its own.

use catalog::Product;

/// A single predicate over products.
///
/// ## Design Note
/// - `Send + Sync` lets one compiled pipeline be shared across threads
/// - `matches` borrows the product, so the pipeline decides whether results
///   are owned or borrowed
/// - Implementations hold no mutable state; the same product always gets the
///   same answer
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `product` satisfies this constraint.
    fn matches(&self, product: &Product) -> bool;
}
