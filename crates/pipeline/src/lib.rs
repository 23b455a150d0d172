//! Filtering of catalog products by a `FilterSpec`.
//!
//! This crate provides:
//! - Filter trait and one implementation per spec field
//! - FilterPipeline for AND-composing filters
//! - FilterEngine, which compiles a `FilterSpec` into a pipeline
//!
//! ## Architecture
//! A request flows through three steps:
//! 1. The query string is decoded into a `FilterSpec` (see the `query` crate)
//! 2. `FilterEngine::new` compiles the spec, validating the brand pattern
//! 3. `FilterEngine::apply` scans the candidates once and keeps the matches
//!
//! ## Example Usage
//! ```ignore
//! use catalog::Catalog;
//! use pipeline::FilterEngine;
//!
//! let spec = query::decode("category=Electronics&stockAvailable=true")?;
//! let engine = FilterEngine::new(&spec)?;
//!
//! let catalog = Catalog::sample();
//! for product in engine.apply(catalog.iter()) {
//!     println!("{}", product.name);
//! }
//! ```

pub mod engine;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use engine::{FilterEngine, apply};
pub use error::PatternError;
pub use filter_pipeline::FilterPipeline;
pub use traits::Filter;
