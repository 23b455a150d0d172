//! The in-memory filter state.
//!
//! Every field is an `Option`: `None` means "no constraint on this field",
//! which is different from `Some("")` ("must equal the empty string"). The
//! builders consume the spec and hand back a new value, so a spec that has
//! been shared (cloned) is never changed underneath its other holders.

use crate::key::FilterKey;
use serde::Serialize;

/// A set of independently optional product constraints.
///
/// All present fields are AND-combined when evaluated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Exact, case-sensitive category match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Inclusive lower price bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// `Some(true)` requires stock, `Some(false)` requires none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_available: Option<bool>,
    /// Case-insensitive regular expression matched against the brand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl FilterSpec {
    /// A spec with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of present fields.
    pub fn active_count(&self) -> usize {
        FilterKey::ALL
            .into_iter()
            .filter(|key| self.is_active(*key))
            .count()
    }

    /// Whether the field behind `key` is present.
    pub fn is_active(&self, key: FilterKey) -> bool {
        match key {
            FilterKey::Category => self.category.is_some(),
            FilterKey::MinPrice => self.min_price.is_some(),
            FilterKey::MaxPrice => self.max_price.is_some(),
            FilterKey::StockAvailable => self.stock_available.is_some(),
            FilterKey::Brand => self.brand.is_some(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_stock_available(mut self, stock_available: bool) -> Self {
        self.stock_available = Some(stock_available);
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Drop the constraint behind `key`, leaving every other field as is.
    pub fn without(mut self, key: FilterKey) -> Self {
        match key {
            FilterKey::Category => self.category = None,
            FilterKey::MinPrice => self.min_price = None,
            FilterKey::MaxPrice => self.max_price = None,
            FilterKey::StockAvailable => self.stock_available = None,
            FilterKey::Brand => self.brand = None,
        }
        self
    }
}
