//! Filter on brand by case-insensitive pattern.
//!
//! The pattern is a regular expression, so a plain word behaves as a
//! substring match (`sound` matches `SoundX`) while anchors and
//! alternation are still available (`^(fit|key)`).

use crate::error::PatternError;
use crate::traits::Filter;
use catalog::Product;
use query::FilterKey;
use regex::{Regex, RegexBuilder};

/// Keeps products whose brand contains a match for the pattern.
pub struct BrandFilter {
    pattern: Regex,
}

impl BrandFilter {
    /// Compile `pattern` case-insensitively.
    ///
    /// Fails with a `PatternError` naming the `brand` field when the
    /// pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| PatternError {
                field: FilterKey::Brand,
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self { pattern })
    }
}

impl Filter for BrandFilter {
    fn name(&self) -> &str {
        "BrandFilter"
    }

    fn matches(&self, product: &Product) -> bool {
        self.pattern.is_match(&product.brand)
    }
}
