//! Translation between `FilterSpec` and its query-string form.
//!
//! ## Wire format
//! `key=value` pairs joined by `&`, form-urlencoded. Recognized keys are the
//! `FilterKey` wire names; anything else is dropped on decode.
//!
//! ## Coercion rules
//! - `category`, `brand`: the decoded text; an empty value means absent
//! - `minPrice`, `maxPrice`: a finite, non-negative decimal; anything else
//!   means absent (never zero)
//! - `stockAvailable`: the literal `true` means `Some(true)`; anything else
//!   means absent. An explicit `false` cannot be expressed on the wire.
//!
//! `encode` only writes values `decode` would accept, in a fixed key order,
//! so `decode(encode(spec))` is a fixed point after one pass.

use crate::error::ParseError;
use crate::key::FilterKey;
use crate::percent::decode_component;
use crate::spec::FilterSpec;
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;

/// Serialize the present fields of `spec` into a query string.
///
/// Fields appear in ascending key order. An empty spec encodes to `""`.
pub fn encode(spec: &FilterSpec) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for key in FilterKey::ALL {
        if let Some(value) = encoded_value(spec, key) {
            serializer.append_pair(key.as_str(), &value);
        }
    }
    serializer.finish()
}

/// Parse a query string into a fresh `FilterSpec`.
///
/// A leading `?` is allowed. Empty segments are skipped and a segment with
/// no `=` reads as an empty value. When a key repeats, the last occurrence
/// wins.
pub fn decode(raw: &str) -> Result<FilterSpec, ParseError> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    let mut spec = FilterSpec::default();

    for segment in raw.split('&') {
        if segment.is_empty() {
            continue;
        }

        let (raw_key, raw_value) = segment.split_once('=').unwrap_or((segment, ""));
        let name = decode_component(raw_key, segment)?;
        if name.is_empty() {
            return Err(ParseError::EmptyKey {
                segment: segment.to_string(),
            });
        }
        let value = decode_component(raw_value, segment)?;

        match name.parse::<FilterKey>() {
            Ok(key) => spec = set_field(spec, key, &value),
            Err(_) => tracing::trace!(key = %name, "ignoring unknown query key"),
        }
    }

    tracing::debug!(active = spec.active_count(), "decoded filter query");
    Ok(spec)
}

/// Replace one field of `spec` from its textual form, using the same
/// coercion as `decode`. Every other field is carried over unchanged.
///
/// This is how a form control feeds an edit back: an empty text box or an
/// unchecked stock box clears the field.
pub fn set_field(spec: FilterSpec, key: FilterKey, raw_value: &str) -> FilterSpec {
    match key {
        FilterKey::Category => match non_empty(raw_value) {
            Some(category) => spec.with_category(category),
            None => spec.without(key),
        },
        FilterKey::Brand => match non_empty(raw_value) {
            Some(brand) => spec.with_brand(brand),
            None => spec.without(key),
        },
        FilterKey::MinPrice => match parse_price(key, raw_value) {
            Some(price) => spec.with_min_price(price),
            None => spec.without(key),
        },
        FilterKey::MaxPrice => match parse_price(key, raw_value) {
            Some(price) => spec.with_max_price(price),
            None => spec.without(key),
        },
        FilterKey::StockAvailable => {
            if raw_value == "true" {
                spec.with_stock_available(true)
            } else {
                spec.without(key)
            }
        }
    }
}

/// Decode `raw`, change exactly one field, and encode the result.
pub fn update_query(raw: &str, key: FilterKey, raw_value: &str) -> Result<String, ParseError> {
    let spec = decode(raw)?;
    Ok(encode(&set_field(spec, key, raw_value)))
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

fn parse_price(key: FilterKey, raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if is_price(value) => Some(normalize_zero(value)),
        _ => {
            tracing::debug!(key = %key, value = raw, "dropping unusable price");
            None
        }
    }
}

fn is_price(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

// -0.0 passes `>= 0.0`; fold it so it encodes as "0".
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// The wire text for one field, or `None` when nothing should be emitted.
fn encoded_value(spec: &FilterSpec, key: FilterKey) -> Option<String> {
    match key {
        FilterKey::Category => spec.category.as_deref().and_then(non_empty).map(str::to_string),
        FilterKey::Brand => spec.brand.as_deref().and_then(non_empty).map(str::to_string),
        FilterKey::MinPrice => spec.min_price.and_then(format_price),
        FilterKey::MaxPrice => spec.max_price.and_then(format_price),
        FilterKey::StockAvailable => (spec.stock_available == Some(true)).then(|| "true".to_string()),
    }
}

/// Shortest decimal text that parses back to the same value (`50`, `199.99`).
fn format_price(value: f64) -> Option<String> {
    is_price(value).then(|| normalize_zero(value).to_string())
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

impl FromStr for FilterSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
