use query::FilterKey;
use thiserror::Error;

/// A filter field whose text is not a valid regular expression.
///
/// Returned before any product is scanned; a bad pattern never degrades
/// into "match nothing" or "match everything".
#[derive(Debug, Error)]
#[error("invalid {field} pattern {pattern:?}: {source}")]
pub struct PatternError {
    pub field: FilterKey,
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}
