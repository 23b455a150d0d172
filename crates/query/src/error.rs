use thiserror::Error;

/// A query string whose key=value syntax cannot be read.
///
/// Only structural problems are errors. Values that merely fail to coerce
/// (a price of `abc`, a `stockAvailable` of `yes`) decode to an absent field
/// instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty key in query segment {segment:?}")]
    EmptyKey { segment: String },
    #[error("invalid percent-escape in query segment {segment:?}")]
    InvalidEscape { segment: String },
    #[error("query segment {segment:?} is not valid UTF-8 after percent-decoding")]
    InvalidUtf8 { segment: String },
}

/// A query key that is not one of the `FilterKey` wire names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown filter key: {0}")]
pub struct UnknownKey(pub String);
