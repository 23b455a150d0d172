//! Filter state and its query-string encoding.
//!
//! This crate provides:
//! - `FilterSpec`, the optional-per-field filter state
//! - `FilterKey`, the recognized query keys
//! - `encode` / `decode`, the round trip between the two
//! - `set_field` / `update_query` for single-field edits
//!
//! ## Example Usage
//! ```
//! use query::{decode, encode, update_query, FilterKey};
//!
//! let spec = decode("?category=Electronics&minPrice=50").unwrap();
//! assert_eq!(spec.min_price, Some(50.0));
//! assert_eq!(encode(&spec), "category=Electronics&minPrice=50");
//!
//! let next = update_query("category=Electronics", FilterKey::Brand, "sound").unwrap();
//! assert_eq!(next, "brand=sound&category=Electronics");
//! ```

pub mod codec;
pub mod error;
pub mod key;
mod percent;
pub mod spec;

// Re-export main types
pub use codec::{decode, encode, set_field, update_query};
pub use error::{ParseError, UnknownKey};
pub use key::FilterKey;
pub use spec::FilterSpec;
