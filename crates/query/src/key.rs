use crate::error::UnknownKey;
use std::fmt;
use std::str::FromStr;

/// The recognized query keys, one per `FilterSpec` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterKey {
    Brand,
    Category,
    MaxPrice,
    MinPrice,
    StockAvailable,
}

impl FilterKey {
    /// Every key, in the order `encode` emits them (ascending wire name).
    pub const ALL: [FilterKey; 5] = [
        FilterKey::Brand,
        FilterKey::Category,
        FilterKey::MaxPrice,
        FilterKey::MinPrice,
        FilterKey::StockAvailable,
    ];

    /// Wire name as it appears in the query string.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::Brand => "brand",
            FilterKey::Category => "category",
            FilterKey::MaxPrice => "maxPrice",
            FilterKey::MinPrice => "minPrice",
            FilterKey::StockAvailable => "stockAvailable",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = UnknownKey;

    /// Case-sensitive, matching the wire names exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}
