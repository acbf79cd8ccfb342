//! Sorting

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Product field the catalog sorts by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Unit price
    #[default]
    Price,

    /// Average rating
    Rating,

    /// Discount percentage
    Discount,
}

impl SortKey {
    /// Catalog field name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Rating => "rating",
            Self::Discount => "discountPercentage",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Low to high
    #[default]
    Asc,

    /// High to low
    Desc,
}

impl SortOrder {
    /// Catalog order parameter value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A sort key and direction, written as `key|order` (e.g. `price|desc`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sort {
    /// Field to sort by
    pub key: SortKey,

    /// Direction
    pub order: SortOrder,
}

impl Sort {
    /// Create a sort.
    pub const fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }
}

/// Error parsing a [`Sort`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortParseError {
    /// The sort field is not recognised.
    #[error("unknown sort field `{0}`; expected price, rating or discount")]
    UnknownKey(String),

    /// The direction is not recognised.
    #[error("unknown sort order `{0}`; expected asc or desc")]
    UnknownOrder(String),
}

impl FromStr for SortKey {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(Self::Price),
            "rating" => Ok(Self::Rating),
            "discount" | "discountpercentage" => Ok(Self::Discount),
            _ => Err(SortParseError::UnknownKey(s.to_string())),
        }
    }
}

impl FromStr for SortOrder {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(SortParseError::UnknownOrder(s.to_string())),
        }
    }
}

impl FromStr for Sort {
    type Err = SortParseError;

    /// Parse `key` or `key|order`. The order defaults to ascending.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, order) = match s.split_once('|') {
            Some((key, order)) => (key.parse()?, order.parse()?),
            None => (s.parse()?, SortOrder::Asc),
        };

        Ok(Self { key, order })
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.key.as_str(), self.order.as_str())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_key_and_order() -> TestResult {
        let sort: Sort = "rating|desc".parse()?;

        assert_eq!(sort, Sort::new(SortKey::Rating, SortOrder::Desc));

        Ok(())
    }

    #[test]
    fn order_defaults_to_ascending() -> TestResult {
        let sort: Sort = "discount".parse()?;

        assert_eq!(sort, Sort::new(SortKey::Discount, SortOrder::Asc));

        Ok(())
    }

    #[test]
    fn rejects_unknown_values() {
        assert_eq!(
            "weight|asc".parse::<Sort>(),
            Err(SortParseError::UnknownKey("weight".to_string()))
        );
        assert_eq!(
            "price|up".parse::<Sort>(),
            Err(SortParseError::UnknownOrder("up".to_string()))
        );
    }

    #[test]
    fn default_is_price_ascending() {
        assert_eq!(Sort::default().to_string(), "price|asc");
    }
}
