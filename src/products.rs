//! Products

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Product record as served by the catalog.
///
/// Only `id` is required when decoding; everything else falls back to its
/// default so partial records (such as the echo of a simulated write) still
/// decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Display title
    pub title: String,

    /// Long description
    pub description: String,

    /// Unit price before discount
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Discount percentage in the range 0-100, if any
    #[serde(with = "rust_decimal::serde::float_option")]
    pub discount_percentage: Option<Decimal>,

    /// Average rating, 0-5
    pub rating: f64,

    /// Units in stock
    pub stock: u32,

    /// Category slug
    pub category: String,

    /// Brand name
    pub brand: Option<String>,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Additional image URLs
    pub images: Vec<String>,

    /// Customer reviews
    pub reviews: Vec<Review>,
}

impl Product {
    /// Star breakdown for this product's rating.
    pub fn stars(&self) -> StarRating {
        StarRating::from_rating(self.rating)
    }
}

/// A single customer review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Review {
    /// Rating given by the reviewer, 1-5
    pub rating: u8,

    /// Free-text comment
    pub comment: String,

    /// Review date as reported upstream
    pub date: String,

    /// Reviewer display name
    pub reviewer_name: String,

    /// Reviewer email
    pub reviewer_email: String,
}

/// Product category
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Unique slug, used in category URLs
    pub slug: String,

    /// Display name
    pub name: String,

    /// Upstream listing URL
    pub url: String,
}

/// Number of stars shown for a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    /// Fully filled stars
    pub full: u8,

    /// Half stars (0 or 1)
    pub half: u8,

    /// Empty stars
    pub empty: u8,
}

impl StarRating {
    /// Total number of stars rendered.
    pub const MAX: u8 = 5;

    /// Split a 0-5 rating into full, half and empty stars.
    ///
    /// Out-of-range and non-finite ratings are clamped.
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_finite() {
            rating.clamp(0.0, f64::from(Self::MAX))
        } else {
            0.0
        };

        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "rating is clamped to 0..=5 above"
        )]
        let full = rating.floor() as u8;

        let half = u8::from(full < Self::MAX && rating.fract() >= 0.5);

        Self {
            full,
            half,
            empty: Self::MAX - full - half,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn decodes_catalog_product() -> TestResult {
        let json = r#"{
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "description": "A popular mascara.",
            "category": "beauty",
            "price": 9.99,
            "discountPercentage": 7.17,
            "rating": 4.94,
            "stock": 5,
            "tags": ["beauty", "mascara"],
            "brand": "Essence",
            "reviews": [
                {
                    "rating": 2,
                    "comment": "Very unhappy with my purchase!",
                    "date": "2024-05-23T08:56:21.618Z",
                    "reviewerName": "John Doe",
                    "reviewerEmail": "john.doe@x.dummyjson.com"
                }
            ],
            "images": ["https://cdn.dummyjson.com/1.png"],
            "thumbnail": "https://cdn.dummyjson.com/thumbnail.png"
        }"#;

        let product: Product = serde_json::from_str(json)?;

        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.price, Decimal::new(999, 2));
        assert_eq!(product.discount_percentage, Some(Decimal::new(717, 2)));
        assert_eq!(product.stock, 5);
        assert_eq!(product.brand.as_deref(), Some("Essence"));
        assert_eq!(product.reviews.len(), 1);
        assert_eq!(
            product.reviews.first().map(|r| r.reviewer_name.as_str()),
            Some("John Doe")
        );

        Ok(())
    }

    #[test]
    fn decodes_partial_product() -> TestResult {
        let product: Product = serde_json::from_str(r#"{"id": 195, "title": "New"}"#)?;

        assert_eq!(product.id, ProductId(195));
        assert_eq!(product.price, Decimal::ZERO);
        assert_eq!(product.discount_percentage, None);
        assert!(product.reviews.is_empty());

        Ok(())
    }

    #[test]
    fn stars_for_whole_rating() {
        assert_eq!(
            StarRating::from_rating(4.0),
            StarRating {
                full: 4,
                half: 0,
                empty: 1
            }
        );
    }

    #[test]
    fn stars_for_half_rating() {
        assert_eq!(
            StarRating::from_rating(3.56),
            StarRating {
                full: 3,
                half: 1,
                empty: 1
            }
        );
    }

    #[test]
    fn stars_below_half_round_down() {
        assert_eq!(
            StarRating::from_rating(2.49),
            StarRating {
                full: 2,
                half: 0,
                empty: 3
            }
        );
    }

    #[test]
    fn stars_clamp_out_of_range() {
        assert_eq!(StarRating::from_rating(7.5).full, 5);
        assert_eq!(StarRating::from_rating(-1.0).empty, 5);
        assert_eq!(StarRating::from_rating(f64::NAN).empty, 5);
    }
}
