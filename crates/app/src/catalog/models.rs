//! Catalog request and response models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use wavecart::{pagination::Pagination, products::Product, sorting::Sort};

/// Limit, offset and optional sort for a paged listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub limit: u32,
    pub skip: u64,
    pub sort: Option<Sort>,
}

impl PageQuery {
    #[must_use]
    pub fn new(limit: u32, skip: u64) -> Self {
        Self {
            limit,
            skip,
            sort: None,
        }
    }

    #[must_use]
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Query for the current page of `pagination`.
    #[must_use]
    pub fn for_page(pagination: &Pagination, sort: Option<Sort>) -> Self {
        Self {
            limit: pagination.page_size(),
            skip: pagination.skip(),
            sort,
        }
    }

    /// Query string parameters. Sorting is only sent when a sort is set.
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("limit", self.limit.to_string()), ("skip", self.skip.to_string())];

        if let Some(sort) = self.sort {
            params.push(("sortBy", sort.key.as_str().to_string()));
            params.push(("order", sort.order.as_str().to_string()));
        }

        params
    }
}

/// A page of the full catalog. `total` counts the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
    pub skip: u64,
    pub limit: u32,
}

/// Products of one category.
///
/// Carries no catalog-wide total: paging over a category counts the products
/// on the returned page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CategoryProducts {
    pub products: Vec<Product>,
}

impl CategoryProducts {
    /// Total used for paging, the length of the returned page.
    pub fn page_total(&self) -> u64 {
        self.products.len() as u64
    }
}

/// Search matches.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    pub products: Vec<Product>,
    pub total: u64,
}

/// Product to create through the simulated write endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub discount_percentage: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Partial update sent through the simulated write endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub discount_percentage: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

/// Echo of a simulated delete.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeletedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub is_deleted: bool,
    pub deleted_on: Option<String>,
}
