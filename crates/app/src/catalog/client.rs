//! HTTP client for the product catalog.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};
use wavecart::products::{Category, Product, ProductId};

use crate::catalog::{
    errors::CatalogError,
    models::{
        CategoryProducts, DeletedProduct, NewProduct, PageQuery, ProductPage, ProductUpdate,
        SearchResults,
    },
};

/// Catalog endpoint used when none is configured.
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products";

/// Connection settings for the catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Products collection URL, e.g. `"https://dummyjson.com/products"`.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Catalog client over the dummyjson-style REST API.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    base_url: String,
    http: Client,
}

impl HttpCatalogClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidUrl`] if `base_url` does not parse, or
    /// an HTTP error if the client cannot be built.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let CatalogConfig {
            mut base_url,
            timeout,
        } = config;

        Url::parse(&base_url)
            .map_err(|error| CatalogError::InvalidUrl(format!("{base_url}: {error}")))?;

        base_url.truncate(base_url.trim_end_matches('/').len());

        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self { base_url, http })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Base URL with `segments` appended, each percent-encoded.
    fn segments_url(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = Url::parse(&self.base_url).map_err(|error| {
            CatalogError::InvalidUrl(format!("{}: {error}", self.base_url))
        })?;

        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidUrl(self.base_url.clone()))?
            .extend(segments);

        Ok(url)
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, query: PageQuery) -> Result<ProductPage, CatalogError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&query.params())
            .send()
            .await?;

        let page: ProductPage = read_json(response).await?;

        debug!(count = page.products.len(), total = page.total, "fetched product page");

        Ok(page)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let response = self.http.get(self.url(&format!("/{id}"))).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("product not found");

            return Err(CatalogError::NotFound);
        }

        read_json(response).await
    }

    #[instrument(skip(self))]
    pub async fn search_products(&self, query: &str) -> Result<SearchResults, CatalogError> {
        let response = self
            .http
            .get(self.url("/search"))
            .query(&[("q", query)])
            .send()
            .await?;

        let results: SearchResults = read_json(response).await?;

        debug!(count = results.products.len(), "search returned");

        Ok(results)
    }

    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let response = self.http.get(self.url("/categories")).send().await?;

        read_json(response).await
    }

    #[instrument(skip(self))]
    pub async fn list_category_slugs(&self) -> Result<Vec<String>, CatalogError> {
        let response = self.http.get(self.url("/category-list")).send().await?;

        read_json(response).await
    }

    #[instrument(skip(self))]
    pub async fn products_in_category(
        &self,
        slug: &str,
        query: PageQuery,
    ) -> Result<CategoryProducts, CatalogError> {
        let response = self
            .http
            .get(self.segments_url(&["category", slug])?)
            .query(&query.params())
            .send()
            .await?;

        read_json(response).await
    }

    #[instrument(skip(self, product), fields(title = %product.title))]
    pub async fn add_product(&self, product: &NewProduct) -> Result<Product, CatalogError> {
        let response = self
            .http
            .post(self.url("/add"))
            .json(product)
            .send()
            .await?;

        read_json(response).await
    }

    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> Result<Product, CatalogError> {
        let response = self
            .http
            .put(self.url(&format!("/{id}")))
            .json(update)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }

        read_json(response).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<DeletedProduct, CatalogError> {
        let response = self.http.delete(self.url(&format!("/{id}"))).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }

        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();

        error!(%status, "catalog returned unexpected status");

        return Err(CatalogError::UnexpectedStatus { status, body });
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() -> TestResult {
        let client = HttpCatalogClient::new(CatalogConfig {
            base_url: "https://catalog.example/products/".to_string(),
            ..CatalogConfig::default()
        })?;

        assert_eq!(client.url("/search"), "https://catalog.example/products/search");

        Ok(())
    }

    #[test]
    fn category_slug_is_percent_encoded() -> TestResult {
        let client = HttpCatalogClient::new(CatalogConfig {
            base_url: "https://catalog.example/products/".to_string(),
            ..CatalogConfig::default()
        })?;

        let url = client.segments_url(&["category", "home decoration/x?y"])?;

        assert_eq!(
            url.as_str(),
            "https://catalog.example/products/category/home%20decoration%2Fx%3Fy"
        );

        Ok(())
    }

    #[test]
    fn rejects_relative_url() {
        let result = HttpCatalogClient::new(CatalogConfig {
            base_url: "products".to_string(),
            ..CatalogConfig::default()
        });

        assert!(matches!(result, Err(CatalogError::InvalidUrl(_))));
    }

    #[test]
    fn default_config_points_at_dummyjson() {
        let config = CatalogConfig::default();

        assert_eq!(config.base_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
