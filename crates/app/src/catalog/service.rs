//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use wavecart::products::{Category, Product, ProductId};

use crate::catalog::{
    client::HttpCatalogClient,
    errors::CatalogError,
    models::{
        CategoryProducts, DeletedProduct, NewProduct, PageQuery, ProductPage, ProductUpdate,
        SearchResults,
    },
};

#[async_trait]
impl CatalogService for HttpCatalogClient {
    async fn list_products(&self, query: PageQuery) -> Result<ProductPage, CatalogError> {
        HttpCatalogClient::list_products(self, query).await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        HttpCatalogClient::get_product(self, id).await
    }

    async fn search_products(&self, query: &str) -> Result<SearchResults, CatalogError> {
        HttpCatalogClient::search_products(self, query).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        HttpCatalogClient::list_categories(self).await
    }

    async fn list_category_slugs(&self) -> Result<Vec<String>, CatalogError> {
        HttpCatalogClient::list_category_slugs(self).await
    }

    async fn products_in_category(
        &self,
        slug: &str,
        query: PageQuery,
    ) -> Result<CategoryProducts, CatalogError> {
        HttpCatalogClient::products_in_category(self, slug, query).await
    }

    async fn add_product(&self, product: NewProduct) -> Result<Product, CatalogError> {
        HttpCatalogClient::add_product(self, &product).await
    }

    async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, CatalogError> {
        HttpCatalogClient::update_product(self, id, &update).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<DeletedProduct, CatalogError> {
        HttpCatalogClient::delete_product(self, id).await
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetch one page of the full catalog.
    async fn list_products(&self, query: PageQuery) -> Result<ProductPage, CatalogError>;

    /// Fetch a single product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no product has `id`.
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Full-text product search.
    async fn search_products(&self, query: &str) -> Result<SearchResults, CatalogError>;

    /// Fetch all categories with display names.
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError>;

    /// Fetch bare category slugs.
    async fn list_category_slugs(&self) -> Result<Vec<String>, CatalogError>;

    /// Fetch one page of a category.
    async fn products_in_category(
        &self,
        slug: &str,
        query: PageQuery,
    ) -> Result<CategoryProducts, CatalogError>;

    /// Create a product. The catalog echoes it back without persisting it.
    async fn add_product(&self, product: NewProduct) -> Result<Product, CatalogError>;

    /// Update a product. The catalog echoes it back without persisting it.
    async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, CatalogError>;

    /// Delete a product. The catalog echoes it back without persisting it.
    async fn delete_product(&self, id: ProductId) -> Result<DeletedProduct, CatalogError>;
}
