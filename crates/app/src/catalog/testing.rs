//! Catalog fake whose responses are released by the test.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;
use wavecart::products::{Category, Product, ProductId};

use crate::catalog::{
    CatalogError, CatalogService, CategoryProducts, DeletedProduct, NewProduct, PageQuery,
    ProductPage, ProductUpdate, SearchResults,
};

type SearchReply = Result<SearchResults, CatalogError>;

/// Searches wait until the test sends their reply. Category loads never
/// complete. Everything else is `NotFound`.
#[derive(Debug, Default)]
pub(crate) struct GatedCatalog {
    searches: Mutex<HashMap<String, oneshot::Receiver<SearchReply>>>,
}

impl GatedCatalog {
    /// Hold searches for `query` until the returned sender fires.
    pub(crate) fn gate_search(&self, query: &str) -> oneshot::Sender<SearchReply> {
        let (reply, gate) = oneshot::channel();

        self.searches.lock().insert(query.to_string(), gate);

        reply
    }
}

#[async_trait]
impl CatalogService for GatedCatalog {
    async fn list_products(&self, _query: PageQuery) -> Result<ProductPage, CatalogError> {
        Err(CatalogError::NotFound)
    }

    async fn get_product(&self, _id: ProductId) -> Result<Product, CatalogError> {
        Err(CatalogError::NotFound)
    }

    async fn search_products(&self, query: &str) -> Result<SearchResults, CatalogError> {
        let gate = self.searches.lock().remove(query);

        match gate {
            Some(gate) => gate.await.unwrap_or(Err(CatalogError::NotFound)),
            None => Err(CatalogError::NotFound),
        }
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        std::future::pending().await
    }

    async fn list_category_slugs(&self) -> Result<Vec<String>, CatalogError> {
        Err(CatalogError::NotFound)
    }

    async fn products_in_category(
        &self,
        _slug: &str,
        _query: PageQuery,
    ) -> Result<CategoryProducts, CatalogError> {
        Err(CatalogError::NotFound)
    }

    async fn add_product(&self, _product: NewProduct) -> Result<Product, CatalogError> {
        Err(CatalogError::NotFound)
    }

    async fn update_product(
        &self,
        _id: ProductId,
        _update: ProductUpdate,
    ) -> Result<Product, CatalogError> {
        Err(CatalogError::NotFound)
    }

    async fn delete_product(&self, _id: ProductId) -> Result<DeletedProduct, CatalogError> {
        Err(CatalogError::NotFound)
    }
}
