//! Product detail with paged reviews.

use wavecart::{
    pagination::{REVIEWS_PER_PAGE, page_count, page_slice},
    products::{Product, ProductId, Review},
};

use crate::catalog::{CatalogError, CatalogService};

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loaded(Box<Product>),
    NotFound,
    Failed(String),
}

#[derive(Debug)]
pub struct ProductDetail {
    state: DetailState,
    review_page: u32,
}

impl ProductDetail {
    /// Fetch product `id`. Failures become the view's state instead of an
    /// error.
    pub async fn load(catalog: &dyn CatalogService, id: ProductId) -> Self {
        let state = match catalog.get_product(id).await {
            Ok(product) => DetailState::Loaded(Box::new(product)),
            Err(CatalogError::NotFound) => DetailState::NotFound,
            Err(error) => DetailState::Failed(error.to_string()),
        };

        Self {
            state,
            review_page: 1,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn product(&self) -> Option<&Product> {
        match &self.state {
            DetailState::Loaded(product) => Some(product.as_ref()),
            DetailState::NotFound | DetailState::Failed(_) => None,
        }
    }

    fn all_reviews(&self) -> &[Review] {
        self.product()
            .map(|product| product.reviews.as_slice())
            .unwrap_or_default()
    }

    pub fn review_page(&self) -> u32 {
        self.review_page
    }

    pub fn review_pages(&self) -> u32 {
        page_count(self.all_reviews().len(), REVIEWS_PER_PAGE)
    }

    /// Reviews on the current page.
    pub fn reviews(&self) -> &[Review] {
        page_slice(self.all_reviews(), self.review_page, REVIEWS_PER_PAGE)
    }

    /// Move to review `page`, clamped to the available pages.
    pub fn go_to_review_page(&mut self, page: u32) -> u32 {
        self.review_page = page.clamp(1, self.review_pages().max(1));
        self.review_page
    }
}
