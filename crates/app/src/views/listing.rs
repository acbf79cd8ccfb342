//! Product listing for the whole catalog or one category.

use wavecart::{
    pagination::{Pagination, PaginationError},
    products::Product,
    sorting::{Sort, SortKey, SortOrder},
};

use crate::catalog::{CatalogError, CatalogService, PageQuery};

/// Slug that selects the whole catalog.
pub const ALL_PRODUCTS_SLUG: &str = "all";

/// Sort applied to every listing until the user picks one.
pub const DEFAULT_SORT: Sort = Sort::new(SortKey::Price, SortOrder::Asc);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSource {
    All,
    Category(String),
}

impl ListingSource {
    pub fn from_slug(slug: &str) -> Self {
        if slug == ALL_PRODUCTS_SLUG {
            Self::All
        } else {
            Self::Category(slug.to_string())
        }
    }
}

/// One page of products with its paging state.
///
/// The whole catalog pages over the upstream total. A category page counts
/// only the products it returned, so its page count never exceeds one full
/// page.
#[derive(Debug)]
pub struct ProductListing {
    source: ListingSource,
    sort: Sort,
    pagination: Pagination,
    products: Vec<Product>,
}

impl ProductListing {
    pub fn new(source: ListingSource, page_size: u32) -> Result<Self, PaginationError> {
        Ok(Self {
            source,
            sort: DEFAULT_SORT,
            pagination: Pagination::new(page_size)?,
            products: Vec::new(),
        })
    }

    pub fn source(&self) -> &ListingSource {
        &self.source
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Change the sort and go back to the first page.
    pub fn set_sort(&mut self, sort: Sort) {
        self.sort = sort;
        self.pagination.first_page();
    }

    /// Fetch the current page.
    ///
    /// On failure the listing is left empty.
    pub async fn load(&mut self, catalog: &dyn CatalogService) -> Result<(), CatalogError> {
        let query = PageQuery::for_page(&self.pagination, Some(self.sort));

        let fetched = match &self.source {
            ListingSource::All => catalog
                .list_products(query)
                .await
                .map(|page| (page.total, page.products)),
            ListingSource::Category(slug) => catalog
                .products_in_category(slug, query)
                .await
                .map(|page| (page.page_total(), page.products)),
        };

        match fetched {
            Ok((total, products)) => {
                self.pagination.set_total(total);
                self.products = products;

                Ok(())
            }
            Err(error) => {
                self.products.clear();

                Err(error)
            }
        }
    }

    /// Move to `page`, clamped to the known page range, and fetch it.
    /// Returns the page landed on.
    pub async fn go_to(
        &mut self,
        catalog: &dyn CatalogService,
        page: u32,
    ) -> Result<u32, CatalogError> {
        let page = self.pagination.go_to(page);

        self.load(catalog).await?;

        Ok(page)
    }
}
