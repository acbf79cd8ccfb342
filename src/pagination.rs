//! Pagination

use std::num::NonZeroU32;

use thiserror::Error;

/// Products shown per catalog page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Reviews shown per page on a product's detail view.
pub const REVIEWS_PER_PAGE: u32 = 5;

/// Errors raised when configuring pagination.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    /// Page size must be at least 1.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// 1-based page navigation over a result set of known size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    page_size: NonZeroU32,
    total: u64,
}

impl Pagination {
    /// Start on page 1 of an empty result set.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::ZeroPageSize`] when `page_size` is zero.
    pub fn new(page_size: u32) -> Result<Self, PaginationError> {
        let page_size = NonZeroU32::new(page_size).ok_or(PaginationError::ZeroPageSize)?;

        Ok(Self {
            page: 1,
            page_size,
            total: 0,
        })
    }

    /// Current page, starting at 1
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Items per page
    pub fn page_size(&self) -> u32 {
        self.page_size.get()
    }

    /// Total items in the result set
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Record the size of the result set.
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    /// Items to skip to reach the current page.
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size.get())
    }

    /// Number of pages, `ceil(total / page_size)`. Zero for an empty set.
    pub fn total_pages(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.page_size.get()));

        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Move to `page`, clamped to `1..=total_pages`. Returns the new page.
    pub fn go_to(&mut self, page: u32) -> u32 {
        self.page = page.clamp(1, self.total_pages().max(1));
        self.page
    }

    /// Move to the next page, if any.
    pub fn next_page(&mut self) -> u32 {
        self.go_to(self.page.saturating_add(1))
    }

    /// Move to the previous page, if any.
    pub fn previous_page(&mut self) -> u32 {
        self.go_to(self.page.saturating_sub(1))
    }

    /// Move to page 1.
    pub fn first_page(&mut self) -> u32 {
        self.go_to(1)
    }

    /// Move to the last page.
    pub fn last_page(&mut self) -> u32 {
        self.go_to(self.total_pages())
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

/// Number of pages needed for `len` items.
pub fn page_count(len: usize, per_page: u32) -> u32 {
    let per_page = usize::try_from(per_page.max(1)).unwrap_or(usize::MAX);

    u32::try_from(len.div_ceil(per_page)).unwrap_or(u32::MAX)
}

/// The items on 1-based `page`. Out-of-range pages are empty.
pub fn page_slice<T>(items: &[T], page: u32, per_page: u32) -> &[T] {
    let per_page = usize::try_from(per_page).unwrap_or(usize::MAX);
    let start = usize::try_from(page.saturating_sub(1))
        .unwrap_or(usize::MAX)
        .saturating_mul(per_page);

    if page == 0 || start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(per_page).min(items.len());

    items.get(start..end).unwrap_or(&[])
}
