//! Search results with stale-response protection
//!
//! Every search request is issued a [`SearchTicket`] carrying a sequence
//! number. A response is applied only if its ticket is still the latest one
//! issued, so a slow response for an old query never overwrites the results of
//! a newer one.

use crate::products::Product;

/// Sequence token for one issued search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

impl SearchTicket {
    /// Sequence number, increasing with every issued request
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Query and results of the search box.
#[derive(Debug, Default)]
pub struct SearchState {
    latest: u64,
    query: String,
    results: Vec<Product>,
}

impl SearchState {
    /// Create an empty search state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search for `query`.
    ///
    /// A blank query clears the results and returns `None`: no request should
    /// be sent. Either way any request already in flight becomes stale.
    pub fn begin(&mut self, query: &str) -> Option<SearchTicket> {
        self.latest += 1;
        self.query = query.trim().to_string();

        if self.query.is_empty() {
            self.results.clear();
            return None;
        }

        Some(SearchTicket(self.latest))
    }

    /// Apply the response for `ticket`. Returns `false`, discarding the
    /// products, when a newer search has been started since.
    pub fn apply(&mut self, ticket: SearchTicket, products: Vec<Product>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.results = products;

        true
    }

    /// Whether `ticket` belongs to the latest search.
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Query of the latest search
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results of the latest applied search
    pub fn results(&self) -> &[Product] {
        &self.results
    }
}
