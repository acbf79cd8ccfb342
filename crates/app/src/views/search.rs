//! Debounced product search.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use tokio::task::JoinHandle;
use tracing::{debug, warn};
use wavecart::{products::Product, search::SearchState};

use crate::{
    catalog::CatalogService,
    notices::{Notice, Notices},
    shared::Shared,
};

/// Default quiet period before a query is sent.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1_000);

#[derive(Debug)]
struct Pending {
    handle: JoinHandle<()>,
    fired: Arc<AtomicBool>,
}

/// Search input that waits for typing to settle before querying the catalog.
///
/// Input arriving inside the quiet period cancels the waiting request.
/// Requests already sent are not cancelled. Their responses are dropped
/// unless they belong to the latest search.
pub struct SearchBox {
    catalog: Arc<dyn CatalogService>,
    notices: Shared<Notices>,
    state: Shared<SearchState>,
    debounce: Duration,
    pending: Vec<Pending>,
}

impl std::fmt::Debug for SearchBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchBox")
            .field("state", &self.state)
            .field("debounce", &self.debounce)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl SearchBox {
    pub fn new(
        catalog: Arc<dyn CatalogService>,
        notices: Shared<Notices>,
        debounce: Duration,
    ) -> Self {
        Self {
            catalog,
            notices,
            state: Shared::default(),
            debounce,
            pending: Vec::new(),
        }
    }

    /// Handle a new value of the search input.
    pub fn input(&mut self, query: &str) {
        self.pending.retain(|pending| {
            if pending.fired.load(Ordering::Acquire) {
                !pending.handle.is_finished()
            } else {
                pending.handle.abort();
                false
            }
        });

        if query.trim().is_empty() {
            self.state.update(|state| {
                state.begin(query);
            });

            return;
        }

        let fired = Arc::new(AtomicBool::new(false));

        let task = SearchTask {
            catalog: Arc::clone(&self.catalog),
            state: self.state.clone(),
            notices: self.notices.clone(),
            query: query.to_string(),
            debounce: self.debounce,
            fired: Arc::clone(&fired),
        };

        let handle = tokio::spawn(task.run());

        self.pending.push(Pending { handle, fired });
    }

    /// Wait for every scheduled and in-flight search to finish.
    pub async fn settle(&mut self) {
        for pending in self.pending.drain(..) {
            if let Err(error) = pending.handle.await
                && !error.is_cancelled()
            {
                warn!(%error, "search task failed");
            }
        }
    }

    pub fn query(&self) -> String {
        self.state.read(|state| state.query().to_string())
    }

    pub fn results(&self) -> Vec<Product> {
        self.state.read(|state| state.results().to_vec())
    }
}

/// One debounced request: wait out the quiet period, then query.
struct SearchTask {
    catalog: Arc<dyn CatalogService>,
    state: Shared<SearchState>,
    notices: Shared<Notices>,
    query: String,
    debounce: Duration,
    fired: Arc<AtomicBool>,
}

impl SearchTask {
    async fn run(self) {
        tokio::time::sleep(self.debounce).await;

        self.fired.store(true, Ordering::Release);

        let query = self.query;
        let Some(ticket) = self.state.update(|state| state.begin(&query)) else {
            return;
        };

        debug!(%query, sequence = ticket.sequence(), "sending search");

        match self.catalog.search_products(&query).await {
            Ok(results) => {
                if !self.state.update(|state| state.apply(ticket, results.products)) {
                    warn!(%query, sequence = ticket.sequence(), "discarding stale search response");
                }
            }
            Err(error) => {
                if self.state.read(|state| state.is_current(ticket)) {
                    self.notices.update(|notices| notices.push(Notice::from(&error)));
                } else {
                    debug!(%error, "stale search failed");
                }
            }
        }
    }
}
