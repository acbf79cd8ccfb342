//! Categories

use std::fmt;

use crate::{
    listeners::{ListenerKey, Listeners},
    products::Category,
};

/// Category list load status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// No load has been started.
    #[default]
    Idle,

    /// A load is in flight.
    Loading,

    /// The last load succeeded.
    Succeeded,

    /// The last load failed.
    Failed,
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        })
    }
}

/// Proof that a load was started. Only [`CategoryStore::begin_load`] hands
/// these out, and [`CategoryStore::finish_load`] consumes one.
#[derive(Debug)]
#[must_use = "a started load must be finished with `finish_load`"]
pub struct LoadTicket {
    _private: (),
}

/// Fetched categories and their load status.
///
/// Status moves `Idle -> Loading -> Succeeded | Failed` and never goes back,
/// so the list is fetched at most once.
#[derive(Debug, Default)]
pub struct CategoryStore {
    data: Vec<Category>,
    status: LoadStatus,
    error: Option<String>,
    listeners: Listeners<CategoryStore>,
}

impl CategoryStore {
    /// Create an idle, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move from `Idle` to `Loading`.
    ///
    /// Returns `None`, without changing anything, unless the store is idle.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.status != LoadStatus::Idle {
            return None;
        }

        self.status = LoadStatus::Loading;
        self.listeners.notify(self);

        Some(LoadTicket { _private: () })
    }

    /// Record the outcome of a started load.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<Category>, String>) {
        let LoadTicket { _private: () } = ticket;

        match result {
            Ok(categories) => {
                self.data = categories;
                self.error = None;
                self.status = LoadStatus::Succeeded;
            }
            Err(message) => {
                self.error = Some(message);
                self.status = LoadStatus::Failed;
            }
        }

        self.listeners.notify(self);
    }

    /// Current status
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Loaded categories, empty until a load succeeds
    pub fn categories(&self) -> &[Category] {
        &self.data
    }

    /// Error message of a failed load
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Look up a category by slug.
    pub fn get(&self, slug: &str) -> Option<&Category> {
        self.data.iter().find(|category| category.slug == slug)
    }

    /// Register a listener called after every status change.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&CategoryStore) + Send + Sync + 'static,
    ) -> ListenerKey {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        self.listeners.unsubscribe(key)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use testresult::TestResult;

    use super::*;

    fn category(slug: &str) -> Category {
        Category {
            slug: slug.to_string(),
            name: slug.to_uppercase(),
            url: String::new(),
        }
    }

    #[test]
    fn second_begin_is_refused_while_loading() {
        let mut store = CategoryStore::new();

        let first = store.begin_load();
        let second = store.begin_load();

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(store.status(), LoadStatus::Loading);
    }

    #[test]
    fn successful_load_replaces_data() -> TestResult {
        let mut store = CategoryStore::new();

        let ticket = store.begin_load().ok_or("load refused")?;
        store.finish_load(ticket, Ok(vec![category("beauty"), category("laptops")]));

        assert_eq!(store.status(), LoadStatus::Succeeded);
        assert_eq!(store.categories().len(), 2);
        assert_eq!(store.get("laptops").map(|c| c.name.as_str()), Some("LAPTOPS"));
        assert!(store.error().is_none());

        Ok(())
    }

    #[test]
    fn failed_load_records_error_and_stays_failed() -> TestResult {
        let mut store = CategoryStore::new();

        let ticket = store.begin_load().ok_or("load refused")?;
        store.finish_load(ticket, Err("connection reset".to_string()));

        assert_eq!(store.status(), LoadStatus::Failed);
        assert_eq!(store.error(), Some("connection reset"));
        assert!(store.categories().is_empty());
        assert!(store.begin_load().is_none());

        Ok(())
    }

    #[test]
    fn completed_load_does_not_restart() -> TestResult {
        let mut store = CategoryStore::new();

        let ticket = store.begin_load().ok_or("load refused")?;
        store.finish_load(ticket, Ok(vec![category("beauty")]));

        assert!(store.begin_load().is_none());
        assert_eq!(store.status(), LoadStatus::Succeeded);

        Ok(())
    }

    #[test]
    fn listeners_see_each_transition() -> TestResult {
        let mut store = CategoryStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&seen);
        store.subscribe(move |store| {
            if let Ok(mut log) = log.lock() {
                log.push(store.status());
            }
        });

        let ticket = store.begin_load().ok_or("load refused")?;
        store.finish_load(ticket, Ok(Vec::new()));

        let seen = seen.lock().map_err(|e| e.to_string())?;
        assert_eq!(*seen, vec![LoadStatus::Loading, LoadStatus::Succeeded]);

        Ok(())
    }
}
