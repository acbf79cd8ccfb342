//! Favorites

use rustc_hash::FxHashSet;

use crate::{
    listeners::{ListenerKey, Listeners},
    products::{Product, ProductId},
};

/// Saved products, a set keyed by product id that keeps insertion order.
#[derive(Debug, Default)]
pub struct FavoritesStore {
    items: Vec<Product>,
    ids: FxHashSet<ProductId>,
    listeners: Listeners<FavoritesStore>,
}

impl FavoritesStore {
    /// Create an empty favorites set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a product. Returns `false` if it was already saved.
    pub fn add(&mut self, product: Product) -> bool {
        if !self.ids.insert(product.id) {
            return false;
        }

        self.items.push(product);
        self.listeners.notify(self);

        true
    }

    /// Remove a saved product, returning it if present.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        if !self.ids.remove(&id) {
            return None;
        }

        let position = self.items.iter().position(|product| product.id == id)?;
        let removed = self.items.remove(position);

        self.listeners.notify(self);

        Some(removed)
    }

    /// Add the product if absent, remove it otherwise. Returns whether it is
    /// saved afterwards.
    pub fn toggle(&mut self, product: Product) -> bool {
        if self.is_favorite(product.id) {
            self.remove(product.id);
            false
        } else {
            self.add(product)
        }
    }

    /// Remove every saved product.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }

        self.items.clear();
        self.ids.clear();
        self.listeners.notify(self);
    }

    /// Whether the product is saved.
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Saved products in the order they were added.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of saved products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Register a listener called after every change.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&FavoritesStore) + Send + Sync + 'static,
    ) -> ListenerKey {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        self.listeners.unsubscribe(key)
    }
}
