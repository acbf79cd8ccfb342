//! Cart

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    listeners::{ListenerKey, Listeners},
    pricing::{discounted_unit_price, line_total, round_cents},
    products::{Product, ProductId},
};

/// Errors returned when a cart mutation is rejected.
///
/// A rejected mutation leaves the cart unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CartError {
    /// A quantity of zero was requested.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// The line is already at its stock ceiling, or the product is out of stock.
    #[error("product {id} has no more stock available ({stock} in stock)")]
    StockExceeded {
        /// Product that was rejected
        id: ProductId,

        /// Stock ceiling for the line
        stock: u32,
    },
}

/// Snapshot of the product fields a cart line needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    /// Product identifier, unique per cart line
    pub id: ProductId,

    /// Product title
    pub title: String,

    /// Unit price before discount
    pub price: Decimal,

    /// Discount percentage, 0-100
    pub discount_percentage: Option<Decimal>,

    /// Units in stock at the time of adding
    pub stock: u32,

    /// Thumbnail image URL
    pub thumbnail: String,
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            discount_percentage: product.discount_percentage,
            stock: product.stock,
            thumbnail: product.thumbnail.clone(),
        }
    }
}

/// A product's line in the cart.
///
/// `1 <= quantity <= stock` holds for every line held by a [`CartStore`], and
/// `total_price` always reflects the current quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    item: CartItem,
    quantity: u32,
    total_price: Decimal,
}

impl CartLineItem {
    fn new(item: CartItem, quantity: u32) -> Self {
        let mut line = Self {
            item,
            quantity,
            total_price: Decimal::ZERO,
        };

        line.set_quantity(quantity);

        line
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.total_price = line_total(self.item.price, self.item.discount_percentage, quantity);
    }

    /// Product identifier
    pub fn id(&self) -> ProductId {
        self.item.id
    }

    /// Product title
    pub fn title(&self) -> &str {
        &self.item.title
    }

    /// Thumbnail image URL
    pub fn thumbnail(&self) -> &str {
        &self.item.thumbnail
    }

    /// Unit price before discount
    pub fn unit_price(&self) -> Decimal {
        self.item.price
    }

    /// Discount percentage, if any
    pub fn discount_percentage(&self) -> Option<Decimal> {
        self.item.discount_percentage
    }

    /// Unit price after discount, rounded to cents
    pub fn discounted_unit_price(&self) -> Decimal {
        round_cents(discounted_unit_price(
            self.item.price,
            self.item.discount_percentage,
        ))
    }

    /// Stock captured when the line was created
    pub fn stock(&self) -> u32 {
        self.item.stock
    }

    /// Units in the cart
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Discounted line total, rounded to cents
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    /// Line total before discount, rounded to cents
    pub fn undiscounted_total(&self) -> Decimal {
        round_cents(self.item.price * Decimal::from(self.quantity))
    }
}

/// Result of a successful [`CartStore::add_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    /// Units the caller asked to add
    pub requested: u32,

    /// Units actually added after clamping to stock
    pub accepted: u32,

    /// Line quantity after the addition
    pub quantity: u32,
}

impl AddOutcome {
    /// Whether fewer units were added than requested.
    pub fn is_clamped(&self) -> bool {
        self.accepted < self.requested
    }
}

/// Shopping cart state.
#[derive(Debug, Default)]
pub struct CartStore {
    items: Vec<CartLineItem>,
    listeners: Listeners<CartStore>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `item`, merging with an existing line.
    ///
    /// The line quantity is clamped to the stock recorded when the line was
    /// first created. A partial addition succeeds and reports the clamp
    /// through [`AddOutcome`].
    ///
    /// # Errors
    ///
    /// - [`CartError::ZeroQuantity`]: `quantity` is zero.
    /// - [`CartError::StockExceeded`]: no unit could be added.
    pub fn add_item(&mut self, item: CartItem, quantity: u32) -> Result<AddOutcome, CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        let outcome = if let Some(line) = self.items.iter_mut().find(|line| line.id() == item.id) {
            let stock = line.stock();
            let new_quantity = line.quantity.saturating_add(quantity).min(stock);

            if new_quantity <= line.quantity {
                return Err(CartError::StockExceeded { id: item.id, stock });
            }

            let accepted = new_quantity - line.quantity;
            line.set_quantity(new_quantity);

            AddOutcome {
                requested: quantity,
                accepted,
                quantity: new_quantity,
            }
        } else {
            let accepted = quantity.min(item.stock);

            if accepted == 0 {
                return Err(CartError::StockExceeded {
                    id: item.id,
                    stock: item.stock,
                });
            }

            self.items.push(CartLineItem::new(item, accepted));

            AddOutcome {
                requested: quantity,
                accepted,
                quantity: accepted,
            }
        };

        self.listeners.notify(self);

        Ok(outcome)
    }

    /// Remove one unit of the given product. A line at quantity 1 is removed.
    ///
    /// Returns `false` when the product is not in the cart.
    pub fn decrease_quantity(&mut self, id: ProductId) -> bool {
        let Some(position) = self.position(id) else {
            return false;
        };

        let remove = match self.items.get_mut(position) {
            Some(line) if line.quantity > 1 => {
                let quantity = line.quantity - 1;
                line.set_quantity(quantity);
                false
            }
            Some(_) => true,
            None => return false,
        };

        if remove {
            self.items.remove(position);
        }

        self.listeners.notify(self);

        true
    }

    /// Remove the product's line entirely, returning it if present.
    pub fn remove_item(&mut self, id: ProductId) -> Option<CartLineItem> {
        let position = self.position(id)?;
        let removed = self.items.remove(position);

        self.listeners.notify(self);

        Some(removed)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }

        self.items.clear();
        self.listeners.notify(self);
    }

    /// Sum of the discounted line totals. Zero for an empty cart.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartLineItem::total_price).sum()
    }

    /// Sum of the line totals before discount.
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartLineItem::undiscounted_total).sum()
    }

    /// Amount saved by discounts.
    pub fn savings(&self) -> Decimal {
        self.subtotal() - self.total()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Look up a product's line.
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|line| line.id() == id)
    }

    /// Titles of all lines, in insertion order.
    pub fn titles(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|line| line.title().to_string())
            .collect()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Register a listener called after every cart change.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&CartStore) + Send + Sync + 'static,
    ) -> ListenerKey {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        self.listeners.unsubscribe(key)
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|line| line.id() == id)
    }
}
