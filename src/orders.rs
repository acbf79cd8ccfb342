//! Orders

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::listeners::{ListenerKey, Listeners};

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Sequential id, starting at 1
    pub id: u64,

    /// Amount charged
    pub total_amount: Decimal,

    /// Titles of the ordered products
    pub product_titles: Vec<String>,

    /// When the order was placed
    pub timestamp: Timestamp,
}

/// Append-only order history.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
    listeners: Listeners<OrderStore>,
}

impl OrderStore {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order stamped with the current time.
    pub fn add_order(&mut self, total_amount: Decimal, product_titles: Vec<String>) -> Order {
        self.add_order_at(total_amount, product_titles, Timestamp::now())
    }

    /// Append an order with an explicit timestamp.
    pub fn add_order_at(
        &mut self,
        total_amount: Decimal,
        product_titles: Vec<String>,
        timestamp: Timestamp,
    ) -> Order {
        let order = Order {
            id: self.next_id(),
            total_amount,
            product_titles,
            timestamp,
        };

        self.orders.push(order.clone());
        self.listeners.notify(self);

        order
    }

    /// Orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The most recent order.
    pub fn latest(&self) -> Option<&Order> {
        self.orders.last()
    }

    /// Number of orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no order was placed.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Register a listener called after every appended order.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&OrderStore) + Send + Sync + 'static,
    ) -> ListenerKey {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        self.listeners.unsubscribe(key)
    }

    fn next_id(&self) -> u64 {
        self.orders.len() as u64 + 1
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn ids_are_sequential_from_one() {
        let mut orders = OrderStore::new();

        let first = orders.add_order(Decimal::from(10), vec!["A".to_string()]).id;
        let second = orders.add_order(Decimal::from(20), vec!["B".to_string()]).id;

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(orders.len(), 2);
    }

    #[test]
    fn add_order_keeps_given_fields() -> TestResult {
        let mut orders = OrderStore::new();
        let at: Timestamp = "2026-02-21T12:00:00Z".parse()?;

        let order = orders.add_order_at(
            Decimal::new(8750, 2),
            vec!["A".to_string(), "B".to_string()],
            at,
        );

        assert_eq!(
            order,
            Order {
                id: 1,
                total_amount: Decimal::new(8750, 2),
                product_titles: vec!["A".to_string(), "B".to_string()],
                timestamp: at,
            }
        );
        assert_eq!(orders.latest(), Some(&order));

        Ok(())
    }

    #[test]
    fn new_history_is_empty() {
        let orders = OrderStore::new();

        assert!(orders.is_empty());
        assert!(orders.latest().is_none());
    }
}
