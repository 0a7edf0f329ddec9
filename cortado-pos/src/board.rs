//! View-layer list state
//!
//! Dashboard views hold plain lists and mutate them only by full-list
//! replacement or by adopting a server-returned object wholesale. Totals
//! and statuses are never recomputed locally; the server's object wins.

use shared::models::{Order, OrderStatus, Product, ProductCategory};

/// Order list backing a dashboard or table view
#[derive(Debug, Clone, Default)]
pub struct OrderBoard {
    orders: Vec<Order>,
}

impl OrderBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Replace the whole list from a fresh fetch
    pub fn replace_all(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    /// Adopt the server's returned order after a mutation (upsert by id)
    pub fn apply_server(&mut self, order: Order) {
        match self.orders.iter_mut().find(|o| o.id == order.id) {
            Some(existing) => *existing = order,
            None => self.orders.push(order),
        }
    }

    /// Drop an order after a delete
    pub fn remove(&mut self, order_id: &str) {
        self.orders.retain(|o| o.id != order_id);
    }

    /// Status tab filter
    pub fn by_status(&self, status: OrderStatus) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(move |o| o.status == status)
    }

    /// Orders belonging to one table
    pub fn for_table(&self, table_id: &str) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(move |o| o.table_id == table_id)
    }
}

/// Category tab filter for the guest menu; `None` is the "all" tab
pub fn filter_by_category(
    products: &[Product],
    category: Option<ProductCategory>,
) -> impl Iterator<Item = &Product> {
    products
        .iter()
        .filter(move |p| category.is_none_or(|c| p.category == c))
}
