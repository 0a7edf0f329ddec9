//! Order endpoints
//!
//! Every mutation returns the server's order object; callers replace local
//! state with it rather than recomputing totals client-side.

use crate::{ApiClient, ClientResult};
use shared::models::{
    Order, OrderCreate, OrderItem, OrderItemCreate, OrderItemUpdate, OrderStatus,
    OrderStatusUpdate,
};

impl ApiClient {
    /// List all orders
    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.get("orders").await
    }

    /// Get a single order
    pub async fn get_order(&self, id: &str) -> ClientResult<Order> {
        self.get(&format!("orders/{}", id)).await
    }

    /// List orders for a table
    pub async fn orders_for_table(&self, table_id: &str) -> ClientResult<Vec<Order>> {
        self.get(&format!("orders/table/{}", table_id)).await
    }

    /// List orders in a given status
    pub async fn orders_by_status(&self, status: OrderStatus) -> ClientResult<Vec<Order>> {
        self.get(&format!("orders/status/{}", status.as_str())).await
    }

    /// Submit a new order
    pub async fn create_order(&self, payload: &OrderCreate) -> ClientResult<Order> {
        self.post("orders", payload).await
    }

    /// Advance (or set) an order's status; returns the updated order
    pub async fn set_order_status(&self, id: &str, status: OrderStatus) -> ClientResult<Order> {
        self.patch(
            &format!("orders/{}/status", id),
            &OrderStatusUpdate { status },
        )
        .await
    }

    /// Delete an order
    pub async fn delete_order(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("orders/{}", id)).await
    }

    // ========== Order item sub-resource ==========

    /// Add an item to an existing order; returns the created item
    pub async fn add_order_item(
        &self,
        order_id: &str,
        payload: &OrderItemCreate,
    ) -> ClientResult<OrderItem> {
        self.post(&format!("orders/{}/items", order_id), payload)
            .await
    }

    /// Update an order item; returns the updated item
    pub async fn update_order_item(
        &self,
        order_id: &str,
        item_id: &str,
        payload: &OrderItemUpdate,
    ) -> ClientResult<OrderItem> {
        self.patch(&format!("orders/{}/items/{}", order_id, item_id), payload)
            .await
    }

    /// Remove an item from an order
    pub async fn delete_order_item(&self, order_id: &str, item_id: &str) -> ClientResult<()> {
        self.delete(&format!("orders/{}/items/{}", order_id, item_id))
            .await
    }
}
