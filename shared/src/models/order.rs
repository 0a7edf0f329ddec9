//! Order Model
//!
//! Orders advance monotonically through a fixed status sequence:
//! `new < preparing < ready < delivered < paid`. The server is authoritative
//! for an order's `total`; clients must replace local order state with the
//! server-returned object after any mutation rather than recomputing.

use serde::{Deserialize, Serialize};

/// Order status, a fixed linear progression
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    New,
    Preparing,
    Ready,
    Delivered,
    Paid,
}

impl OrderStatus {
    /// Full progression, in order
    pub const SEQUENCE: [OrderStatus; 5] = [
        OrderStatus::New,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Paid,
    ];

    /// Successor in the fixed sequence, `None` once terminal
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            Self::New => Some(Self::Preparing),
            Self::Preparing => Some(Self::Ready),
            Self::Ready => Some(Self::Delivered),
            Self::Delivered => Some(Self::Paid),
            Self::Paid => None,
        }
    }

    /// Whether the order has reached the end of the sequence
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Paid)
    }

    /// Wire/route segment form (e.g. `/orders/status/preparing`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
            Self::Paid => "paid",
        }
    }

    /// Parse a wire string, rejecting anything outside the known set
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(Self::New),
            "preparing" => Some(Self::Preparing),
            "ready" => Some(Self::Ready),
            "delivered" => Some(Self::Delivered),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order line item, denormalized at order time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub id: String,
    /// Product reference
    pub product_id: String,
    /// Product name snapshot
    pub name: String,
    pub quantity: i32,
    /// Unit price in cents at order time
    pub unit_price: i64,
}

impl OrderItem {
    /// Line total in cents
    pub fn line_total(&self) -> i64 {
        self.unit_price * i64::from(self.quantity)
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    /// Table reference
    pub table_id: String,
    /// Guest display name (guest flow only)
    pub guest_name: Option<String>,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    /// Order total in cents, as computed by the server
    pub total: i64,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,
}

impl Order {
    /// Sum of line totals. The server's `total` field is authoritative;
    /// this exists for invariant checks and display fallbacks only.
    pub fn items_total(&self) -> i64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

/// Create order payload line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub product_id: String,
    pub quantity: i32,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table_id: String,
    pub guest_name: Option<String>,
    pub items: Vec<OrderItemCreate>,
}

/// Order status patch payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

/// Order item patch payload (item sub-resource)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemUpdate {
    pub quantity: Option<i32>,
}
