//! Status display helpers
//!
//! Pure lookup tables from the closed status enums to display badges. The
//! enums are rejected-at-decode, so the typed lookups are total; only the
//! raw-string helpers can ever see an out-of-set value, and they log it.

use shared::models::{OrderStatus, ProductCategory, TableStatus, UserRole, UserStatus};

/// Visual tone of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Warning,
    Success,
    Danger,
}

/// Display badge for an enumerated value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub tone: Tone,
}

/// Marker badge for wire values outside the known set
pub const UNKNOWN_BADGE: Badge = Badge {
    label: "Unknown",
    tone: Tone::Neutral,
};

/// Badge for an order status
pub fn order_status_badge(status: OrderStatus) -> Badge {
    match status {
        OrderStatus::New => Badge {
            label: "New",
            tone: Tone::Info,
        },
        OrderStatus::Preparing => Badge {
            label: "Preparing",
            tone: Tone::Warning,
        },
        OrderStatus::Ready => Badge {
            label: "Ready",
            tone: Tone::Success,
        },
        OrderStatus::Delivered => Badge {
            label: "Delivered",
            tone: Tone::Neutral,
        },
        OrderStatus::Paid => Badge {
            label: "Paid",
            tone: Tone::Success,
        },
    }
}

/// Badge for a table status
pub fn table_status_badge(status: TableStatus) -> Badge {
    match status {
        TableStatus::Available => Badge {
            label: "Available",
            tone: Tone::Success,
        },
        TableStatus::Occupied => Badge {
            label: "Occupied",
            tone: Tone::Danger,
        },
        TableStatus::Reserved => Badge {
            label: "Reserved",
            tone: Tone::Warning,
        },
    }
}

/// Badge for a user role
pub fn user_role_badge(role: UserRole) -> Badge {
    match role {
        UserRole::Admin => Badge {
            label: "Admin",
            tone: Tone::Danger,
        },
        UserRole::Manager => Badge {
            label: "Manager",
            tone: Tone::Warning,
        },
        UserRole::Staff => Badge {
            label: "Staff",
            tone: Tone::Info,
        },
        UserRole::Customer => Badge {
            label: "Customer",
            tone: Tone::Neutral,
        },
    }
}

/// Badge for a user account status
pub fn user_status_badge(status: UserStatus) -> Badge {
    match status {
        UserStatus::Active => Badge {
            label: "Active",
            tone: Tone::Success,
        },
        UserStatus::Inactive => Badge {
            label: "Inactive",
            tone: Tone::Neutral,
        },
    }
}

/// Tab label for a product category
pub fn category_label(category: ProductCategory) -> &'static str {
    match category {
        ProductCategory::Coffee => "Coffee",
        ProductCategory::Tea => "Tea",
        ProductCategory::Food => "Food",
        ProductCategory::Dessert => "Dessert",
    }
}

/// Badge for a raw order-status wire string
///
/// The decode boundary rejects out-of-set values, so the unknown arm exists
/// only for raw strings that bypassed typed decoding; it is logged so schema
/// drift surfaces instead of silently rendering "Unknown".
pub fn order_status_badge_str(raw: &str) -> Badge {
    match OrderStatus::parse(raw) {
        Some(status) => order_status_badge(status),
        None => {
            tracing::warn!(value = raw, "Unknown order status from server");
            UNKNOWN_BADGE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_order_status_has_a_known_badge() {
        // The unknown marker is unreachable for in-set values
        for status in OrderStatus::SEQUENCE {
            let badge = order_status_badge_str(status.as_str());
            assert_ne!(badge, UNKNOWN_BADGE);
            assert_eq!(badge, order_status_badge(status));
        }
    }

    #[test]
    fn test_out_of_set_string_renders_unknown_marker() {
        assert_eq!(order_status_badge_str("cancelled"), UNKNOWN_BADGE);
    }

    #[test]
    fn test_badge_labels() {
        assert_eq!(order_status_badge(OrderStatus::New).label, "New");
        assert_eq!(order_status_badge(OrderStatus::Paid).tone, Tone::Success);
        assert_eq!(table_status_badge(TableStatus::Occupied).tone, Tone::Danger);
        assert_eq!(user_role_badge(UserRole::Admin).label, "Admin");
        assert_eq!(user_status_badge(UserStatus::Active).tone, Tone::Success);
        assert_eq!(category_label(ProductCategory::Dessert), "Dessert");
    }
}
