// ============================================================================
// Kiosk Core - Order Entity
// File: crates/kiosk-core/src/domain/order.rs
// Description: Append-only order log entry
// ============================================================================

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kiosk_shared::constants::{STATUS_CANCELED, STATUS_PLACED, STATUS_READY};
use kiosk_shared::new_id;

/// Modifier category -> chosen option. `None` means the customer made no choice.
pub type OrderModifiers = BTreeMap<String, Option<String>>;

/// Status values the dashboard breaks out. Anything else only counts toward totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Placed,
    Ready,
    Canceled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => STATUS_PLACED,
            OrderStatus::Ready => STATUS_READY,
            OrderStatus::Canceled => STATUS_CANCELED,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            STATUS_PLACED => Some(OrderStatus::Placed),
            STATUS_READY => Some(OrderStatus::Ready),
            STATUS_CANCELED => Some(OrderStatus::Canceled),
            _ => None,
        }
    }
}

/// Order entity. `item` is the menu item name stored by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub item: String,
    #[serde(default)]
    pub modifiers: OrderModifiers,
    /// Raw status string exactly as stored, so unknown values survive.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(customer_name: &str, item: &str, status: OrderStatus, created_at: DateTime<Utc>) -> Self {
        Self {
            id: new_id(),
            customer_name: customer_name.to_string(),
            item: item.to_string(),
            modifiers: OrderModifiers::new(),
            status: status.as_str().to_string(),
            created_at,
        }
    }

    pub fn with_modifier(mut self, category: &str, option: Option<&str>) -> Self {
        self.modifiers
            .insert(category.to_string(), option.map(str::to_string));
        self
    }

    pub fn known_status(&self) -> Option<OrderStatus> {
        OrderStatus::from_str(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [OrderStatus::Placed, OrderStatus::Ready, OrderStatus::Canceled] {
            assert_eq!(OrderStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::from_str("Placed"), None);
        assert_eq!(OrderStatus::from_str("refunded"), None);
    }
}
