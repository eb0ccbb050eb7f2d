//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use quickbite_core::{AccountId, ItemId, OrderId, OrderStatus};

/// A denormalized copy of the purchased menu item.
///
/// Snapshotted at checkout so historical orders stay stable even if the menu
/// item later changes name, price, or image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    /// Menu item handle at time of purchase.
    pub id: ItemId,
    /// Item name at time of purchase.
    pub name: String,
    /// Unit price at time of purchase, in the currency's standard unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image reference at time of purchase.
    pub image: String,
}

/// An immutable record of one completed purchase (domain type).
///
/// Created only after the external payment widget reports success; there is
/// no pending or failed order state. Append-only: never mutated or deleted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Owning account.
    pub account_id: AccountId,
    /// Denormalized item snapshot.
    pub item: ItemSnapshot,
    /// External payment transaction reference.
    pub transaction_id: String,
    /// Order status; only `Completed` is ever produced.
    pub status: OrderStatus,
    /// When the order was recorded.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_item_snapshot_price_serializes_as_number() {
        let snapshot = ItemSnapshot {
            id: ItemId::from("jollof-rice"),
            name: "Jollof Rice".to_owned(),
            price: Decimal::from(1500),
            image: "https://example.com/jollof.jpg".to_owned(),
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["price"], serde_json::json!(1500.0));
    }

    #[test]
    fn test_item_snapshot_accepts_integer_price() {
        let snapshot: ItemSnapshot = serde_json::from_value(serde_json::json!({
            "id": "beef-burger",
            "name": "Beef Burger",
            "price": 2000,
            "image": "https://example.com/burger.jpg",
        }))
        .unwrap();

        assert_eq!(snapshot.price, Decimal::from(2000));
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order {
            id: OrderId::new(1),
            account_id: AccountId::new(9),
            item: ItemSnapshot {
                id: ItemId::from("chicken-suya"),
                name: "Chicken Suya".to_owned(),
                price: Decimal::from(1800),
                image: String::new(),
            },
            transaction_id: "TX123".to_owned(),
            status: OrderStatus::Completed,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["accountId"], serde_json::json!(9));
        assert_eq!(json["transactionId"], "TX123");
        assert_eq!(json["status"], "completed");
        assert!(json["createdAt"].is_string());
    }
}
