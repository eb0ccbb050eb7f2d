//! Order recording service.
//!
//! Writes an order record tied to a completed payment transaction and exposes
//! a lookup by account. Orders are append-only; there is no update or delete.

use sqlx::PgPool;
use thiserror::Error;

use quickbite_core::{AccountId, OrderStatus};

use crate::db::RepositoryError;
use crate::db::orders::OrderRepository;
use crate::models::{ItemSnapshot, Order};

/// Errors that can occur when recording or listing orders.
#[derive(Debug, Error)]
pub enum OrderError {
    /// A required field is missing or blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Order recording service.
pub struct OrderService<'a> {
    orders: OrderRepository<'a>,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            orders: OrderRepository::new(pool),
        }
    }

    /// Record a completed order.
    ///
    /// Called only after the external payment widget confirms success; the
    /// stored status is always `Completed`. Validation failures reject the
    /// request before any write, so the store is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::MissingField` if the transaction reference or
    /// any part of the item snapshot is absent.
    pub async fn record(
        &self,
        account_id: AccountId,
        item: &ItemSnapshot,
        transaction_id: &str,
    ) -> Result<Order, OrderError> {
        if transaction_id.trim().is_empty() {
            return Err(OrderError::MissingField("transactionId"));
        }
        validate_item(item)?;

        let order = self
            .orders
            .create(account_id, item, transaction_id, OrderStatus::Completed)
            .await?;

        Ok(order)
    }

    /// List all orders for an account, most recent first.
    ///
    /// An account with no orders yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` if the database operation fails.
    pub async fn history(&self, account_id: AccountId) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders.list_for_account(account_id).await?;
        Ok(orders)
    }
}

/// Validate the denormalized item snapshot.
fn validate_item(item: &ItemSnapshot) -> Result<(), OrderError> {
    if item.id.is_empty() {
        return Err(OrderError::MissingField("item.id"));
    }
    if item.name.trim().is_empty() {
        return Err(OrderError::MissingField("item.name"));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use quickbite_core::ItemId;

    use super::*;

    fn snapshot() -> ItemSnapshot {
        ItemSnapshot {
            id: ItemId::from("jollof-rice"),
            name: "Jollof Rice".to_owned(),
            price: Decimal::from(1500),
            image: "https://example.com/jollof.jpg".to_owned(),
        }
    }

    #[test]
    fn test_validate_item_ok() {
        assert!(validate_item(&snapshot()).is_ok());
    }

    #[test]
    fn test_validate_item_blank_id() {
        let mut item = snapshot();
        item.id = ItemId::from("");
        assert!(matches!(
            validate_item(&item),
            Err(OrderError::MissingField("item.id"))
        ));
    }

    #[test]
    fn test_validate_item_blank_name() {
        let mut item = snapshot();
        item.name = "  ".to_owned();
        assert!(matches!(
            validate_item(&item),
            Err(OrderError::MissingField("item.name"))
        ));
    }
}
