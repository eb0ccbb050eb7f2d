//! Order repository for database operations.
//!
//! Orders are append-only: there is no update or delete. Each row carries a
//! denormalized item snapshot so history survives later menu edits.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use quickbite_core::{AccountId, ItemId, OrderId, OrderStatus};

use super::RepositoryError;
use crate::models::{ItemSnapshot, Order};

/// Database row for an order (flat snapshot columns).
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    account_id: AccountId,
    item_id: ItemId,
    item_name: String,
    item_price: Decimal,
    item_image: String,
    transaction_id: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status: OrderStatus = row
            .status
            .parse()
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid status: {e}")))?;

        Ok(Self {
            id: row.id,
            account_id: row.account_id,
            item: ItemSnapshot {
                id: row.item_id,
                name: row.item_name,
                price: row.item_price,
                image: row.item_image,
            },
            transaction_id: row.transaction_id,
            status,
            created_at: row.created_at,
        })
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new order.
    ///
    /// A single insert; there is no partial write to clean up on failure.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails, including
    /// when the owning account does not exist (foreign key violation).
    pub async fn create(
        &self,
        account_id: AccountId,
        item: &ItemSnapshot,
        transaction_id: &str,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO "order" (account_id, item_id, item_name, item_price, item_image,
                                 transaction_id, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, account_id, item_id, item_name, item_price, item_image,
                      transaction_id, status, created_at
            "#,
        )
        .bind(account_id)
        .bind(&item.id)
        .bind(&item.name)
        .bind(item.price)
        .bind(&item.image)
        .bind(transaction_id)
        .bind(status.as_str())
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }

    /// List all orders for an account, newest first.
    ///
    /// An account with no orders yields an empty vec, not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored status is invalid.
    pub async fn list_for_account(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, account_id, item_id, item_name, item_price, item_image,
                   transaction_id, status, created_at
            FROM "order"
            WHERE account_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(account_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Order::try_from).collect()
    }
}
