//! Order recording and history routes.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::info;

use quickbite_core::AccountId;

use crate::error::{AppError, Result};
use crate::models::{ItemSnapshot, Order};
use crate::services::OrderService;
use crate::state::AppState;

/// Request to record a completed order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub account_id: Option<AccountId>,
    pub item: Option<ItemSnapshot>,
    pub transaction_id: Option<String>,
}

/// Query parameters for listing orders.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersQuery {
    pub account_id: Option<AccountId>,
}

/// Record a completed order.
///
/// POST /orders
///
/// Responds 200 with the stored record. The item payload is a snapshot, not
/// a menu reference, so history stays stable if the menu changes later.
///
/// # Errors
///
/// 400 on a missing account ID, item snapshot, or transaction reference.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<Json<Order>> {
    let account_id = body
        .account_id
        .ok_or_else(|| AppError::BadRequest("accountId is required".to_string()))?;
    let item = body
        .item
        .ok_or_else(|| AppError::BadRequest("item is required".to_string()))?;
    let transaction_id = body
        .transaction_id
        .ok_or_else(|| AppError::BadRequest("transactionId is required".to_string()))?;

    let orders = OrderService::new(state.pool());
    let order = orders.record(account_id, &item, &transaction_id).await?;

    info!(order_id = %order.id, account_id = %account_id, "order recorded");

    Ok(Json(order))
}

/// List orders for an account, most recent first.
///
/// GET /orders?accountId=<id>
///
/// An account with no orders yields an empty list.
///
/// # Errors
///
/// 400 if the account ID is missing.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<Vec<Order>>> {
    let account_id = query
        .account_id
        .ok_or_else(|| AppError::BadRequest("accountId is required".to_string()))?;

    let orders = OrderService::new(state.pool());
    let history = orders.history(account_id).await?;

    Ok(Json(history))
}
