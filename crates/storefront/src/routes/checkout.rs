//! Checkout routes.
//!
//! The server keeps the checkout flow in the session and is the only party
//! that decides whether an order gets written. The payment widget runs on
//! the client, but its success report is cross-checked against the flow's
//! own reference and against the provider before anything is recorded.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;
use tracing::{info, warn};
use uuid::Uuid;

use quickbite_core::{CurrencyCode, ItemId, PaymentOutcome};

use crate::error::{AppError, Result};
use crate::flutterwave::{PaymentError, types::PaymentRequest};
use crate::middleware::RequireAuth;
use crate::models::{ItemSnapshot, session_keys};
use crate::services::{CheckoutFlow, OrderService};
use crate::state::AppState;

/// Request to start a checkout attempt.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartCheckoutRequest {
    pub item_id: ItemId,
}

/// The payment widget's report after the customer interacts with it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackRequest {
    /// Provider status string ("successful", "cancelled", anything else is a failure).
    pub status: String,
    /// Provider transaction ID; present on success.
    pub transaction_id: Option<String>,
    /// The reference this server issued at hand-off.
    pub tx_ref: String,
}

/// Select a menu item and get the payment hand-off parameters.
///
/// POST /checkout/start
///
/// Signed-out callers never reach this handler; `RequireAuth` sends them to
/// sign-in first.
///
/// # Errors
///
/// 404 for an unknown item, 409 if an unexpired attempt is already in
/// flight.
pub async fn start(
    State(state): State<AppState>,
    RequireAuth(account): RequireAuth,
    session: Session,
    Json(body): Json<StartCheckoutRequest>,
) -> Result<Json<PaymentRequest>> {
    let menu_item = crate::menu::find(&body.item_id)
        .ok_or_else(|| AppError::NotFound(format!("menu item {}", body.item_id)))?;

    // Snapshot the item so the order record outlives menu edits
    let item = ItemSnapshot {
        id: menu_item.id.clone(),
        name: menu_item.name.clone(),
        price: menu_item.price,
        image: menu_item.image.clone(),
    };

    let mut flow = load_flow(&session).await?.unwrap_or_else(CheckoutFlow::new);

    let now = Utc::now();
    let timeout = state.config().checkout_timeout();

    flow.select_item(item, now, timeout)?;

    // Reference for this attempt; echoed back by the widget's callback
    let tx_ref = format!("QB-{}", Uuid::new_v4());
    let handed_off = flow.hand_off(tx_ref.clone(), now)?;

    let request = PaymentRequest::assemble(
        &state.config().flutterwave.public_key,
        tx_ref,
        handed_off,
        &account,
        &state.config().flutterwave.logo_url,
    );

    save_flow(&session, &flow).await?;

    info!(account_id = %account.id, item_id = %body.item_id, "checkout handed off");

    Ok(Json(request))
}

/// Resolve the payment widget's report.
///
/// POST /checkout/callback
///
/// Exactly one order is written, and only for a verified success. Failed,
/// cancelled, or expired attempts leave no record.
///
/// # Errors
///
/// 400 for a reference mismatch, 402 if the provider does not confirm the
/// payment, 409 if no payment is in progress, 410 if the attempt expired.
pub async fn callback(
    State(state): State<AppState>,
    RequireAuth(account): RequireAuth,
    session: Session,
    Json(body): Json<CallbackRequest>,
) -> Result<Response> {
    let mut flow = load_flow(&session)
        .await?
        .ok_or_else(|| AppError::BadRequest("no checkout in progress".to_string()))?;

    let now = Utc::now();
    let timeout = state.config().checkout_timeout();

    match PaymentOutcome::from_provider_status(&body.status) {
        PaymentOutcome::Successful => {
            let transaction_id = body
                .transaction_id
                .ok_or_else(|| AppError::BadRequest("transactionId is required".to_string()))?;

            // The widget's word is not enough; ask the provider directly and
            // check the settled charge against what this attempt costs. With
            // nothing pending, skip the provider round-trip and let the
            // state machine below refuse the confirm.
            if let Some(pending) = flow.pending_item() {
                let verified = state.payments().verify_transaction(&transaction_id).await?;
                if !verified.settles(&body.tx_ref, pending.price, CurrencyCode::NGN.code()) {
                    warn!(tx_ref = %body.tx_ref, "provider did not confirm the payment");
                    return Err(AppError::Payment(PaymentError::NotVerified(
                        "provider reports a different status, reference, or amount"
                            .to_string(),
                    )));
                }
            }

            // On expiry the flow moves to Failed; persist that before bailing
            let item = match flow.confirm(&body.tx_ref, &transaction_id, now, timeout) {
                Ok(item) => item,
                Err(e) => {
                    save_flow(&session, &flow).await?;
                    return Err(e.into());
                }
            };

            let orders = OrderService::new(state.pool());
            let order = orders.record(account.id, &item, &transaction_id).await?;

            save_flow(&session, &flow).await?;

            info!(order_id = %order.id, account_id = %account.id, "payment confirmed, order recorded");

            Ok((StatusCode::CREATED, Json(order)).into_response())
        }
        PaymentOutcome::Cancelled => {
            flow.cancel()?;
            save_flow(&session, &flow).await?;

            info!(account_id = %account.id, "payment cancelled by customer");

            Ok(Json(json!({ "status": "cancelled" })).into_response())
        }
        PaymentOutcome::Failed => {
            flow.fail()?;
            save_flow(&session, &flow).await?;

            info!(account_id = %account.id, status = %body.status, "payment failed");

            Ok(Json(json!({ "status": "failed" })).into_response())
        }
    }
}

/// Abandon the in-flight attempt after the widget was dismissed.
///
/// POST /checkout/cancel
///
/// # Errors
///
/// 409 if no payment is in progress.
pub async fn cancel(RequireAuth(account): RequireAuth, session: Session) -> Result<StatusCode> {
    let mut flow = load_flow(&session)
        .await?
        .ok_or_else(|| AppError::BadRequest("no checkout in progress".to_string()))?;

    flow.cancel()?;
    save_flow(&session, &flow).await?;

    info!(account_id = %account.id, "checkout cancelled");

    Ok(StatusCode::NO_CONTENT)
}

async fn load_flow(session: &Session) -> Result<Option<CheckoutFlow>> {
    session
        .get(session_keys::CHECKOUT_FLOW)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))
}

async fn save_flow(session: &Session, flow: &CheckoutFlow) -> Result<()> {
    session
        .insert(session_keys::CHECKOUT_FLOW, flow)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))
}
