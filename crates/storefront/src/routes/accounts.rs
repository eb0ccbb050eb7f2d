//! Account creation route.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tracing::info;

use crate::error::{AppError, Result};
use crate::models::Account;
use crate::services::AuthService;
use crate::state::AppState;

/// Request to create an account.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Create an account.
///
/// POST /accounts
///
/// Does not sign the caller in; use `POST /auth/register` for that.
///
/// # Errors
///
/// 400 on missing or invalid fields, 409 on a duplicate email.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<Account>)> {
    let name = body
        .name
        .ok_or_else(|| AppError::BadRequest("name is required".to_string()))?;
    let email = body
        .email
        .ok_or_else(|| AppError::BadRequest("email is required".to_string()))?;
    let password = body
        .password
        .ok_or_else(|| AppError::BadRequest("password is required".to_string()))?;

    let auth = AuthService::new(state.pool());
    let account = auth.register(&name, &email, &password).await?;

    info!(account_id = %account.id, "account created");

    Ok((StatusCode::CREATED, Json(account)))
}
