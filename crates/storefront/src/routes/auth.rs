//! Session lifecycle routes.
//!
//! Registration, login, logout, and session restore. The session cookie is
//! the only client-side state; identity lives server-side in the session
//! store.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::info;

use crate::error::{self, AppError, Result};
use crate::middleware::{OptionalAuth, clear_current_account, set_current_account};
use crate::models::{Account, CurrentAccount};
use crate::services::AuthService;
use crate::state::AppState;

/// Request to register a new account.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request to sign in.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register a new account and sign it in.
///
/// POST /auth/register
///
/// # Errors
///
/// 400 on invalid fields, 409 on a duplicate email.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Account>)> {
    let auth = AuthService::new(state.pool());
    let account = auth
        .register(&body.name, &body.email, &body.password)
        .await?;

    sign_in(&session, &account).await?;

    info!(account_id = %account.id, "account registered and signed in");

    Ok((StatusCode::CREATED, Json(account)))
}

/// Sign in with email and password.
///
/// POST /auth/login
///
/// # Errors
///
/// 401 if the credentials don't match. An unknown email and a wrong
/// password produce the same response.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Account>> {
    let auth = AuthService::new(state.pool());
    let account = auth.login(&body.email, &body.password).await?;

    sign_in(&session, &account).await?;

    info!(account_id = %account.id, "signed in");

    Ok(Json(account))
}

/// Sign out.
///
/// POST /auth/logout
///
/// Idempotent: signing out while signed out is a success.
///
/// # Errors
///
/// 500 if the session store fails.
pub async fn logout(session: Session) -> Result<StatusCode> {
    clear_current_account(&session)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    error::clear_sentry_user();

    Ok(StatusCode::NO_CONTENT)
}

/// Restore the session identity.
///
/// GET /auth/me
///
/// # Errors
///
/// 401 if nobody is signed in.
pub async fn me(OptionalAuth(account): OptionalAuth) -> Result<Json<CurrentAccount>> {
    account.map(Json).ok_or_else(|| {
        AppError::Unauthorized("not signed in".to_string())
    })
}

/// Store the account in the session and tag Sentry events with it.
async fn sign_in(session: &Session, account: &Account) -> Result<()> {
    // Rotate the session ID so a pre-auth cookie can't be replayed
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    let current = CurrentAccount {
        id: account.id,
        name: account.name.clone(),
        email: account.email.clone(),
    };
    set_current_account(session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    error::set_sentry_user(&account.id, Some(account.email.as_str()));

    Ok(())
}
