//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database ping)
//!
//! # Menu
//! GET  /menu                   - Menu catalogue
//!
//! # Accounts and orders
//! POST /accounts               - Create an account
//! POST /orders                 - Record a completed order
//! GET  /orders?accountId=<id>  - Order history, newest first
//!
//! # Auth (session lifecycle)
//! POST /auth/register          - Register and sign in
//! POST /auth/login             - Sign in with email + password
//! POST /auth/logout            - Sign out (idempotent)
//! GET  /auth/me                - Restore the session identity
//!
//! # Checkout (requires auth)
//! POST /checkout/start         - Select an item, get the payment handoff
//! POST /checkout/callback      - Resolve the payment widget's report
//! POST /checkout/cancel        - Widget dismissed, abandon the attempt
//! ```

pub mod accounts;
pub mod auth;
pub mod checkout;
pub mod menu;
pub mod orders;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/start", post(checkout::start))
        .route("/callback", post(checkout::callback))
        .route("/cancel", post(checkout::cancel))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Menu catalogue
        .route("/menu", get(menu::index))
        // Account creation
        .route("/accounts", post(accounts::create))
        // Order recording and history
        .route("/orders", post(orders::create).get(orders::index))
        // Session lifecycle
        .nest("/auth", auth_routes())
        // Payment handoff flow
        .nest("/checkout", checkout_routes())
}
