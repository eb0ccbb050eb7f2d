//! Integration tests for QuickBite.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! docker compose up -d postgres
//!
//! # Start the storefront
//! cargo run -p quickbite-storefront
//!
//! # Run integration tests
//! cargo test -p quickbite-integration-tests -- --include-ignored
//! ```
//!
//! The base URL is read from `STOREFRONT_BASE_URL` and defaults to
//! `http://localhost:3000`. Tests register throwaway accounts with
//! UUID-based email addresses, so they can run repeatedly against the
//! same database.
//!
//! # Test Categories
//!
//! - `storefront_accounts` - Registration and login
//! - `storefront_orders` - Order recording and history
