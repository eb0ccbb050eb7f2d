//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Registration and password login
//! - `orders` - Order recording and history lookup
//! - `checkout` - Checkout flow state machine

pub mod auth;
pub mod checkout;
pub mod orders;

pub use auth::{AuthError, AuthService};
pub use checkout::{CheckoutError, CheckoutFlow, CheckoutState};
pub use orders::{OrderError, OrderService};
