//! Domain models for the storefront.
//!
//! These types represent validated domain objects separate from database row
//! types and from the JSON shapes at the HTTP boundary.

pub mod account;
pub mod order;
pub mod session;

pub use account::Account;
pub use order::{ItemSnapshot, Order};
pub use session::{CurrentAccount, keys as session_keys};
