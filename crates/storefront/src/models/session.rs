//! Session-related types.
//!
//! Types stored in the session for authentication and checkout state.

use serde::{Deserialize, Serialize};

use quickbite_core::{AccountId, Email};

/// Session-stored account identity.
///
/// Minimal data stored in the session to identify the signed-in account.
/// Presence of this record means signed in; absence means signed out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAccount {
    /// Account's database ID.
    pub id: AccountId,
    /// Account's display name.
    pub name: String,
    /// Account's email address.
    pub email: Email,
}

/// Session keys for server-side state.
pub mod keys {
    /// Key for storing the signed-in account.
    pub const CURRENT_ACCOUNT: &str = "current_account";

    /// Key for the in-flight checkout flow.
    pub const CHECKOUT_FLOW: &str = "checkout_flow";
}
