//! Account domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use quickbite_core::{AccountId, Email};

/// A registered account (domain type).
///
/// Holds public fields only. The credential hash never leaves the repository
/// layer except for password verification, and is never serialized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique account ID.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Email address (unique, used as login key).
    pub email: Email,
    /// When the account was created. Set once, immutable.
    pub created_at: DateTime<Utc>,
}
