//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Order status.
///
/// A closed enumeration. Orders are only written after a confirmed payment,
/// so `Completed` is the only value ever produced; failed or cancelled
/// payment attempts leave no order behind. The enum exists so the column has
/// a typed home if refunds or fulfilment states are ever added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Completed,
}

impl OrderStatus {
    /// Text representation stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(Self::Completed),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Result of a payment attempt as reported by the external widget callback.
///
/// Anything the provider reports other than `"successful"` is treated as
/// not-completed; only a successful report may produce an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentOutcome {
    Successful,
    Failed,
    Cancelled,
}

impl PaymentOutcome {
    /// Parse the provider's free-form status string.
    ///
    /// The widget reports `"successful"` on success and `"cancelled"` when
    /// the customer dismisses it; every other value counts as failed.
    #[must_use]
    pub fn from_provider_status(status: &str) -> Self {
        match status {
            "successful" => Self::Successful,
            "cancelled" => Self::Cancelled,
            _ => Self::Failed,
        }
    }

    /// Whether this outcome may produce an order.
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        matches!(self, Self::Successful)
    }
}
