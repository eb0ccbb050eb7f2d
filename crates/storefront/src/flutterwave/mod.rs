//! Flutterwave payment provider integration.
//!
//! The hosted payment widget is an opaque collaborator: the server assembles
//! a handoff request ([`PaymentRequest`]), the widget collects payment
//! details in the customer's browser, and a callback reports the result.
//! [`FlutterwaveClient`] additionally verifies a reported transaction against
//! the provider's REST API before an order is recorded, so a forged callback
//! cannot mint an order.

mod client;
pub mod types;

pub use client::FlutterwaveClient;
pub use types::{
    PaymentCustomer, PaymentCustomizations, PaymentRequest, VerifiedTransaction,
};

use thiserror::Error;

/// Errors that can occur when interacting with the Flutterwave API.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The provider rejected the request.
    #[error("provider error: {0}")]
    Provider(String),

    /// The transaction could not be verified as successful.
    #[error("transaction not verified: {0}")]
    NotVerified(String),
}
