//! Flutterwave REST API client.

use std::sync::Arc;

use secrecy::ExposeSecret;
use tracing::debug;

use crate::config::FlutterwaveConfig;

use super::PaymentError;
use super::types::{ApiResponse, VerifiedTransaction};

/// Client for the Flutterwave v3 REST API.
///
/// Cheaply cloneable; holds a shared `reqwest::Client`.
#[derive(Clone)]
pub struct FlutterwaveClient {
    inner: Arc<FlutterwaveClientInner>,
}

struct FlutterwaveClientInner {
    client: reqwest::Client,
    base_url: String,
    secret_key: String,
}

impl FlutterwaveClient {
    /// Create a new Flutterwave API client.
    #[must_use]
    pub fn new(config: &FlutterwaveConfig) -> Self {
        Self {
            inner: Arc::new(FlutterwaveClientInner {
                client: reqwest::Client::new(),
                base_url: config.api_base_url.clone(),
                secret_key: config.secret_key.expose_secret().to_owned(),
            }),
        }
    }

    /// Verify a transaction by its provider-side ID.
    ///
    /// Called before recording an order so a forged success callback cannot
    /// produce a record. The returned transaction carries the provider's own
    /// view of the status, amount, and tx_ref.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::Http` if the request fails,
    /// `PaymentError::Provider` if the provider reports an error, and
    /// `PaymentError::NotVerified` if the response carries no transaction.
    pub async fn verify_transaction(
        &self,
        transaction_id: &str,
    ) -> Result<VerifiedTransaction, PaymentError> {
        let url = format!(
            "{}/transactions/{}/verify",
            self.inner.base_url, transaction_id
        );

        debug!(transaction_id, "verifying transaction with provider");

        let response = self
            .inner
            .client
            .get(&url)
            .bearer_auth(&self.inner.secret_key)
            .send()
            .await?;

        let body: ApiResponse<VerifiedTransaction> = response.json().await?;

        if body.status != "success" {
            return Err(PaymentError::Provider(body.message));
        }

        body.data
            .ok_or_else(|| PaymentError::NotVerified("provider returned no transaction".to_owned()))
    }
}
