//! Flutterwave wire types.
//!
//! Field names follow the provider's snake_case JSON contract, not ours.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use quickbite_core::CurrencyCode;

use crate::models::{CurrentAccount, ItemSnapshot};

/// Transaction parameters handed to the hosted payment widget.
///
/// Matches the inline-checkout configuration object: the browser passes this
/// straight to the widget, so only the public key appears here. The secret
/// key never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Publishable API key.
    pub public_key: String,
    /// Unique reference for this attempt.
    pub tx_ref: String,
    /// Amount in the currency's standard unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Comma-separated payment methods to offer.
    pub payment_options: String,
    /// Customer identity shown in the widget.
    pub customer: PaymentCustomer,
    /// Branding for the widget.
    pub customizations: PaymentCustomizations,
}

/// Customer identity for the payment widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCustomer {
    pub email: String,
    pub phone_number: String,
    pub name: String,
}

/// Widget branding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCustomizations {
    pub title: String,
    pub description: String,
    pub logo: String,
}

/// Payment methods offered by the widget.
const PAYMENT_OPTIONS: &str = "card,ussd,banktransfer";

/// Widget title shown to the customer.
const CHECKOUT_TITLE: &str = "QuickBite Food Order";

impl PaymentRequest {
    /// Assemble the handoff request for one checkout attempt.
    #[must_use]
    pub fn assemble(
        public_key: &str,
        tx_ref: String,
        item: &ItemSnapshot,
        account: &CurrentAccount,
        logo_url: &str,
    ) -> Self {
        Self {
            public_key: public_key.to_owned(),
            tx_ref,
            amount: item.price,
            currency: CurrencyCode::NGN.code().to_owned(),
            payment_options: PAYMENT_OPTIONS.to_owned(),
            customer: PaymentCustomer {
                email: account.email.to_string(),
                // The menu flow never collects a phone number; the widget
                // requires the field to be present.
                phone_number: String::new(),
                name: account.name.clone(),
            },
            customizations: PaymentCustomizations {
                title: CHECKOUT_TITLE.to_owned(),
                description: format!("Payment for {}", item.name),
                logo: logo_url.to_owned(),
            },
        }
    }
}

/// Envelope for Flutterwave REST responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
}

/// A transaction as reported by the verification endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifiedTransaction {
    /// Provider-side transaction ID.
    pub id: i64,
    /// The tx_ref we generated at handoff.
    pub tx_ref: String,
    /// Charged amount.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Provider status (`"successful"` when the charge settled).
    pub status: String,
}

impl VerifiedTransaction {
    /// Whether the provider settled the charge.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        self.status == "successful"
    }

    /// Whether this settled charge actually covers the given attempt.
    ///
    /// Checks status, reference, currency, and that the settled amount is at
    /// least `amount`. A widget config tampered with client-side can produce
    /// a "successful" charge for less than the item's price; that charge
    /// must not settle the attempt.
    #[must_use]
    pub fn settles(&self, tx_ref: &str, amount: Decimal, currency: &str) -> bool {
        self.is_successful()
            && self.tx_ref == tx_ref
            && self.currency == currency
            && self.amount >= amount
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use quickbite_core::{AccountId, Email, ItemId};

    use super::*;

    fn account() -> CurrentAccount {
        CurrentAccount {
            id: AccountId::new(1),
            name: "Ada Obi".to_owned(),
            email: Email::parse("ada@example.com").unwrap(),
        }
    }

    fn item() -> ItemSnapshot {
        ItemSnapshot {
            id: ItemId::from("jollof-rice"),
            name: "Jollof Rice".to_owned(),
            price: Decimal::from(1500),
            image: "https://example.com/jollof.jpg".to_owned(),
        }
    }

    #[test]
    fn test_assemble_handoff_request() {
        let request = PaymentRequest::assemble(
            "FLWPUBK_TEST-xxxx",
            "REF-1".to_owned(),
            &item(),
            &account(),
            "https://example.com/logo.png",
        );

        assert_eq!(request.amount, Decimal::from(1500));
        assert_eq!(request.currency, "NGN");
        assert_eq!(request.customer.email, "ada@example.com");
        assert_eq!(request.customizations.description, "Payment for Jollof Rice");
        assert_eq!(request.payment_options, "card,ussd,banktransfer");
    }

    #[test]
    fn test_handoff_request_wire_shape() {
        let request = PaymentRequest::assemble(
            "FLWPUBK_TEST-xxxx",
            "REF-1".to_owned(),
            &item(),
            &account(),
            "https://example.com/logo.png",
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["public_key"], "FLWPUBK_TEST-xxxx");
        assert_eq!(json["tx_ref"], "REF-1");
        assert_eq!(json["amount"], serde_json::json!(1500.0));
        assert_eq!(json["customer"]["phone_number"], "");
    }

    #[test]
    fn test_verified_transaction_parse() {
        let body = serde_json::json!({
            "status": "success",
            "message": "Transaction fetched successfully",
            "data": {
                "id": 1_234_567,
                "tx_ref": "REF-1",
                "amount": 1500,
                "currency": "NGN",
                "status": "successful",
                "charged_amount": 1500,
            }
        });

        let parsed: ApiResponse<VerifiedTransaction> = serde_json::from_value(body).unwrap();
        let tx = parsed.data.unwrap();
        assert!(tx.is_successful());
        assert_eq!(tx.tx_ref, "REF-1");
        assert_eq!(tx.amount, Decimal::from(1500));
    }

    fn verified(amount: i64, status: &str) -> VerifiedTransaction {
        VerifiedTransaction {
            id: 1_234_567,
            tx_ref: "REF-1".to_owned(),
            amount: Decimal::from(amount),
            currency: "NGN".to_owned(),
            status: status.to_owned(),
        }
    }

    #[test]
    fn test_settles_full_amount() {
        assert!(verified(1500, "successful").settles("REF-1", Decimal::from(1500), "NGN"));
    }

    #[test]
    fn test_underpaid_charge_does_not_settle() {
        // A tampered widget config can charge ₦1 and still report success;
        // the settled amount has to cover the item's price.
        assert!(!verified(1, "successful").settles("REF-1", Decimal::from(1500), "NGN"));
    }

    #[test]
    fn test_wrong_currency_does_not_settle() {
        assert!(!verified(1500, "successful").settles("REF-1", Decimal::from(1500), "USD"));
    }

    #[test]
    fn test_wrong_reference_does_not_settle() {
        assert!(!verified(1500, "successful").settles("REF-2", Decimal::from(1500), "NGN"));
    }

    #[test]
    fn test_unsettled_status_does_not_settle() {
        assert!(!verified(1500, "pending").settles("REF-1", Decimal::from(1500), "NGN"));
    }
}
