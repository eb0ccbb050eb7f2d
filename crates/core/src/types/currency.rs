//! Currency codes for payment amounts.
//!
//! Amounts themselves travel as `rust_decimal::Decimal` in the currency's
//! standard unit (₦1500, not kobo), matching what the payment provider
//! expects in its handoff request.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes accepted by the payment provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    NGN,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::NGN => "₦",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// ISO 4217 code as a string.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NGN => "NGN",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

impl core::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ngn() {
        assert_eq!(CurrencyCode::default().code(), "NGN");
        assert_eq!(CurrencyCode::default().symbol(), "₦");
    }

    #[test]
    fn test_display_is_iso_code() {
        assert_eq!(CurrencyCode::NGN.to_string(), "NGN");
        assert_eq!(CurrencyCode::USD.to_string(), "USD");
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_value(CurrencyCode::NGN).unwrap();
        assert_eq!(json, serde_json::json!("NGN"));
    }
}
