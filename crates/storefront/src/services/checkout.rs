//! Checkout flow state machine.
//!
//! One checkout attempt per session, stored in session state:
//!
//! ```text
//! Idle -> AwaitingPaymentConfig -> PaymentInProgress -> Completed
//!                                                    -> Cancelled
//!                                                    -> Failed
//! ```
//!
//! Selecting an item while signed out never reaches this module; the route
//! layer refuses the request and redirects to sign-in. An order is written
//! only on the `PaymentInProgress -> Completed` transition, so failed,
//! cancelled, or expired attempts leave no record. An attempt whose widget
//! never calls back does not linger in `PaymentInProgress` forever: it
//! expires after a configurable window, and expired callbacks are refused.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ItemSnapshot;

/// Errors from checkout flow transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The requested transition is not valid from the current state.
    #[error("invalid checkout transition: cannot {event} while {state}")]
    InvalidTransition {
        /// Current state name.
        state: &'static str,
        /// Attempted event.
        event: &'static str,
    },

    /// The callback references a different payment attempt.
    #[error("payment reference does not match the current attempt")]
    ReferenceMismatch,

    /// The payment attempt sat in progress past the configured window.
    #[error("payment attempt expired")]
    Expired,
}

/// State of one checkout attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CheckoutState {
    /// No attempt in flight.
    Idle,
    /// Item selected; transaction parameters not yet assembled.
    AwaitingPaymentConfig {
        /// Snapshot of the selected item.
        item: ItemSnapshot,
    },
    /// Handed off to the external payment widget; waiting for its callback.
    PaymentInProgress {
        /// Snapshot of the selected item.
        item: ItemSnapshot,
        /// Unique reference for this attempt.
        tx_ref: String,
        /// When the handoff happened; used for expiry.
        started_at: DateTime<Utc>,
    },
    /// Widget reported success and the order was recorded.
    Completed {
        /// Provider transaction reference.
        transaction_id: String,
    },
    /// Widget was dismissed by the customer.
    Cancelled,
    /// Widget reported a non-success status, or the attempt expired.
    Failed,
}

impl CheckoutState {
    const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingPaymentConfig { .. } => "awaiting payment config",
            Self::PaymentInProgress { .. } => "payment in progress",
            Self::Completed { .. } => "completed",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        }
    }
}

/// One session's checkout attempt.
///
/// Serialized into the session between requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutFlow {
    state: CheckoutState,
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutFlow {
    /// A fresh flow in `Idle`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: CheckoutState::Idle,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// The item awaiting payment resolution, if a hand-off is outstanding.
    ///
    /// Callers use this to cross-check a success callback against what the
    /// attempt was supposed to cost before resolving it.
    #[must_use]
    pub const fn pending_item(&self) -> Option<&ItemSnapshot> {
        match &self.state {
            CheckoutState::PaymentInProgress { item, .. } => Some(item),
            _ => None,
        }
    }

    /// Select a menu item, starting a new attempt.
    ///
    /// Valid from `Idle` and from any terminal state (a new attempt
    /// supersedes a finished one). Refused while a handoff is unresolved,
    /// unless that attempt has expired.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::InvalidTransition` if an unexpired attempt is
    /// still in progress.
    pub fn select_item(
        &mut self,
        item: ItemSnapshot,
        now: DateTime<Utc>,
        timeout: Duration,
    ) -> Result<(), CheckoutError> {
        match &self.state {
            CheckoutState::PaymentInProgress { started_at, .. }
                if !expired(*started_at, now, timeout) =>
            {
                Err(CheckoutError::InvalidTransition {
                    state: self.state.name(),
                    event: "select an item",
                })
            }
            _ => {
                self.state = CheckoutState::AwaitingPaymentConfig { item };
                Ok(())
            }
        }
    }

    /// Hand the assembled transaction parameters to the payment widget.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::InvalidTransition` unless the flow is in
    /// `AwaitingPaymentConfig`.
    pub fn hand_off(
        &mut self,
        tx_ref: String,
        now: DateTime<Utc>,
    ) -> Result<&ItemSnapshot, CheckoutError> {
        match std::mem::replace(&mut self.state, CheckoutState::Idle) {
            CheckoutState::AwaitingPaymentConfig { item } => {
                self.state = CheckoutState::PaymentInProgress {
                    item,
                    tx_ref,
                    started_at: now,
                };
                let CheckoutState::PaymentInProgress { item, .. } = &self.state else {
                    unreachable!("state was just set");
                };
                Ok(item)
            }
            other => {
                let state = other.name();
                self.state = other;
                Err(CheckoutError::InvalidTransition {
                    state,
                    event: "hand off to the payment widget",
                })
            }
        }
    }

    /// Resolve a success callback from the payment widget.
    ///
    /// Returns the item snapshot so the caller can record exactly one order
    /// with the reported transaction reference.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::InvalidTransition` if no payment is in
    /// progress, `CheckoutError::ReferenceMismatch` if the callback is for a
    /// different attempt (the current attempt is left untouched), and
    /// `CheckoutError::Expired` if the attempt outlived the window (the
    /// attempt moves to `Failed` and no order may be written).
    pub fn confirm(
        &mut self,
        tx_ref: &str,
        transaction_id: &str,
        now: DateTime<Utc>,
        timeout: Duration,
    ) -> Result<ItemSnapshot, CheckoutError> {
        let CheckoutState::PaymentInProgress {
            tx_ref: current_ref,
            started_at,
            ..
        } = &self.state
        else {
            return Err(CheckoutError::InvalidTransition {
                state: self.state.name(),
                event: "confirm a payment",
            });
        };

        if current_ref != tx_ref {
            return Err(CheckoutError::ReferenceMismatch);
        }

        if expired(*started_at, now, timeout) {
            self.state = CheckoutState::Failed;
            return Err(CheckoutError::Expired);
        }

        let CheckoutState::PaymentInProgress { item, .. } = std::mem::replace(
            &mut self.state,
            CheckoutState::Completed {
                transaction_id: transaction_id.to_owned(),
            },
        ) else {
            unreachable!("state was checked above");
        };

        Ok(item)
    }

    /// Resolve a non-success callback. No order is written.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::InvalidTransition` if no payment is in progress.
    pub fn fail(&mut self) -> Result<(), CheckoutError> {
        match &self.state {
            CheckoutState::PaymentInProgress { .. } => {
                self.state = CheckoutState::Failed;
                Ok(())
            }
            other => Err(CheckoutError::InvalidTransition {
                state: other.name(),
                event: "fail a payment",
            }),
        }
    }

    /// The customer dismissed the payment widget. No order is written.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::InvalidTransition` if no payment is in progress.
    pub fn cancel(&mut self) -> Result<(), CheckoutError> {
        match &self.state {
            CheckoutState::PaymentInProgress { .. } => {
                self.state = CheckoutState::Cancelled;
                Ok(())
            }
            other => Err(CheckoutError::InvalidTransition {
                state: other.name(),
                event: "cancel a payment",
            }),
        }
    }
}

fn expired(started_at: DateTime<Utc>, now: DateTime<Utc>, timeout: Duration) -> bool {
    now - started_at > timeout
}
