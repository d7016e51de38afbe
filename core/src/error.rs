//! Error types for ticket purchases.

use thiserror::Error;

/// Result type alias for purchase operations.
pub type Result<T> = std::result::Result<T, PurchaseError>;

/// Why a purchase was refused before any money moved.
///
/// Rules are checked in a fixed order and only the first failure is
/// reported, so exactly one variant describes a rejected request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseRejection {
    /// Account id is zero or negative.
    #[error("Account ID is not valid.")]
    InvalidAccount {
        /// The offending account id
        account_id: i64,
    },

    /// Child or infant tickets requested without any adult ticket.
    #[error("Child and Infant tickets cannot be purchased without purchasing an Adult ticket.")]
    UnaccompaniedMinor,

    /// More infants than adults.
    #[error("Infants should sit on an Adult's lap.")]
    TooManyInfants {
        /// Adult tickets requested
        adults: u64,
        /// Infant tickets requested
        infants: u64,
    },

    /// Fewer tickets than the per-purchase minimum.
    #[error("Must purchase a minimum of {minimum} ticket{}.", plural_suffix(.minimum))]
    BelowMinimum {
        /// Tickets requested
        requested: u64,
        /// Smallest allowed purchase
        minimum: u32,
    },

    /// More tickets than the per-purchase maximum.
    #[error("Only a maximum of {maximum} tickets can be purchased at a time.")]
    AboveMaximum {
        /// Tickets requested
        requested: u64,
        /// Largest allowed purchase
        maximum: u32,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)] // thiserror hands fields over by reference
const fn plural_suffix(count: &u32) -> &'static str {
    if *count == 1 { "" } else { "s" }
}

impl PurchaseRejection {
    /// Short machine-readable name, used as a log field
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAccount { .. } => "invalid_account",
            Self::UnaccompaniedMinor => "unaccompanied_minor",
            Self::TooManyInfants { .. } => "too_many_infants",
            Self::BelowMinimum { .. } => "below_minimum",
            Self::AboveMaximum { .. } => "above_maximum",
        }
    }
}

/// Opaque failure reported by a payment or seat reservation service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CollaboratorError {
    message: String,
}

impl CollaboratorError {
    /// Creates an error with the collaborator's message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the collaborator's message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Configured purchase rules that cannot be enforced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A zero minimum would accept an empty purchase.
    #[error("Minimum tickets per purchase must be at least 1, got {min_tickets}")]
    MinimumBelowOne {
        /// Configured minimum
        min_tickets: u32,
    },

    /// No ticket count can satisfy both bounds.
    #[error("Minimum tickets per purchase ({min_tickets}) exceeds the maximum ({max_tickets})")]
    MinimumAboveMaximum {
        /// Configured minimum
        min_tickets: u32,
        /// Configured maximum
        max_tickets: u32,
    },
}

/// Everything that can stop a purchase.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    /// The request broke a purchase rule. No collaborator was called.
    #[error(transparent)]
    Rejected(#[from] PurchaseRejection),

    /// The payment service refused the charge. Seats were not reserved.
    #[error("Payment failed: {0}")]
    Payment(#[source] CollaboratorError),

    /// The seat reservation service failed after payment was taken.
    #[error("Seat reservation failed: {0}")]
    SeatReservation(#[source] CollaboratorError),
}

impl PurchaseError {
    /// Returns the rule violation if this error is a rejection
    #[must_use]
    pub const fn rejection(&self) -> Option<&PurchaseRejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            Self::Payment(_) | Self::SeatReservation(_) => None,
        }
    }
}
