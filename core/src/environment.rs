//! External services a purchase depends on.
//!
//! The core never talks to a payment provider or a seating system directly.
//! Both are injected through [`PurchaseEnvironment`], so tests can swap in
//! recording or failing doubles.

use crate::error::CollaboratorError;
use crate::types::{AccountId, Money};
use std::sync::Arc;

/// Takes payment from an account.
///
/// Implementations either charge the full amount or fail without charging.
pub trait PaymentCollector: Send + Sync {
    /// Charge `amount` to `account_id`
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] if the payment was not taken.
    fn charge(&self, account_id: AccountId, amount: Money) -> Result<(), CollaboratorError>;
}

/// Reserves seats for an account.
pub trait SeatAllocator: Send + Sync {
    /// Reserve `seats` seats for `account_id`
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] if the seats were not reserved.
    fn reserve(&self, account_id: AccountId, seats: u32) -> Result<(), CollaboratorError>;
}

/// Environment dependencies for [`CinemaTicketService`](crate::CinemaTicketService)
#[derive(Clone)]
pub struct PurchaseEnvironment {
    /// Payment service
    pub payments: Arc<dyn PaymentCollector>,
    /// Seat reservation service
    pub seats: Arc<dyn SeatAllocator>,
}

impl PurchaseEnvironment {
    /// Creates a new `PurchaseEnvironment`
    #[must_use]
    pub fn new(payments: Arc<dyn PaymentCollector>, seats: Arc<dyn SeatAllocator>) -> Self {
        Self { payments, seats }
    }
}

impl std::fmt::Debug for PurchaseEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PurchaseEnvironment").finish_non_exhaustive()
    }
}
