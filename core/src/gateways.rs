//! Console collaborators for development.
//!
//! These log each call instead of contacting a real payment provider or
//! seating system, and always succeed. Replace them with real integrations in
//! production.

use crate::environment::{PaymentCollector, PurchaseEnvironment, SeatAllocator};
use crate::error::CollaboratorError;
use crate::types::{AccountId, Money};
use std::sync::Arc;
use tracing::info;

/// Payment collector that logs charges.
#[derive(Clone, Debug, Default)]
pub struct ConsolePaymentCollector;

impl ConsolePaymentCollector {
    /// Creates a new console payment collector
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PaymentCollector for ConsolePaymentCollector {
    fn charge(&self, account_id: AccountId, amount: Money) -> Result<(), CollaboratorError> {
        info!(
            account_id = %account_id,
            amount = amount.units(),
            "💳 Payment taken (development mode)"
        );
        Ok(())
    }
}

/// Seat allocator that logs reservations.
#[derive(Clone, Debug, Default)]
pub struct ConsoleSeatAllocator;

impl ConsoleSeatAllocator {
    /// Creates a new console seat allocator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SeatAllocator for ConsoleSeatAllocator {
    fn reserve(&self, account_id: AccountId, seats: u32) -> Result<(), CollaboratorError> {
        info!(
            account_id = %account_id,
            seats,
            "🎟️ Seats reserved (development mode)"
        );
        Ok(())
    }
}

/// Environment wired with both console collaborators
#[must_use]
pub fn console_environment() -> PurchaseEnvironment {
    PurchaseEnvironment::new(
        Arc::new(ConsolePaymentCollector::new()),
        Arc::new(ConsoleSeatAllocator::new()),
    )
}
