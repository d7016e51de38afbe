//! Collaborator doubles for purchase tests.
//!
//! Recording doubles share one [`CallLog`] so tests can assert on the order
//! of charges and reservations, not only on their arguments.

use cinema_tickets_core::{
    AccountId, CollaboratorError, Money, PaymentCollector, PurchaseEnvironment, SeatAllocator,
};
use std::sync::{Arc, Mutex, PoisonError};

/// One call made to a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    /// `PaymentCollector::charge`
    Charge {
        /// Charged account
        account_id: AccountId,
        /// Charged amount
        amount: Money,
    },
    /// `SeatAllocator::reserve`
    Reserve {
        /// Account the seats are for
        account_id: AccountId,
        /// Number of seats
        seats: u32,
    },
}

impl Call {
    /// Shorthand for an expected charge
    #[must_use]
    pub const fn charge(account_id: i64, amount: u64) -> Self {
        Self::Charge {
            account_id: AccountId::new(account_id),
            amount: Money::from_units(amount),
        }
    }

    /// Shorthand for an expected reservation
    #[must_use]
    pub const fn reserve(account_id: i64, seats: u32) -> Self {
        Self::Reserve {
            account_id: AccountId::new(account_id),
            seats,
        }
    }
}

/// Ordered, shareable record of collaborator calls.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    /// Creates an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a call
    pub fn record(&self, call: Call) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    /// Returns a copy of every call so far, in order
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Checks whether nothing has been called
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

/// Payment collector that records every charge and succeeds.
#[derive(Debug, Clone, Default)]
pub struct RecordingPaymentCollector {
    log: CallLog,
}

impl RecordingPaymentCollector {
    /// Creates a collector writing to `log`
    #[must_use]
    pub const fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl PaymentCollector for RecordingPaymentCollector {
    fn charge(&self, account_id: AccountId, amount: Money) -> Result<(), CollaboratorError> {
        self.log.record(Call::Charge { account_id, amount });
        Ok(())
    }
}

/// Seat allocator that records every reservation and succeeds.
#[derive(Debug, Clone, Default)]
pub struct RecordingSeatAllocator {
    log: CallLog,
}

impl RecordingSeatAllocator {
    /// Creates an allocator writing to `log`
    #[must_use]
    pub const fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl SeatAllocator for RecordingSeatAllocator {
    fn reserve(&self, account_id: AccountId, seats: u32) -> Result<(), CollaboratorError> {
        self.log.record(Call::Reserve { account_id, seats });
        Ok(())
    }
}

/// Payment collector that records the attempt, then fails.
#[derive(Debug, Clone)]
pub struct FailingPaymentCollector {
    log: CallLog,
    message: String,
}

impl FailingPaymentCollector {
    /// Creates a collector that fails with `message`
    #[must_use]
    pub fn new(log: CallLog, message: impl Into<String>) -> Self {
        Self {
            log,
            message: message.into(),
        }
    }
}

impl PaymentCollector for FailingPaymentCollector {
    fn charge(&self, account_id: AccountId, amount: Money) -> Result<(), CollaboratorError> {
        self.log.record(Call::Charge { account_id, amount });
        Err(CollaboratorError::new(self.message.clone()))
    }
}

/// Seat allocator that records the attempt, then fails.
#[derive(Debug, Clone)]
pub struct FailingSeatAllocator {
    log: CallLog,
    message: String,
}

impl FailingSeatAllocator {
    /// Creates an allocator that fails with `message`
    #[must_use]
    pub fn new(log: CallLog, message: impl Into<String>) -> Self {
        Self {
            log,
            message: message.into(),
        }
    }
}

impl SeatAllocator for FailingSeatAllocator {
    fn reserve(&self, account_id: AccountId, seats: u32) -> Result<(), CollaboratorError> {
        self.log.record(Call::Reserve { account_id, seats });
        Err(CollaboratorError::new(self.message.clone()))
    }
}

/// Environment with both recording doubles writing to `log`
#[must_use]
pub fn recording_environment(log: &CallLog) -> PurchaseEnvironment {
    PurchaseEnvironment::new(
        Arc::new(RecordingPaymentCollector::new(log.clone())),
        Arc::new(RecordingSeatAllocator::new(log.clone())),
    )
}
