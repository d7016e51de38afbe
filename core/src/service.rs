//! Ticket purchasing service.
//!
//! Validates a purchase, then takes payment, then reserves seats. Nothing is
//! charged or reserved unless every rule passes.

use crate::environment::PurchaseEnvironment;
use crate::error::{PurchaseError, Result};
use crate::rules::PurchaseRules;
use crate::types::{AccountId, PurchaseRequest, PurchaseSummary, TicketTypeRequest};
use crate::validator::PurchaseValidator;

/// Buys tickets on behalf of an account.
pub trait TicketService {
    /// Purchase `requests` for `account_id`
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::Rejected`] if the purchase breaks a rule
    /// - [`PurchaseError::Payment`] if the charge fails
    /// - [`PurchaseError::SeatReservation`] if the reservation fails
    fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary>;
}

/// [`TicketService`] backed by a [`PurchaseValidator`] and injected collaborators.
#[derive(Clone, Debug)]
pub struct CinemaTicketService {
    validator: PurchaseValidator,
    env: PurchaseEnvironment,
}

impl CinemaTicketService {
    /// Creates a service with the default rules
    #[must_use]
    pub fn new(env: PurchaseEnvironment) -> Self {
        Self::with_rules(PurchaseRules::default(), env)
    }

    /// Creates a service with custom rules
    #[must_use]
    pub const fn with_rules(rules: PurchaseRules, env: PurchaseEnvironment) -> Self {
        Self {
            validator: PurchaseValidator::new(rules),
            env,
        }
    }

    /// Returns the validator used by this service
    #[must_use]
    pub const fn validator(&self) -> &PurchaseValidator {
        &self.validator
    }

    /// Purchases the tickets in a [`PurchaseRequest`]
    ///
    /// # Errors
    ///
    /// See [`TicketService::purchase_tickets`].
    pub fn purchase(&self, request: &PurchaseRequest) -> Result<PurchaseSummary> {
        self.purchase_tickets(request.account_id, &request.tickets)
    }
}

impl TicketService for CinemaTicketService {
    fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary> {
        let summary = self.validator.validate(account_id, requests)?;

        self.env
            .payments
            .charge(account_id, summary.total_amount)
            .map_err(PurchaseError::Payment)?;

        self.env
            .seats
            .reserve(account_id, summary.total_seats)
            .map_err(PurchaseError::SeatReservation)?;

        tracing::info!(
            account_id = %account_id,
            amount = summary.total_amount.units(),
            seats = summary.total_seats,
            "Ticket purchase completed"
        );

        Ok(summary)
    }
}
