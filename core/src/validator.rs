//! Purchase validation and pricing.
//!
//! [`PurchaseValidator::validate`] is a pure function: it looks only at its
//! arguments and its [`PurchaseRules`], and never calls a collaborator.
//!
//! Checks run in this order and the first failure wins:
//!
//! ```text
//! account id >= 1                      else InvalidAccount
//! adults >= 1 when any child/infant    else UnaccompaniedMinor
//! infants <= adults                    else TooManyInfants
//! total >= min_tickets                 else BelowMinimum
//! total <= max_tickets                 else AboveMaximum
//! ```

use crate::error::PurchaseRejection;
use crate::rules::PurchaseRules;
use crate::types::{AccountId, PurchaseRequest, PurchaseSummary, TicketCounts, TicketTypeRequest};

/// Decides whether a purchase is allowed and what it costs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PurchaseValidator {
    rules: PurchaseRules,
}

impl PurchaseValidator {
    /// Creates a validator with the given rules
    #[must_use]
    pub const fn new(rules: PurchaseRules) -> Self {
        Self { rules }
    }

    /// Returns the rules in force
    #[must_use]
    pub const fn rules(&self) -> &PurchaseRules {
        &self.rules
    }

    /// Validates a purchase and computes its summary.
    ///
    /// # Errors
    ///
    /// Returns the first [`PurchaseRejection`] whose rule the purchase breaks.
    pub fn validate(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, PurchaseRejection> {
        let counts = TicketCounts::from_requests(requests);

        tracing::debug!(
            account_id = %account_id,
            adults = counts.adults,
            children = counts.children,
            infants = counts.infants,
            "Validating ticket purchase"
        );

        self.check(account_id, &counts).inspect_err(|rejection| {
            tracing::warn!(
                account_id = %account_id,
                kind = rejection.kind(),
                "Ticket purchase rejected: {rejection}"
            );
        })?;

        Ok(self.summarize(&counts))
    }

    /// Validates a [`PurchaseRequest`]
    ///
    /// # Errors
    ///
    /// See [`PurchaseValidator::validate`].
    pub fn validate_request(
        &self,
        request: &PurchaseRequest,
    ) -> Result<PurchaseSummary, PurchaseRejection> {
        self.validate(request.account_id, &request.tickets)
    }

    fn check(&self, account_id: AccountId, counts: &TicketCounts) -> Result<(), PurchaseRejection> {
        if !account_id.is_valid() {
            return Err(PurchaseRejection::InvalidAccount {
                account_id: account_id.value(),
            });
        }

        if counts.adults < 1 && (counts.children > 0 || counts.infants > 0) {
            return Err(PurchaseRejection::UnaccompaniedMinor);
        }

        if counts.adults < counts.infants {
            return Err(PurchaseRejection::TooManyInfants {
                adults: counts.adults,
                infants: counts.infants,
            });
        }

        let total = counts.total();
        let limits = self.rules.limits;

        if total < u64::from(limits.min_tickets) {
            return Err(PurchaseRejection::BelowMinimum {
                requested: total,
                minimum: limits.min_tickets,
            });
        }

        if total > u64::from(limits.max_tickets) {
            return Err(PurchaseRejection::AboveMaximum {
                requested: total,
                maximum: limits.max_tickets,
            });
        }

        Ok(())
    }

    fn summarize(&self, counts: &TicketCounts) -> PurchaseSummary {
        let total_amount = self.rules.prices.total(counts);
        // Bounded by max_tickets, which is a u32.
        let total_seats = u32::try_from(counts.seated()).unwrap_or(u32::MAX);

        PurchaseSummary::new(total_amount, total_seats)
    }
}
