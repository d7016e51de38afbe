//! Prices and limits applied to every purchase.

use crate::error::ConfigError;
use crate::types::{Money, TicketCounts, TicketType};
use serde::{Deserialize, Serialize};

/// Unit price per ticket category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPrices {
    /// Price of one adult ticket
    pub adult: Money,
    /// Price of one child ticket
    pub child: Money,
    /// Price of one infant ticket
    pub infant: Money,
}

impl TicketPrices {
    /// Returns the unit price for a category
    #[must_use]
    pub const fn price_of(&self, ticket_type: TicketType) -> Money {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }

    /// Total price of the given ticket counts
    #[must_use]
    pub fn total(&self, counts: &TicketCounts) -> Money {
        TicketType::ALL
            .iter()
            .fold(Money::ZERO, |total, &ticket_type| {
                let subtotal = self
                    .price_of(ticket_type)
                    .saturating_multiply(counts.of(ticket_type));
                total.saturating_add(subtotal)
            })
    }
}

impl Default for TicketPrices {
    fn default() -> Self {
        Self {
            adult: Money::from_units(20),
            child: Money::from_units(10),
            infant: Money::ZERO,
        }
    }
}

/// Bounds on the number of tickets in one purchase, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketLimits {
    /// Smallest allowed purchase
    pub min_tickets: u32,
    /// Largest allowed purchase
    pub max_tickets: u32,
}

impl TicketLimits {
    /// Checks that at least one ticket count satisfies both bounds
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the minimum is zero or above the maximum.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.min_tickets < 1 {
            return Err(ConfigError::MinimumBelowOne {
                min_tickets: self.min_tickets,
            });
        }

        if self.min_tickets > self.max_tickets {
            return Err(ConfigError::MinimumAboveMaximum {
                min_tickets: self.min_tickets,
                max_tickets: self.max_tickets,
            });
        }

        Ok(())
    }
}

impl Default for TicketLimits {
    fn default() -> Self {
        Self {
            min_tickets: 1,
            max_tickets: 20,
        }
    }
}

/// Complete rule set used by [`PurchaseValidator`](crate::PurchaseValidator).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRules {
    /// Unit prices
    pub prices: TicketPrices,
    /// Ticket count bounds
    pub limits: TicketLimits,
}

impl PurchaseRules {
    /// Creates a rule set from prices and limits
    #[must_use]
    pub const fn new(prices: TicketPrices, limits: TicketLimits) -> Self {
        Self { prices, limits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TicketTypeRequest;

    #[test]
    fn default_prices() {
        let prices = TicketPrices::default();
        assert_eq!(prices.price_of(TicketType::Adult), Money::from_units(20));
        assert_eq!(prices.price_of(TicketType::Child), Money::from_units(10));
        assert!(prices.price_of(TicketType::Infant).is_zero());
    }

    #[test]
    fn total_ignores_free_infants() {
        let counts = TicketCounts::from_requests(&[
            TicketTypeRequest::adult(2),
            TicketTypeRequest::child(3),
            TicketTypeRequest::infant(2),
        ]);
        assert_eq!(TicketPrices::default().total(&counts), Money::from_units(70));
    }

    #[test]
    fn total_uses_infant_price_when_set() {
        let prices = TicketPrices {
            infant: Money::from_units(5),
            ..TicketPrices::default()
        };
        let counts = TicketCounts::from_requests(&[
            TicketTypeRequest::adult(1),
            TicketTypeRequest::infant(1),
        ]);
        assert_eq!(prices.total(&counts), Money::from_units(25));
    }

    #[test]
    fn default_limits() {
        let rules = PurchaseRules::default();
        assert_eq!(rules.limits.min_tickets, 1);
        assert_eq!(rules.limits.max_tickets, 20);
        assert_eq!(rules.limits.validate(), Ok(()));
    }

    #[test]
    fn limits_need_a_positive_minimum() {
        let limits = TicketLimits {
            min_tickets: 0,
            max_tickets: 20,
        };
        assert_eq!(
            limits.validate(),
            Err(ConfigError::MinimumBelowOne { min_tickets: 0 })
        );
    }

    #[test]
    fn limits_need_minimum_within_maximum() {
        let limits = TicketLimits {
            min_tickets: 5,
            max_tickets: 4,
        };
        assert_eq!(
            limits.validate(),
            Err(ConfigError::MinimumAboveMaximum {
                min_tickets: 5,
                max_tickets: 4
            })
        );

        let single = TicketLimits {
            min_tickets: 3,
            max_tickets: 3,
        };
        assert_eq!(single.validate(), Ok(()));
    }
}
