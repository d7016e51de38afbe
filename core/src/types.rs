//! Domain types for cinema ticket purchases.
//!
//! Value objects only: ticket categories, requests, identifiers, money and the
//! purchase summary produced by a successful validation. None of these types
//! outlive a single purchase.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of the account paying for a purchase.
///
/// Any `i64` can be represented, but only ids `>= 1` are accepted by the
/// validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an `AccountId` from a raw integer
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Checks whether the id is a positive integer
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0 >= 1
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money Value Object (whole currency units)
// ============================================================================

/// An amount of money in whole currency units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Zero currency units
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from whole units
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// Returns the amount in whole units
    #[must_use]
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a ticket count, saturating at `u64::MAX`
    #[must_use]
    pub const fn saturating_multiply(self, quantity: u64) -> Self {
        Self(self.0.saturating_mul(quantity))
    }

    /// Adds two amounts, saturating at `u64::MAX`
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{}", self.0)
    }
}

// ============================================================================
// Ticket Requests
// ============================================================================

/// Ticket category. Determines unit price, seating and accompaniment rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    /// Adult ticket
    Adult,
    /// Child ticket, requires an accompanying adult
    Child,
    /// Infant ticket, sits on an adult's lap
    Infant,
}

impl TicketType {
    /// All ticket categories in display order
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adult => write!(f, "ADULT"),
            Self::Child => write!(f, "CHILD"),
            Self::Infant => write!(f, "INFANT"),
        }
    }
}

/// A number of tickets of one category.
///
/// Immutable once built. Several requests for the same category may appear in
/// one purchase; their quantities are added together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    quantity: u32,
}

impl TicketTypeRequest {
    /// Creates a request for `quantity` tickets of `ticket_type`
    #[must_use]
    pub const fn new(ticket_type: TicketType, quantity: u32) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }

    /// Shorthand for an adult request
    #[must_use]
    pub const fn adult(quantity: u32) -> Self {
        Self::new(TicketType::Adult, quantity)
    }

    /// Shorthand for a child request
    #[must_use]
    pub const fn child(quantity: u32) -> Self {
        Self::new(TicketType::Child, quantity)
    }

    /// Shorthand for an infant request
    #[must_use]
    pub const fn infant(quantity: u32) -> Self {
        Self::new(TicketType::Infant, quantity)
    }

    /// Returns the ticket category
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Returns the number of tickets requested
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl fmt::Display for TicketTypeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ticket_type, self.quantity)
    }
}

/// An account plus the ticket requests it wants to buy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    /// Paying account
    pub account_id: AccountId,
    /// Requested tickets, in caller order
    pub tickets: Vec<TicketTypeRequest>,
}

impl PurchaseRequest {
    /// Creates a new purchase request
    #[must_use]
    pub fn new(account_id: AccountId, tickets: impl Into<Vec<TicketTypeRequest>>) -> Self {
        Self {
            account_id,
            tickets: tickets.into(),
        }
    }
}

// ============================================================================
// Aggregated Counts
// ============================================================================

/// Per-category ticket totals for one purchase.
///
/// Sums are held as `u64` so that adding any number of `u32` quantities
/// cannot overflow in practice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCounts {
    /// Total adult tickets
    pub adults: u64,
    /// Total child tickets
    pub children: u64,
    /// Total infant tickets
    pub infants: u64,
}

impl TicketCounts {
    /// Sums quantities per category across all requests
    #[must_use]
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut counts, request| {
            let quantity = u64::from(request.quantity());
            match request.ticket_type() {
                TicketType::Adult => counts.adults = counts.adults.saturating_add(quantity),
                TicketType::Child => counts.children = counts.children.saturating_add(quantity),
                TicketType::Infant => counts.infants = counts.infants.saturating_add(quantity),
            }
            counts
        })
    }

    /// Returns the count for a single category
    #[must_use]
    pub const fn of(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Adult => self.adults,
            TicketType::Child => self.children,
            TicketType::Infant => self.infants,
        }
    }

    /// Total tickets across all categories
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.infants)
    }

    /// Tickets that occupy a seat (infants sit on a lap)
    #[must_use]
    pub const fn seated(&self) -> u64 {
        self.adults.saturating_add(self.children)
    }
}

// ============================================================================
// Purchase Outcome
// ============================================================================

/// Result of a purchase that passed every rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSummary {
    /// Amount to charge the account
    pub total_amount: Money,
    /// Seats to reserve for the account
    pub total_seats: u32,
}

impl PurchaseSummary {
    /// Creates a new summary
    #[must_use]
    pub const fn new(total_amount: Money, total_seats: u32) -> Self {
        Self {
            total_amount,
            total_seats,
        }
    }
}

impl fmt::Display for PurchaseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {} seat(s)", self.total_amount, self.total_seats)
    }
}
