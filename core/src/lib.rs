//! # Cinema Tickets Core
//!
//! Ticket purchase validation, pricing and seat allocation for cinema bookings.
//!
//! A purchase is an account id plus a list of [`TicketTypeRequest`]s. The
//! [`PurchaseValidator`] aggregates the requests per category, checks the
//! purchase rules, and computes a [`PurchaseSummary`]. The
//! [`CinemaTicketService`] then charges the account and reserves seats through
//! the collaborators injected in its [`PurchaseEnvironment`].
//!
//! ## Rules
//!
//! - Account ids must be positive
//! - Child and infant tickets need at least one adult ticket
//! - Each infant sits on an adult's lap, so infants never outnumber adults
//! - Between 1 and 20 tickets per purchase
//!
//! Adults pay 20, children 10, infants nothing. Infants do not get a seat.
//!
//! ## Architecture
//!
//! ```text
//!  purchase_tickets(account, requests)
//!            │
//!            ▼
//!  ┌───────────────────┐   rejection   ┌──────────────────┐
//!  │ PurchaseValidator │──────────────►│ PurchaseError     │
//!  └─────────┬─────────┘               └──────────────────┘
//!            │ summary
//!            ▼
//!  PaymentCollector::charge ──► SeatAllocator::reserve
//! ```
//!
//! ## Example
//!
//! ```
//! use cinema_tickets_core::{
//!     gateways::console_environment, AccountId, CinemaTicketService, Money, TicketService,
//!     TicketTypeRequest,
//! };
//!
//! let service = CinemaTicketService::new(console_environment());
//! let summary = service
//!     .purchase_tickets(
//!         AccountId::new(1),
//!         &[
//!             TicketTypeRequest::adult(2),
//!             TicketTypeRequest::child(3),
//!             TicketTypeRequest::infant(2),
//!         ],
//!     )
//!     .unwrap();
//!
//! assert_eq!(summary.total_amount, Money::from_units(70));
//! assert_eq!(summary.total_seats, 5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod environment;
pub mod error;
pub mod gateways;
pub mod rules;
pub mod service;
pub mod types;
pub mod validator;

pub use config::Config;
pub use environment::{PaymentCollector, PurchaseEnvironment, SeatAllocator};
pub use error::{CollaboratorError, ConfigError, PurchaseError, PurchaseRejection, Result};
pub use rules::{PurchaseRules, TicketLimits, TicketPrices};
pub use service::{CinemaTicketService, TicketService};
pub use types::*;
pub use validator::PurchaseValidator;
