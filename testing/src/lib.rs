//! # Cinema Tickets Testing
//!
//! Testing utilities and helpers for cinema ticket purchases.
//!
//! This crate provides:
//! - Recording and failing doubles for the payment and seat collaborators
//! - A Given-When-Then harness for purchases ([`PurchaseTest`])
//! - proptest strategies for ticket requests
//!
//! ## Example
//!
//! ```
//! use cinema_tickets_core::{Money, TicketTypeRequest};
//! use cinema_tickets_testing::{mocks::Call, PurchaseTest};
//!
//! PurchaseTest::new()
//!     .given_account(1)
//!     .when_purchasing([TicketTypeRequest::adult(4)])
//!     .then_summary(|summary| assert_eq!(summary.total_amount, Money::from_units(80)))
//!     .then_calls(|calls| {
//!         assert_eq!(calls, [Call::charge(1, 80), Call::reserve(1, 4)]);
//!     })
//!     .run();
//! ```

pub mod mocks;
pub mod properties;

pub use mocks::{
    Call, CallLog, FailingPaymentCollector, FailingSeatAllocator, RecordingPaymentCollector,
    RecordingSeatAllocator,
};
pub use purchase_test::{assertions, PurchaseTest};

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinema_tickets_core=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
