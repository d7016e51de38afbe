//! End-to-end purchase scenarios.
//!
//! Each test runs a purchase through `CinemaTicketService` with recording
//! collaborators and checks both the outcome and the calls made.
//!
//! Run with: `cargo test --test purchase_scenarios_test`

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use cinema_tickets_core::{
    CollaboratorError, Money, PurchaseError, PurchaseRejection, PurchaseRules, PurchaseSummary,
    TicketLimits, TicketPrices, TicketTypeRequest,
};
use cinema_tickets_testing::{assertions, init_test_tracing, Call, PurchaseTest};

#[test]
fn test_adult_only_purchase() {
    init_test_tracing();

    PurchaseTest::new()
        .given_account(1)
        .when_purchasing([TicketTypeRequest::adult(4)])
        .then_summary(|summary| {
            assert_eq!(*summary, PurchaseSummary::new(Money::from_units(80), 4));
        })
        .then_calls(|calls| assertions::assert_charged_then_reserved(calls, 1, 80, 4))
        .run();
}

#[test]
fn test_family_purchase() {
    PurchaseTest::new()
        .given_account(1)
        .when_purchasing([
            TicketTypeRequest::adult(2),
            TicketTypeRequest::child(3),
            TicketTypeRequest::infant(2),
        ])
        .then_summary(|summary| {
            assert_eq!(summary.total_amount, Money::from_units(70));
            assert_eq!(summary.total_seats, 5);
        })
        .then_calls(|calls| assertions::assert_charged_then_reserved(calls, 1, 70, 5))
        .run();
}

#[test]
fn test_larger_family_purchase() {
    PurchaseTest::new()
        .given_account(1)
        .when_purchasing([
            TicketTypeRequest::adult(4),
            TicketTypeRequest::child(3),
            TicketTypeRequest::infant(2),
        ])
        .then_calls(|calls| assertions::assert_charged_then_reserved(calls, 1, 110, 7))
        .run();
}

#[test]
fn test_above_maximum() {
    PurchaseTest::new()
        .given_account(1)
        .when_purchasing([TicketTypeRequest::adult(19), TicketTypeRequest::child(2)])
        .then_rejected(|rejection| {
            assert_eq!(
                *rejection,
                PurchaseRejection::AboveMaximum {
                    requested: 21,
                    maximum: 20
                }
            );
            assert_eq!(
                rejection.to_string(),
                "Only a maximum of 20 tickets can be purchased at a time."
            );
        })
        .then_calls(assertions::assert_no_calls)
        .run();
}

#[test]
fn test_exactly_twenty_tickets() {
    PurchaseTest::new()
        .given_account(1)
        .when_purchasing([
            TicketTypeRequest::adult(10),
            TicketTypeRequest::child(5),
            TicketTypeRequest::infant(5),
        ])
        .then_summary(|summary| {
            assert_eq!(summary.total_amount, Money::from_units(250));
            assert_eq!(summary.total_seats, 15);
        })
        .run();
}

#[test]
fn test_too_many_infants() {
    PurchaseTest::new()
        .given_account(1)
        .when_purchasing([TicketTypeRequest::adult(1), TicketTypeRequest::infant(2)])
        .then_rejected(|rejection| {
            assert_eq!(rejection.to_string(), "Infants should sit on an Adult's lap.");
        })
        .then_calls(assertions::assert_no_calls)
        .run();
}

#[test]
fn test_invalid_account() {
    PurchaseTest::new()
        .given_account(0)
        .when_purchasing([TicketTypeRequest::adult(1)])
        .then_rejected(|rejection| {
            assert_eq!(*rejection, PurchaseRejection::InvalidAccount { account_id: 0 });
            assert_eq!(rejection.to_string(), "Account ID is not valid.");
        })
        .then_calls(assertions::assert_no_calls)
        .run();
}

#[test]
fn test_unaccompanied_minors() {
    PurchaseTest::new()
        .given_account(1)
        .when_purchasing([
            TicketTypeRequest::adult(0),
            TicketTypeRequest::child(1),
            TicketTypeRequest::infant(1),
        ])
        .then_rejected(|rejection| {
            assert_eq!(*rejection, PurchaseRejection::UnaccompaniedMinor);
            assert_eq!(
                rejection.to_string(),
                "Child and Infant tickets cannot be purchased without purchasing an Adult ticket."
            );
        })
        .then_calls(assertions::assert_no_calls)
        .run();
}

#[test]
fn test_zero_tickets() {
    PurchaseTest::new()
        .given_account(1)
        .when_purchasing([TicketTypeRequest::adult(0)])
        .then_rejected(|rejection| {
            assert_eq!(rejection.to_string(), "Must purchase a minimum of 1 ticket.");
        })
        .then_calls(assertions::assert_no_calls)
        .run();
}

#[test]
fn test_no_requests() {
    PurchaseTest::new()
        .given_account(1)
        .when_purchasing(Vec::new())
        .then_rejected(|rejection| {
            assert!(matches!(rejection, PurchaseRejection::BelowMinimum { requested: 0, .. }));
        })
        .then_calls(assertions::assert_no_calls)
        .run();
}

#[test]
fn test_payment_failure_stops_reservation() {
    PurchaseTest::new()
        .with_failing_payment("card declined")
        .given_account(9)
        .when_purchasing([TicketTypeRequest::adult(1), TicketTypeRequest::child(1)])
        .then_outcome(|outcome| {
            assert_eq!(
                outcome,
                &Err(PurchaseError::Payment(CollaboratorError::new("card declined")))
            );
        })
        .then_calls(|calls| assert_eq!(calls, [Call::charge(9, 30)]))
        .run();
}

#[test]
fn test_reservation_failure_is_reported() {
    PurchaseTest::new()
        .with_failing_reservation("screen full")
        .given_account(3)
        .when_purchasing([TicketTypeRequest::adult(2)])
        .then_outcome(|outcome| {
            let error = outcome.as_ref().unwrap_err();
            assert!(matches!(error, PurchaseError::SeatReservation(_)));
            assert_eq!(error.to_string(), "Seat reservation failed: screen full");
        })
        .then_calls(|calls| assertions::assert_charged_then_reserved(calls, 3, 40, 2))
        .run();
}

#[test]
fn test_custom_rules_keep_check_order() {
    let rules = PurchaseRules::new(
        TicketPrices {
            adult: Money::from_units(15),
            child: Money::from_units(8),
            infant: Money::from_units(2),
        },
        TicketLimits {
            min_tickets: 1,
            max_tickets: 4,
        },
    );

    // Too many infants is reported before the lower maximum.
    PurchaseTest::new()
        .with_rules(rules)
        .given_account(1)
        .when_purchasing([TicketTypeRequest::adult(2), TicketTypeRequest::infant(3)])
        .then_rejected(|rejection| {
            assert!(matches!(rejection, PurchaseRejection::TooManyInfants { .. }));
        })
        .run();

    PurchaseTest::new()
        .with_rules(rules)
        .given_account(1)
        .when_purchasing([TicketTypeRequest::adult(2), TicketTypeRequest::infant(2)])
        .then_summary(|summary| {
            assert_eq!(summary.total_amount, Money::from_units(34));
            assert_eq!(summary.total_seats, 2);
        })
        .run();

    PurchaseTest::new()
        .with_rules(rules)
        .given_account(1)
        .when_purchasing([TicketTypeRequest::adult(5)])
        .then_rejected(|rejection| {
            assert_eq!(
                rejection.to_string(),
                "Only a maximum of 4 tickets can be purchased at a time."
            );
        })
        .run();
}

#[test]
fn test_raised_minimum_is_reported() {
    let rules = PurchaseRules::new(
        TicketPrices::default(),
        TicketLimits {
            min_tickets: 2,
            max_tickets: 20,
        },
    );

    PurchaseTest::new()
        .with_rules(rules)
        .given_account(1)
        .when_purchasing([TicketTypeRequest::adult(1)])
        .then_rejected(|rejection| {
            assert_eq!(rejection.to_string(), "Must purchase a minimum of 2 tickets.");
        })
        .then_calls(assertions::assert_no_calls)
        .run();
}
