//! Property-based testing utilities using proptest.
//!
//! Strategies for ticket categories, requests and request lists, including
//! lists that repeat a category so aggregation gets exercised.

use cinema_tickets_core::{AccountId, TicketType, TicketTypeRequest};
use proptest::prelude::*;

/// Any ticket category
pub fn ticket_type() -> impl Strategy<Value = TicketType> {
    prop_oneof![
        Just(TicketType::Adult),
        Just(TicketType::Child),
        Just(TicketType::Infant),
    ]
}

/// A single request with a quantity in `0..=max_quantity`
pub fn ticket_request(max_quantity: u32) -> impl Strategy<Value = TicketTypeRequest> {
    (ticket_type(), 0..=max_quantity)
        .prop_map(|(ticket_type, quantity)| TicketTypeRequest::new(ticket_type, quantity))
}

/// Up to `max_len` requests, each with a quantity in `0..=max_quantity`
pub fn ticket_requests(
    max_len: usize,
    max_quantity: u32,
) -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    prop::collection::vec(ticket_request(max_quantity), 0..=max_len)
}

/// An account id that passes the account check
pub fn valid_account() -> impl Strategy<Value = AccountId> {
    (1..=i64::MAX).prop_map(AccountId::new)
}

/// An account id that fails the account check
pub fn invalid_account() -> impl Strategy<Value = AccountId> {
    (i64::MIN..=0).prop_map(AccountId::new)
}

/// A request list that satisfies every default rule.
///
/// Built from counts with `adults >= 1`, `infants <= adults` and a total of
/// at most 20. Each category's count is split into two requests, so callers
/// also exercise summing of repeated categories.
pub fn valid_family() -> impl Strategy<Value = (u32, u32, u32, Vec<TicketTypeRequest>)> {
    (1u32..=20)
        .prop_flat_map(|adults| {
            let children_max = 20 - adults;
            (Just(adults), 0..=children_max)
        })
        .prop_flat_map(|(adults, children)| {
            let infants_max = adults.min(20 - adults - children);
            (Just(adults), Just(children), 0..=infants_max)
        })
        .prop_flat_map(|(adults, children, infants)| {
            (
                Just(adults),
                Just(children),
                Just(infants),
                0..=adults,
                0..=children,
                0..=infants,
            )
        })
        .prop_map(|(adults, children, infants, a_split, c_split, i_split)| {
            let requests = vec![
                TicketTypeRequest::adult(a_split),
                TicketTypeRequest::child(c_split),
                TicketTypeRequest::infant(i_split),
                TicketTypeRequest::adult(adults - a_split),
                TicketTypeRequest::child(children - c_split),
                TicketTypeRequest::infant(infants - i_split),
            ];
            (adults, children, infants, requests)
        })
}
