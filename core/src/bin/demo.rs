//! Cinema Tickets Demo
//!
//! Runs a handful of purchases through the ticket service with console
//! collaborators and prints the outcome of each.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin demo
//!
//! # Override rules through the environment
//! TICKET_MAX_PER_PURCHASE=10 RUST_LOG=debug cargo run --bin demo
//! ```

use cinema_tickets_core::gateways::console_environment;
use cinema_tickets_core::{
    AccountId, CinemaTicketService, Config, PurchaseRequest, TicketService, TicketTypeRequest,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    tracing::info!(config = %serde_json::to_string(&config)?, "Configuration loaded");

    let service = CinemaTicketService::with_rules(config.rules()?, console_environment());

    let purchases = [
        PurchaseRequest::new(AccountId::new(1), [TicketTypeRequest::adult(4)]),
        PurchaseRequest::new(
            AccountId::new(1),
            [
                TicketTypeRequest::adult(2),
                TicketTypeRequest::child(3),
                TicketTypeRequest::infant(2),
            ],
        ),
        PurchaseRequest::new(
            AccountId::new(1),
            [TicketTypeRequest::adult(19), TicketTypeRequest::child(2)],
        ),
        PurchaseRequest::new(
            AccountId::new(1),
            [TicketTypeRequest::adult(1), TicketTypeRequest::infant(2)],
        ),
        PurchaseRequest::new(
            AccountId::new(1),
            [TicketTypeRequest::child(1), TicketTypeRequest::infant(1)],
        ),
        PurchaseRequest::new(AccountId::new(0), [TicketTypeRequest::adult(1)]),
        PurchaseRequest::new(AccountId::new(1), [TicketTypeRequest::adult(0)]),
    ];

    println!("=== Cinema Tickets Demo ===\n");

    for request in &purchases {
        let tickets = request
            .tickets
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        match service.purchase_tickets(request.account_id, &request.tickets) {
            Ok(summary) => {
                println!("✓ account {} [{tickets}]: {summary}", request.account_id);
                println!("  {}", serde_json::to_string(&summary)?);
            }
            Err(error) => println!("✗ account {} [{tickets}]: {error}", request.account_id),
        }
    }

    println!("\n=== Demo Complete ===");

    Ok(())
}
