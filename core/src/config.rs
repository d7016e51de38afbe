//! Configuration management for the ticket service.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::error::ConfigError;
use crate::rules::{PurchaseRules, TicketLimits, TicketPrices};
use crate::types::Money;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Ticket pricing
    pub pricing: PricingConfig,
    /// Ticket count limits
    pub limits: LimitsConfig,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Unit prices in whole currency units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Adult ticket price
    pub adult: u64,
    /// Child ticket price
    pub child: u64,
    /// Infant ticket price
    pub infant: u64,
}

/// Tickets allowed per purchase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Minimum tickets per purchase
    pub min_tickets: u32,
    /// Maximum tickets per purchase
    pub max_tickets: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pricing: PricingConfig {
                adult: 20,
                child: 10,
                infant: 0,
            },
            limits: LimitsConfig {
                min_tickets: 1,
                max_tickets: 20,
            },
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            pricing: PricingConfig {
                adult: lookup("TICKET_PRICE_ADULT")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.pricing.adult),
                child: lookup("TICKET_PRICE_CHILD")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.pricing.child),
                infant: lookup("TICKET_PRICE_INFANT")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.pricing.infant),
            },
            limits: LimitsConfig {
                min_tickets: lookup("TICKET_MIN_PER_PURCHASE")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.limits.min_tickets),
                max_tickets: lookup("TICKET_MAX_PER_PURCHASE")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.limits.max_tickets),
            },
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }

    /// Builds the purchase rules described by this configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the limits cannot be satisfied by any purchase.
    pub fn rules(&self) -> Result<PurchaseRules, ConfigError> {
        let limits = TicketLimits {
            min_tickets: self.limits.min_tickets,
            max_tickets: self.limits.max_tickets,
        };
        limits.validate()?;

        let prices = TicketPrices {
            adult: Money::from_units(self.pricing.adult),
            child: Money::from_units(self.pricing.child),
            infant: Money::from_units(self.pricing.infant),
        };

        Ok(PurchaseRules::new(prices, limits))
    }
}
