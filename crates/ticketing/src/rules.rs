//! Purchase rule configuration.

use serde::Deserialize;

/// Default cap on tickets (all categories) in a single purchase.
pub const DEFAULT_MAX_TICKETS: u32 = 25;

/// Environment variable overriding [`PurchaseRules::max_tickets_per_purchase`].
pub const MAX_TICKETS_ENV: &str = "BOXOFFICE_MAX_TICKETS";

/// Tunable limits applied when validating a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PurchaseRules {
    /// Counts adult, child and infant tickets alike.
    pub max_tickets_per_purchase: u32,
}

impl Default for PurchaseRules {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: DEFAULT_MAX_TICKETS,
        }
    }
}

impl PurchaseRules {
    /// Load rules from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(MAX_TICKETS_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };

        match raw.trim().parse::<u32>() {
            Ok(max) if max > 0 => Self {
                max_tickets_per_purchase: max,
            },
            _ => {
                tracing::warn!(
                    "{MAX_TICKETS_ENV}={raw:?} is not a positive integer; using default of {DEFAULT_MAX_TICKETS}"
                );
                Self::default()
            }
        }
    }
}
