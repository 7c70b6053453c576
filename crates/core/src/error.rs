//! Purchase error model.

use thiserror::Error;

/// Result type used by purchase operations.
pub type PurchaseResult<T> = Result<T, PurchaseError>;

/// Reason a purchase request was rejected.
///
/// Keep this focused on deterministic business rule failures. The first
/// failing rule is reported; rejections never accumulate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidPurchase {
    /// Account identifier missing, zero or negative.
    #[error("Account ID must be a positive number")]
    InvalidAccount,

    /// No ticket requests were supplied.
    #[error("At least one ticket request is required")]
    EmptyRequest,

    /// A ticket request slot was present but empty.
    #[error("Ticket request cannot be null (request #{index})")]
    NullRequest { index: usize },

    #[error("Number of tickets cannot be negative (request #{index} asked for {quantity})")]
    NegativeQuantity { index: usize, quantity: i64 },

    /// Ticket category outside the known set (open data only).
    #[error("Unknown ticket type: {0}")]
    UnknownCategory(String),

    #[error("Cannot purchase more than {max} tickets at a time (requested {requested})")]
    TooManyTickets { requested: u64, max: u32 },

    /// Child or infant tickets without an accompanying adult.
    #[error("Child or Infant tickets require at least one Adult ticket")]
    NoAdultPresent,

    /// Every infant sits on an adult's lap.
    #[error("Number of Infant tickets ({infants}) cannot exceed Adult tickets ({adults})")]
    TooManyInfants { infants: u64, adults: u64 },
}

impl InvalidPurchase {
    /// Stable machine-readable code for the rejection.
    pub fn kind(&self) -> &'static str {
        match self {
            InvalidPurchase::InvalidAccount => "invalid_account",
            InvalidPurchase::EmptyRequest => "empty_request",
            InvalidPurchase::NullRequest { .. } => "null_request",
            InvalidPurchase::NegativeQuantity { .. } => "negative_quantity",
            InvalidPurchase::UnknownCategory(_) => "unknown_category",
            InvalidPurchase::TooManyTickets { .. } => "too_many_tickets",
            InvalidPurchase::NoAdultPresent => "no_adult_present",
            InvalidPurchase::TooManyInfants { .. } => "too_many_infants",
        }
    }

    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::UnknownCategory(name.into())
    }
}

/// Failure of a purchase call.
///
/// Validation failures happen before any collaborator is contacted. Payment
/// and reservation failures are passed through as-is; a reservation failure
/// does not undo a payment that already went through.
#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error("invalid purchase: {0}")]
    Invalid(#[from] InvalidPurchase),

    #[error("payment failed: {0}")]
    Payment(#[source] anyhow::Error),

    #[error("seat reservation failed: {0}")]
    Reservation(#[source] anyhow::Error),
}

impl PurchaseError {
    pub fn payment(err: impl Into<anyhow::Error>) -> Self {
        Self::Payment(err.into())
    }

    pub fn reservation(err: impl Into<anyhow::Error>) -> Self {
        Self::Reservation(err.into())
    }

    /// True when the request was rejected before any collaborator was called.
    pub fn is_validation(&self) -> bool {
        matches!(self, PurchaseError::Invalid(_))
    }

    /// The validation rejection, if that is what this error is.
    pub fn as_invalid(&self) -> Option<&InvalidPurchase> {
        match self {
            PurchaseError::Invalid(reason) => Some(reason),
            _ => None,
        }
    }
}
