//! Ticket purchasing for the box office.
//!
//! Validates ticket requests against the purchase rules, prices them, then
//! hands payment and seat reservation to external services. All business
//! rules live in [`calculator`]; [`service`] only sequences the calls.

pub mod calculator;
pub mod form;
pub mod rules;
pub mod service;
pub mod thirdparty;
pub mod ticket;

pub use calculator::{PurchaseOutcome, calculate_totals};
pub use form::{PurchaseOrderForm, RawTicketRequest};
pub use rules::{DEFAULT_MAX_TICKETS, MAX_TICKETS_ENV, PurchaseRules};
pub use service::{TicketService, TicketServiceImpl};
pub use thirdparty::{SeatReservationService, TicketPaymentService};
pub use ticket::{TicketType, TicketTypeRequest};

pub use boxoffice_core::{AccountId, InvalidPurchase, PurchaseError, PurchaseResult};
