use core::str::FromStr;

use serde::{Deserialize, Serialize};

use boxoffice_core::{InvalidPurchase, ValueObject};

/// Ticket category with its fixed unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    /// Free of charge; sits on an adult's lap, so no seat is reserved.
    Infant,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Unit price in whole currency units.
    pub fn price(self) -> u32 {
        match self {
            TicketType::Adult => 25,
            TicketType::Child => 15,
            TicketType::Infant => 0,
        }
    }

    pub fn occupies_seat(self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl core::fmt::Display for TicketType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = InvalidPurchase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        TicketType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| InvalidPurchase::unknown_category(name))
    }
}

/// A request for `no_of_tickets` tickets of one category.
///
/// Negative quantities can be expressed here; they are rejected when the
/// purchase is validated, not at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: i32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, no_of_tickets: i32) -> Self {
        Self {
            ticket_type,
            no_of_tickets,
        }
    }

    pub fn adult(no_of_tickets: i32) -> Self {
        Self::new(TicketType::Adult, no_of_tickets)
    }

    pub fn child(no_of_tickets: i32) -> Self {
        Self::new(TicketType::Child, no_of_tickets)
    }

    pub fn infant(no_of_tickets: i32) -> Self {
        Self::new(TicketType::Infant, no_of_tickets)
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn no_of_tickets(&self) -> i32 {
        self.no_of_tickets
    }
}

impl ValueObject for TicketTypeRequest {}
