//! Open-data purchase form, as received from an untyped boundary (JSON etc).
//!
//! Unlike [`TicketTypeRequest`], nothing here is guaranteed: the account may
//! be missing, ticket slots may be null, and categories are free text.

use serde::Deserialize;

use boxoffice_core::{AccountId, InvalidPurchase};

use crate::ticket::{TicketType, TicketTypeRequest};

/// One ticket line as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawTicketRequest {
    pub ticket_type: String,
    pub no_of_tickets: i32,
}

/// A purchase as submitted, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PurchaseOrderForm {
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub tickets: Option<Vec<Option<RawTicketRequest>>>,
}

impl PurchaseOrderForm {
    /// Check the form and convert it into typed requests.
    ///
    /// Checks run in the same order as a typed purchase: account, then
    /// emptiness, then each line in turn (null, negative quantity, category).
    pub fn validate(&self) -> Result<(AccountId, Vec<TicketTypeRequest>), InvalidPurchase> {
        let account_id = AccountId::from_optional(self.account_id)?;

        let lines = match self.tickets.as_deref() {
            Some(lines) if !lines.is_empty() => lines,
            _ => return Err(InvalidPurchase::EmptyRequest),
        };

        let requests = lines
            .iter()
            .enumerate()
            .map(|(index, line)| -> Result<TicketTypeRequest, InvalidPurchase> {
                let line = line.as_ref().ok_or(InvalidPurchase::NullRequest { index })?;
                if line.no_of_tickets < 0 {
                    return Err(InvalidPurchase::NegativeQuantity {
                        index,
                        quantity: i64::from(line.no_of_tickets),
                    });
                }
                let ticket_type: TicketType = line.ticket_type.parse()?;
                Ok(TicketTypeRequest::new(ticket_type, line.no_of_tickets))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((account_id, requests))
    }
}
