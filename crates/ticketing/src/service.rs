use tracing::{debug, error, info, instrument, warn};

use boxoffice_core::{AccountId, InvalidPurchase, PurchaseError, PurchaseResult};

use crate::calculator::{PurchaseOutcome, calculate_totals};
use crate::form::PurchaseOrderForm;
use crate::rules::PurchaseRules;
use crate::thirdparty::{SeatReservationService, TicketPaymentService};
use crate::ticket::TicketTypeRequest;

/// Entry point for buying tickets.
pub trait TicketService {
    /// Validate the purchase, take payment, then reserve seats.
    ///
    /// Nothing external is contacted unless every rule passes.
    fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<PurchaseOutcome>;

    /// Same as [`TicketService::purchase_tickets`], starting from an unvalidated form.
    fn purchase_form(&self, form: &PurchaseOrderForm) -> PurchaseResult<PurchaseOutcome> {
        let (account_id, requests) = form.validate().map_err(|reason| {
            warn!(kind = reason.kind(), "purchase form rejected: {reason}");
            PurchaseError::from(reason)
        })?;
        self.purchase_tickets(Some(account_id.get()), &requests)
    }
}

/// [`TicketService`] backed by a payment gateway and a seat booking service.
///
/// Holds no per-purchase state, so one instance can serve concurrent callers
/// as long as the collaborators allow it.
#[derive(Debug, Clone)]
pub struct TicketServiceImpl<P, S> {
    payment_service: P,
    reservation_service: S,
    rules: PurchaseRules,
}

impl<P, S> TicketServiceImpl<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    pub fn new(payment_service: P, reservation_service: S) -> Self {
        Self::with_rules(payment_service, reservation_service, PurchaseRules::default())
    }

    pub fn with_rules(payment_service: P, reservation_service: S, rules: PurchaseRules) -> Self {
        Self {
            payment_service,
            reservation_service,
            rules,
        }
    }

    pub fn rules(&self) -> &PurchaseRules {
        &self.rules
    }

    fn validate(
        &self,
        account_id: Option<i64>,
        requests: &[TicketTypeRequest],
    ) -> Result<(AccountId, PurchaseOutcome), InvalidPurchase> {
        let account_id = AccountId::from_optional(account_id)?;
        if requests.is_empty() {
            return Err(InvalidPurchase::EmptyRequest);
        }
        let outcome = calculate_totals(requests, &self.rules)?;
        Ok((account_id, outcome))
    }
}

impl<P, S> TicketService for TicketServiceImpl<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    #[instrument(skip(self, requests), fields(request_count = requests.len()))]
    fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<PurchaseOutcome> {
        let (account_id, outcome) = self.validate(account_id, requests).map_err(|reason| {
            warn!(kind = reason.kind(), "purchase rejected: {reason}");
            PurchaseError::from(reason)
        })?;

        // No compensation: a failed reservation leaves the payment in place.
        debug!(amount = outcome.total_amount, "requesting payment");
        self.payment_service
            .make_payment(account_id, outcome.total_amount)
            .map_err(|e| {
                error!("payment failed: {e:#}");
                PurchaseError::Payment(e)
            })?;

        debug!(seats = outcome.seats_to_reserve, "reserving seats");
        self.reservation_service
            .reserve_seat(account_id, outcome.seats_to_reserve)
            .map_err(|e| {
                error!("seat reservation failed after payment: {e:#}");
                PurchaseError::Reservation(e)
            })?;

        info!(
            amount = outcome.total_amount,
            seats = outcome.seats_to_reserve,
            tickets = outcome.total_tickets(),
            "purchase completed"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Calls(RefCell<Vec<String>>);

    impl TicketPaymentService for Calls {
        fn make_payment(&self, account_id: AccountId, amount: u64) -> anyhow::Result<()> {
            self.0.borrow_mut().push(format!("pay {account_id} {amount}"));
            Ok(())
        }
    }

    impl SeatReservationService for Calls {
        fn reserve_seat(&self, account_id: AccountId, seats: u32) -> anyhow::Result<()> {
            self.0.borrow_mut().push(format!("reserve {account_id} {seats}"));
            Ok(())
        }
    }

    #[test]
    fn pays_before_reserving() {
        let calls = Calls::default();
        let service = TicketServiceImpl::new(&calls, &calls);

        service
            .purchase_tickets(
                Some(1),
                &[
                    TicketTypeRequest::adult(2),
                    TicketTypeRequest::child(1),
                    TicketTypeRequest::infant(1),
                ],
            )
            .unwrap();

        assert_eq!(*calls.0.borrow(), vec!["pay 1 65", "reserve 1 3"]);
    }

    #[test]
    fn account_is_checked_before_requests() {
        let calls = Calls::default();
        let service = TicketServiceImpl::new(&calls, &calls);

        let err = service.purchase_tickets(Some(0), &[]).unwrap_err();
        assert_eq!(err.as_invalid(), Some(&InvalidPurchase::InvalidAccount));
        assert!(calls.0.borrow().is_empty());
    }

    #[test]
    fn empty_request_list_is_rejected() {
        let calls = Calls::default();
        let service = TicketServiceImpl::new(&calls, &calls);

        let err = service.purchase_tickets(Some(3), &[]).unwrap_err();
        assert_eq!(err.as_invalid(), Some(&InvalidPurchase::EmptyRequest));
        assert!(calls.0.borrow().is_empty());
    }

    #[test]
    fn all_zero_quantities_still_reach_collaborators() {
        let calls = Calls::default();
        let service = TicketServiceImpl::new(&calls, &calls);

        let outcome = service
            .purchase_tickets(Some(5), &[TicketTypeRequest::child(0)])
            .unwrap();

        assert_eq!(outcome, PurchaseOutcome::default());
        assert_eq!(*calls.0.borrow(), vec!["pay 5 0", "reserve 5 0"]);
    }
}
