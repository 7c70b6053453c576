//! Pure purchase calculation: tally the requests, then apply the business rules.
//!
//! No IO happens here. Every rule is checked before a caller gets an outcome,
//! so collaborators are only ever contacted with a fully validated purchase.

use serde::Serialize;

use boxoffice_core::{InvalidPurchase, ValueObject};

use crate::rules::PurchaseRules;
use crate::ticket::{TicketType, TicketTypeRequest};

/// What a validated purchase costs and how many seats it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PurchaseOutcome {
    pub total_amount: u64,
    pub seats_to_reserve: u32,
    pub adult_tickets: u32,
    pub child_tickets: u32,
    pub infant_tickets: u32,
}

impl PurchaseOutcome {
    pub fn total_tickets(&self) -> u32 {
        self.adult_tickets
            .saturating_add(self.child_tickets)
            .saturating_add(self.infant_tickets)
    }
}

impl ValueObject for PurchaseOutcome {}

/// Running sums over the request list.
///
/// Quantities are widened to `u64` so a hostile request list cannot overflow
/// before the ticket cap gets a chance to reject it.
#[derive(Debug, Default)]
struct Tally {
    total: u64,
    adult: u64,
    child: u64,
    infant: u64,
    amount: u64,
    seats: u64,
}

impl Tally {
    fn add(&mut self, ticket_type: TicketType, quantity: u64) {
        self.total = self.total.saturating_add(quantity);
        match ticket_type {
            TicketType::Adult => self.adult = self.adult.saturating_add(quantity),
            TicketType::Child => self.child = self.child.saturating_add(quantity),
            TicketType::Infant => self.infant = self.infant.saturating_add(quantity),
        }
        self.amount = self
            .amount
            .saturating_add(quantity.saturating_mul(u64::from(ticket_type.price())));
        if ticket_type.occupies_seat() {
            self.seats = self.seats.saturating_add(quantity);
        }
    }

    /// Rule order matters: the first violation is the one reported.
    fn check(&self, rules: &PurchaseRules) -> Result<(), InvalidPurchase> {
        if self.total > u64::from(rules.max_tickets_per_purchase) {
            return Err(InvalidPurchase::TooManyTickets {
                requested: self.total,
                max: rules.max_tickets_per_purchase,
            });
        }
        if self.adult == 0 && self.total > 0 {
            return Err(InvalidPurchase::NoAdultPresent);
        }
        if self.infant > self.adult {
            return Err(InvalidPurchase::TooManyInfants {
                infants: self.infant,
                adults: self.adult,
            });
        }
        Ok(())
    }

    fn into_outcome(self) -> PurchaseOutcome {
        // Only called once the cap holds, so every count fits in a u32.
        let narrow = |v: u64| u32::try_from(v).unwrap_or(u32::MAX);
        PurchaseOutcome {
            total_amount: self.amount,
            seats_to_reserve: narrow(self.seats),
            adult_tickets: narrow(self.adult),
            child_tickets: narrow(self.child),
            infant_tickets: narrow(self.infant),
        }
    }
}

/// Validate ticket requests and compute the amount owed and seats needed.
///
/// Per-request checks (negative quantity) fail on the first offending
/// request. Aggregate rules are then applied in order: ticket cap, adult
/// required, infants not outnumbering adults.
///
/// Emptiness and the account are the caller's concern; an empty slice (or
/// one where every quantity is zero) yields a zero outcome.
pub fn calculate_totals(
    requests: &[TicketTypeRequest],
    rules: &PurchaseRules,
) -> Result<PurchaseOutcome, InvalidPurchase> {
    let mut tally = Tally::default();

    for (index, request) in requests.iter().enumerate() {
        let quantity = u64::try_from(request.no_of_tickets()).map_err(|_| {
            InvalidPurchase::NegativeQuantity {
                index,
                quantity: i64::from(request.no_of_tickets()),
            }
        })?;
        tally.add(request.ticket_type(), quantity);
    }

    tally.check(rules)?;
    Ok(tally.into_outcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn calc(requests: &[TicketTypeRequest]) -> Result<PurchaseOutcome, InvalidPurchase> {
        calculate_totals(requests, &PurchaseRules::default())
    }

    #[test]
    fn mixed_family_purchase() {
        let outcome = calc(&[
            TicketTypeRequest::adult(2),
            TicketTypeRequest::child(1),
            TicketTypeRequest::infant(1),
        ])
        .unwrap();

        assert_eq!(outcome.total_amount, 65);
        assert_eq!(outcome.seats_to_reserve, 3);
        assert_eq!(outcome.total_tickets(), 4);
        assert_eq!(outcome.infant_tickets, 1);
    }

    #[test]
    fn repeated_categories_are_summed() {
        let outcome = calc(&[TicketTypeRequest::adult(1), TicketTypeRequest::adult(2)]).unwrap();
        assert_eq!(outcome.adult_tickets, 3);
        assert_eq!(outcome.total_amount, 75);
    }

    #[test]
    fn child_without_adult_is_rejected() {
        assert_eq!(
            calc(&[TicketTypeRequest::child(1)]),
            Err(InvalidPurchase::NoAdultPresent)
        );
    }

    #[test]
    fn infant_only_hits_the_adult_rule_first() {
        assert_eq!(
            calc(&[TicketTypeRequest::infant(2)]),
            Err(InvalidPurchase::NoAdultPresent)
        );
    }

    #[test]
    fn more_infants_than_adults_is_rejected() {
        assert_eq!(
            calc(&[TicketTypeRequest::adult(2), TicketTypeRequest::infant(3)]),
            Err(InvalidPurchase::TooManyInfants {
                infants: 3,
                adults: 2
            })
        );
    }

    #[test]
    fn cap_counts_infants_too() {
        let err = calc(&[TicketTypeRequest::adult(13), TicketTypeRequest::infant(13)]).unwrap_err();
        assert_eq!(
            err,
            InvalidPurchase::TooManyTickets {
                requested: 26,
                max: 25
            }
        );
    }

    #[test]
    fn cap_is_checked_before_adult_rule() {
        assert!(matches!(
            calc(&[TicketTypeRequest::child(30)]),
            Err(InvalidPurchase::TooManyTickets { .. })
        ));
    }

    #[test]
    fn exactly_25_is_allowed() {
        let outcome = calc(&[TicketTypeRequest::adult(25)]).unwrap();
        assert_eq!(outcome.total_amount, 625);
        assert_eq!(outcome.seats_to_reserve, 25);
    }

    #[test]
    fn negative_quantity_reports_the_request() {
        assert_eq!(
            calc(&[TicketTypeRequest::adult(2), TicketTypeRequest::child(-1)]),
            Err(InvalidPurchase::NegativeQuantity {
                index: 1,
                quantity: -1
            })
        );
    }

    #[test]
    fn all_zero_quantities_yield_zero_outcome() {
        let outcome = calc(&[TicketTypeRequest::adult(0), TicketTypeRequest::child(0)]).unwrap();
        assert_eq!(outcome, PurchaseOutcome::default());
    }

    #[test]
    fn custom_cap_is_honoured() {
        let rules = PurchaseRules {
            max_tickets_per_purchase: 4,
        };
        assert!(calculate_totals(&[TicketTypeRequest::adult(4)], &rules).is_ok());
        assert!(calculate_totals(&[TicketTypeRequest::adult(5)], &rules).is_err());
    }

    #[test]
    fn huge_quantities_do_not_overflow() {
        let requests = vec![TicketTypeRequest::adult(i32::MAX); 8];
        assert!(matches!(
            calc(&requests),
            Err(InvalidPurchase::TooManyTickets { .. })
        ));
    }

    fn request_strategy() -> impl Strategy<Value = TicketTypeRequest> {
        (prop::sample::select(TicketType::ALL.to_vec()), 0i32..10)
            .prop_map(|(ticket_type, n)| TicketTypeRequest::new(ticket_type, n))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: accepted purchases are priced and seated by the fixed formula.
        #[test]
        fn accepted_purchases_follow_the_price_formula(
            requests in prop::collection::vec(request_strategy(), 1..8)
        ) {
            if let Ok(outcome) = calc(&requests) {
                let adults = u64::from(outcome.adult_tickets);
                let children = u64::from(outcome.child_tickets);
                prop_assert_eq!(outcome.total_amount, 25 * adults + 15 * children);
                prop_assert_eq!(
                    outcome.seats_to_reserve,
                    outcome.adult_tickets + outcome.child_tickets
                );
                prop_assert!(outcome.total_tickets() <= 25);
                prop_assert!(outcome.infant_tickets <= outcome.adult_tickets);
            }
        }

        /// Property: request order never changes the result.
        #[test]
        fn result_is_order_independent(
            requests in prop::collection::vec(request_strategy(), 1..8)
        ) {
            let mut reversed = requests.clone();
            reversed.reverse();
            prop_assert_eq!(calc(&requests), calc(&reversed));
        }

        /// Property: a negative quantity anywhere is rejected regardless of the rest.
        #[test]
        fn any_negative_quantity_is_rejected(
            requests in prop::collection::vec(request_strategy(), 0..6),
            position in 0usize..6,
            negative in i32::MIN..0,
        ) {
            let mut requests = requests;
            let index = position.min(requests.len());
            requests.insert(index, TicketTypeRequest::adult(negative));
            let rejected = matches!(
                calc(&requests),
                Err(InvalidPurchase::NegativeQuantity { .. })
            );
            prop_assert!(rejected);
        }

        /// Property: purchases with no adult and at least one ticket never pass.
        #[test]
        fn no_adult_means_rejection(children in 0i32..10, infants in 0i32..10) {
            prop_assume!(children + infants > 0);
            let result = calc(&[
                TicketTypeRequest::child(children),
                TicketTypeRequest::infant(infants),
            ]);
            prop_assert_eq!(result, Err(InvalidPurchase::NoAdultPresent));
        }
    }
}
