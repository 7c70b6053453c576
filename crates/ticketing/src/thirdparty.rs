//! Contracts for the external payment gateway and seat booking services.
//!
//! Both are opaque to this crate: a call either succeeds or returns an error
//! that is passed straight back to the purchaser. Retries and timeouts belong
//! to the implementations.

use std::sync::Arc;

use boxoffice_core::AccountId;

/// Takes payment for a validated purchase.
pub trait TicketPaymentService {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) -> anyhow::Result<()>;
}

/// Holds seats for a validated purchase.
pub trait SeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32)
    -> anyhow::Result<()>;
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) -> anyhow::Result<()> {
        (**self).make_payment(account_id, total_amount_to_pay)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Box<T> {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) -> anyhow::Result<()> {
        (**self).make_payment(account_id, total_amount_to_pay)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Arc<T> {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) -> anyhow::Result<()> {
        (**self).make_payment(account_id, total_amount_to_pay)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u32,
    ) -> anyhow::Result<()> {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Box<T> {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u32,
    ) -> anyhow::Result<()> {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Arc<T> {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u32,
    ) -> anyhow::Result<()> {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}
