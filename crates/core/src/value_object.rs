//! Value object trait: equality by value, not identity.
//!
//! Ticket requests and purchase outcomes have **no identity**. They are built
//! by the caller, consumed by a single purchase call, then discarded.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two ticket
/// requests for the same category and quantity are the same request.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Seats(u32);
///
/// impl ValueObject for Seats {}
///
/// assert_eq!(Seats(3), Seats(3));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

impl ValueObject for crate::id::AccountId {}
