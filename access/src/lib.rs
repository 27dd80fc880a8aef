//! Authorization and reservation lifecycle rules of the parking service.
//!
//! Everything here is pure: callers hand in who is asking and what they want to do,
//! and get back a permission decision, a [`predicate::Predicate`] to compose with a
//! storage query, or a state transition to persist.

pub mod action;
pub mod employment;
pub mod lifecycle;
pub mod predicate;
pub mod role;
pub mod scope;
pub mod search;

#[cfg(test)]
mod scenarios;

pub use action::{Action, Permission};
pub use lifecycle::{Flags, ReservationStatus, Transition, TransitionOutcome};
pub use predicate::{Field, FieldValue, Predicate, Record};
pub use role::{Caller, Role, RoleKind};
