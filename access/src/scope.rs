use uuid::Uuid;

use crate::{
    action::Action,
    predicate::{Field, Predicate},
    role::{Caller, Role},
};

fn owned_by_host(host_id: Uuid) -> Predicate {
    Predicate::is(Field::HostId, host_id)
}

fn not_canceled() -> Predicate {
    Predicate::is(Field::Canceled, false)
}

/// Locations: public reads, everything else limited to the caller's own locations.
///
/// Non-hosts get `Never`, so a foreign or unknown id both read as missing.
pub fn location_scope(caller: &Caller, action: Action) -> Predicate {
    if action.is_safe() {
        return Predicate::Always;
    }
    caller.host_id().map_or(Predicate::Never, owned_by_host)
}

/// Parking spots: public reads; `myspots` and writes see spots under the caller's
/// locations only.
pub fn spot_scope(caller: &Caller, action: Action) -> Predicate {
    if action.is_safe() {
        return Predicate::Always;
    }
    caller.host_id().map_or(Predicate::Never, owned_by_host)
}

pub fn vehicle_scope(caller: &Caller) -> Predicate {
    caller
        .user_id()
        .map_or(Predicate::Never, |id| Predicate::is(Field::UserId, id))
}

/// Reservations visible to `caller` for `action`.
///
/// Host scoping is tried before attendant scoping. `retrieve` and the two
/// transitions skip the `canceled = false` filter: a canceled reservation stays
/// fetchable by id, and canceling or confirming it again is an acknowledged no-op.
pub fn reservation_scope(caller: &Caller, action: Action) -> Predicate {
    let Caller::Authenticated { user_id, role } = *caller else {
        return Predicate::Never;
    };

    let base = match action {
        Action::Retrieve | Action::Confirm | Action::Cancel => Predicate::Always,
        _ => not_canceled(),
    };

    let scoped = match (action, role) {
        (Action::MyReservations | Action::Confirm | Action::Cancel, Role::Host) => {
            owned_by_host(user_id)
        }
        (Action::BossReservations | Action::Confirm | Action::Cancel, Role::Attendant { boss }) => {
            boss.map_or(Predicate::Never, owned_by_host)
        }
        (Action::MyReservations | Action::BossReservations, _) => Predicate::Never,
        _ => Predicate::is(Field::UserId, user_id),
    };

    base.and(scoped)
}

/// Pending reservations awaiting an attendant: for a host its own, for an attendant
/// its boss's, for anyone else nothing.
pub fn needs_confirmation(caller: &Caller) -> Predicate {
    let host = match caller.role() {
        Role::Host => caller.user_id(),
        Role::Attendant { boss } => boss,
        Role::User => None,
    };
    match host {
        Some(host_id) => Predicate::all_of([
            owned_by_host(host_id),
            Predicate::is(Field::Confirmed, false),
            not_canceled(),
        ]),
        None => Predicate::Never,
    }
}
