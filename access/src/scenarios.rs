//! End to end walkthroughs over an in-memory store, exercising role derivation,
//! scoping, search and transitions together.

use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    action::Action,
    employment::{self, Refusal},
    lifecycle::{Flags, Transition, TransitionOutcome},
    predicate::{Field, FieldValue, Predicate, Record},
    role::{Caller, Role},
    scope,
    search::SpotSearch,
};

struct Location {
    host: Uuid,
    name: &'static str,
    description: &'static str,
    address: &'static str,
    state: &'static str,
    city: &'static str,
}

struct Spot {
    id: i64,
    location: usize,
    size_id: i64,
}

struct SpotView<'a> {
    spot: &'a Spot,
    location: &'a Location,
}

impl Record for SpotView<'_> {
    fn field(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Id => FieldValue::Int(self.spot.id),
            Field::SizeId => FieldValue::Int(self.spot.size_id),
            Field::HostId => FieldValue::Uuid(self.location.host),
            Field::LocationName => FieldValue::Text(self.location.name),
            Field::LocationDescription => FieldValue::Text(self.location.description),
            Field::LocationAddress => FieldValue::Text(self.location.address),
            Field::LocationState => FieldValue::Text(self.location.state),
            Field::LocationCity => FieldValue::Text(self.location.city),
            _ => FieldValue::Null,
        }
    }
}

struct Reservation {
    id: i64,
    user: Uuid,
    host: Uuid,
    flags: Flags,
}

impl Record for Reservation {
    fn field(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Id => FieldValue::Int(self.id),
            Field::UserId => FieldValue::Uuid(self.user),
            Field::HostId => FieldValue::Uuid(self.host),
            Field::Confirmed => FieldValue::Bool(self.flags.confirmed),
            Field::Canceled => FieldValue::Bool(self.flags.canceled),
            _ => FieldValue::Null,
        }
    }
}

#[derive(Default)]
struct World {
    roles: HashMap<Uuid, Role>,
    locations: Vec<Location>,
    spots: Vec<Spot>,
    reservations: Vec<Reservation>,
}

impl World {
    fn caller(&self, user: Uuid) -> Caller {
        Caller::Authenticated {
            user_id: user,
            role: self.roles.get(&user).copied().unwrap_or(Role::User),
        }
    }

    fn role(&self, user: Uuid) -> Role {
        self.caller(user).role()
    }

    fn become_host(&mut self, user: Uuid) -> Result<(), Refusal> {
        employment::check_become_host(self.role(user))?;
        self.roles.insert(user, Role::Host);
        Ok(())
    }

    fn become_attendant(&mut self, user: Uuid, host: Option<Uuid>) -> Result<(), Refusal> {
        let host = employment::check_become_attendant(self.role(user), host)?;
        if !self.role(host).is_host() {
            return Err(Refusal::CouldNotCreateAttendant);
        }
        self.roles.insert(user, Role::Attendant { boss: Some(host) });
        Ok(())
    }

    fn fire(&mut self, host: Uuid, attendant: Uuid) -> Result<(), Refusal> {
        employment::check_fire(host, self.role(attendant))?;
        self.roles.remove(&attendant);
        Ok(())
    }

    fn my_attendants(&self, host: Uuid) -> Vec<Uuid> {
        self.roles
            .iter()
            .filter(|(_, role)| **role == Role::Attendant { boss: Some(host) })
            .map(|(user, _)| *user)
            .collect()
    }

    fn add_location(&mut self, host: Uuid, name: &'static str, address: &'static str) -> usize {
        self.locations.push(Location {
            host,
            name,
            description: "",
            address,
            state: "UT",
            city: "Provo",
        });
        self.locations.len() - 1
    }

    fn add_spot(&mut self, location: usize, size_id: i64) -> i64 {
        let id = self.spots.len() as i64 + 1;
        self.spots.push(Spot {
            id,
            location,
            size_id,
        });
        id
    }

    fn reserve(&mut self, user: Uuid, spot: i64) -> i64 {
        let spot = self.spots.iter().find(|s| s.id == spot).expect("spot exists");
        let host = self.locations[spot.location].host;
        let id = self.reservations.len() as i64 + 1;
        self.reservations.push(Reservation {
            id,
            user,
            host,
            flags: Flags::default(),
        });
        id
    }

    fn search(&self, search: &SpotSearch) -> Vec<i64> {
        let predicate = search.predicate();
        self.spots
            .iter()
            .filter(|spot| {
                predicate.matches(&SpotView {
                    spot,
                    location: &self.locations[spot.location],
                })
            })
            .map(|spot| spot.id)
            .collect()
    }

    fn select(&self, predicate: &Predicate) -> Vec<i64> {
        self.reservations
            .iter()
            .filter(|r| predicate.matches(*r))
            .map(|r| r.id)
            .collect()
    }

    fn list(&self, user: Uuid, action: Action) -> Vec<i64> {
        self.select(&scope::reservation_scope(&self.caller(user), action))
    }

    fn needs_confirmation(&self, user: Uuid) -> Vec<i64> {
        self.select(&scope::needs_confirmation(&self.caller(user)))
    }

    /// `None` stands for a 404: the reservation is outside the caller's scope.
    fn transition(&mut self, user: Uuid, id: i64, transition: Transition) -> Option<TransitionOutcome> {
        let action = match transition {
            Transition::Confirm => Action::Confirm,
            Transition::Cancel => Action::Cancel,
        };
        let predicate = scope::reservation_scope(&self.caller(user), action);
        let reservation = self
            .reservations
            .iter_mut()
            .find(|r| r.id == id && predicate.matches(&**r))?;
        let outcome = transition.apply(reservation.flags);
        if let TransitionOutcome::Applied(flags) = outcome {
            reservation.flags = flags;
        }
        Some(outcome)
    }

    fn flags(&self, id: i64) -> Flags {
        self.reservations
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.flags)
            .expect("reservation exists")
    }
}

struct Cast {
    host: Uuid,
    attendant: Uuid,
    user: Uuid,
    spot: i64,
}

fn driveway_world() -> (World, Cast) {
    let mut world = World::default();
    let (host, attendant, user) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    world.become_host(host).unwrap();
    world.become_attendant(attendant, Some(host)).unwrap();
    let location = world.add_location(host, "Driveway", "1 Elm");
    let spot = world.add_spot(location, 1);
    (
        world,
        Cast {
            host,
            attendant,
            user,
            spot,
        },
    )
}

#[test]
fn host_and_attendant_never_coexist_on_one_user() {
    let mut world = World::default();
    let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

    assert!(world.become_host(a).is_ok());
    assert_eq!(world.become_host(a), Err(Refusal::AlreadyHost));
    assert_eq!(world.become_attendant(a, Some(a)), Err(Refusal::AlreadyHost));
    assert!(world.become_attendant(b, Some(a)).is_ok());
    assert_eq!(world.become_host(b), Err(Refusal::AlreadyAttendant));
    assert_eq!(world.become_attendant(c, Some(b)), Err(Refusal::CouldNotCreateAttendant));
    assert!(world.fire(a, b).is_ok());
    assert!(world.become_host(b).is_ok());
    assert_eq!(world.fire(a, b), Err(Refusal::NotYourEmployee));

    for user in [a, b, c] {
        let caller = world.caller(user);
        assert!(!(caller.is_host() && caller.is_attendant()));
    }
}

#[test]
fn reservation_walkthrough() {
    let (mut world, cast) = driveway_world();
    let id = world.reserve(cast.user, cast.spot);

    assert_eq!(world.list(cast.host, Action::MyReservations), vec![id]);
    assert_eq!(world.flags(id), Flags::default());

    let outcome = world.transition(cast.attendant, id, Transition::Confirm);
    assert!(outcome.is_some_and(|o| o.is_applied()));
    assert!(world.flags(id).confirmed);

    let outcome = world.transition(cast.user, id, Transition::Cancel);
    assert!(outcome.is_some_and(|o| o.is_applied()));
    assert_eq!(
        world.flags(id),
        Flags {
            confirmed: true,
            canceled: true
        }
    );

    assert!(world.needs_confirmation(cast.host).is_empty());
    assert!(world.needs_confirmation(cast.attendant).is_empty());
    assert!(world.list(cast.user, Action::List).is_empty());
    assert_eq!(world.list(cast.user, Action::Retrieve), vec![id]);
}

#[test]
fn repeated_transitions_are_acknowledged_without_change() {
    let (mut world, cast) = driveway_world();
    let id = world.reserve(cast.user, cast.spot);

    world.transition(cast.host, id, Transition::Confirm);
    assert_eq!(
        world.transition(cast.host, id, Transition::Confirm),
        Some(TransitionOutcome::AlreadyDone)
    );

    world.transition(cast.user, id, Transition::Cancel);
    let before = world.flags(id);
    assert_eq!(
        world.transition(cast.user, id, Transition::Cancel),
        Some(TransitionOutcome::AlreadyDone)
    );
    assert_eq!(world.flags(id), before);
    assert!(world.flags(id).canceled);
}

#[test]
fn foreign_reservations_cannot_be_transitioned() {
    let (mut world, cast) = driveway_world();
    let id = world.reserve(cast.user, cast.spot);
    let stranger = Uuid::new_v4();
    let other_host = Uuid::new_v4();
    world.become_host(other_host).unwrap();

    assert_eq!(world.transition(stranger, id, Transition::Cancel), None);
    assert_eq!(world.transition(other_host, id, Transition::Confirm), None);
    assert!(!world.flags(id).canceled);
}

#[test]
fn needs_confirmation_for_attendant_and_plain_user() {
    let (mut world, cast) = driveway_world();
    let pending = world.reserve(cast.user, cast.spot);
    let confirmed = world.reserve(cast.user, cast.spot);
    let canceled = world.reserve(cast.user, cast.spot);
    world.transition(cast.host, confirmed, Transition::Confirm);
    world.transition(cast.user, canceled, Transition::Cancel);

    assert_eq!(world.needs_confirmation(cast.attendant), vec![pending]);
    assert_eq!(world.needs_confirmation(cast.host), vec![pending]);
    assert!(world.needs_confirmation(cast.user).is_empty());
}

#[test]
fn fired_attendant_loses_scope_immediately() {
    let (mut world, cast) = driveway_world();
    let id = world.reserve(cast.user, cast.spot);
    assert_eq!(world.list(cast.attendant, Action::BossReservations), vec![id]);
    assert_eq!(world.my_attendants(cast.host), vec![cast.attendant]);

    world.fire(cast.host, cast.attendant).unwrap();

    assert!(world.my_attendants(cast.host).is_empty());
    assert!(world.list(cast.attendant, Action::BossReservations).is_empty());
    assert_eq!(world.transition(cast.attendant, id, Transition::Confirm), None);
}

#[test]
fn driveway_search_matches_any_location_field() {
    let mut world = World::default();
    let host = Uuid::new_v4();
    let by_name = world.add_location(host, "Back DRIVEWAY", "9 Oak");
    let by_address = world.add_location(host, "Lot", "12 Driveway Ln");
    let elsewhere = world.add_location(host, "Garage", "3 Main");
    let a = world.add_spot(by_name, 1);
    let b = world.add_spot(by_address, 2);
    world.add_spot(elsewhere, 1);

    let search = SpotSearch {
        location: Some("driveway".to_string()),
        size: None,
    };
    assert_eq!(world.search(&search), vec![a, b]);

    let sized = SpotSearch {
        location: Some("driveway".to_string()),
        size: Some("2".to_string()),
    };
    assert_eq!(world.search(&sized), vec![b]);
}

#[test]
fn short_search_falls_back_to_size_only() {
    let mut world = World::default();
    let host = Uuid::new_v4();
    let location = world.add_location(host, "at home", "1 At St");
    let small = world.add_spot(location, 1);
    let large = world.add_spot(location, 2);

    let everything = SpotSearch {
        location: Some("at".to_string()),
        size: None,
    };
    assert_eq!(world.search(&everything), vec![small, large]);

    let sized = SpotSearch {
        location: Some("at".to_string()),
        size: Some("2".to_string()),
    };
    assert_eq!(world.search(&sized), vec![large]);
}

#[test]
fn canceled_reservation_drops_out_of_the_update_scope() {
    let (mut world, cast) = driveway_world();
    let id = world.reserve(cast.user, cast.spot);
    assert_eq!(world.list(cast.user, Action::Update), vec![id]);

    world.transition(cast.user, id, Transition::Cancel);
    assert!(world.list(cast.user, Action::Update).is_empty());
    assert_eq!(world.list(cast.user, Action::Retrieve), vec![id]);
}
