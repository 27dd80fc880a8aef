use common::error::{AppError, Res};

use crate::role::Caller;

/// Operations exposed per entity, including the named role scoped actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Retrieve,
    Create,
    Update,
    Me,
    MyAttendants,
    Fire,
    MySpots,
    MyLocations,
    MyReservations,
    BossReservations,
    Cancel,
    Confirm,
    NeedsConfirmation,
}

impl Action {
    /// Read actions open to everyone on the public catalogues.
    pub fn is_safe(&self) -> bool {
        matches!(self, Action::List | Action::Retrieve)
    }

    /// Verb phrase used in permission errors.
    pub fn describe(&self) -> &'static str {
        match self {
            Action::List => "list these records",
            Action::Retrieve => "view this record",
            Action::Create => "create this record",
            Action::Update => "change this record",
            Action::Me => "view your profile",
            Action::MyAttendants => "list your attendants",
            Action::Fire => "fire an attendant",
            Action::MySpots => "list your parking spots",
            Action::MyLocations => "list your locations",
            Action::MyReservations => "list reservations on your spots",
            Action::BossReservations => "list your host's reservations",
            Action::Cancel => "cancel a reservation",
            Action::Confirm => "confirm a reservation",
            Action::NeedsConfirmation => "list reservations awaiting confirmation",
        }
    }
}

/// Role gate checked before any record is looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    AllowAny,
    Authenticated,
    Host,
    /// Attendants, and hosts acting as their own attendant.
    Attendant,
}

impl Permission {
    /// Gate for parking spots, parking size categories and locations.
    pub fn for_catalogue(action: Action) -> Self {
        match action {
            Action::List | Action::Retrieve | Action::MyLocations => Permission::AllowAny,
            _ => Permission::Host,
        }
    }

    /// `needsconfirmation` is open to every signed-in caller; its scope is empty for
    /// plain users.
    pub fn for_reservation(action: Action) -> Self {
        match action {
            Action::MyReservations => Permission::Host,
            Action::BossReservations | Action::Confirm => Permission::Attendant,
            _ => Permission::Authenticated,
        }
    }

    pub fn for_staff(action: Action) -> Self {
        match action {
            Action::Me => Permission::AllowAny,
            Action::MyAttendants | Action::Fire => Permission::Host,
            _ => Permission::Authenticated,
        }
    }

    pub fn permits(&self, caller: &Caller) -> bool {
        match self {
            Permission::AllowAny => true,
            Permission::Authenticated => caller.is_authenticated(),
            Permission::Host => caller.is_host(),
            Permission::Attendant => caller.is_attendant() || caller.is_host(),
        }
    }

    /// Anonymous callers get `Unauthorized`, authenticated callers lacking the role
    /// get `Forbidden`.
    pub fn check(&self, caller: &Caller, action: Action) -> Res<()> {
        if self.permits(caller) {
            return Ok(());
        }
        if !caller.is_authenticated() {
            return Err(AppError::Unauthorized(
                "No authorization token provided".to_string(),
            ));
        }
        let required = match self {
            Permission::Host => "a host",
            Permission::Attendant => "an attendant",
            _ => "signed in",
        };
        Err(AppError::Forbidden(format!(
            "You must be {} to {}",
            required,
            action.describe()
        )))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn catalogue_reads_are_open_and_writes_need_a_host() {
        let anonymous = Caller::Anonymous;
        let user = Caller::user(Uuid::new_v4());
        let host = Caller::host(Uuid::new_v4());

        for action in [Action::List, Action::Retrieve] {
            assert!(Permission::for_catalogue(action).permits(&anonymous));
        }
        for action in [Action::Create, Action::Update, Action::MySpots] {
            let gate = Permission::for_catalogue(action);
            assert!(!gate.permits(&user));
            assert!(gate.permits(&host));
        }
    }

    #[test]
    fn confirm_is_for_attendants_and_hosts_only() {
        let gate = Permission::for_reservation(Action::Confirm);
        assert!(gate.permits(&Caller::attendant(Uuid::new_v4(), None)));
        assert!(gate.permits(&Caller::host(Uuid::new_v4())));
        assert!(!gate.permits(&Caller::user(Uuid::new_v4())));
    }

    #[test]
    fn cancel_is_open_to_any_authenticated_caller() {
        let gate = Permission::for_reservation(Action::Cancel);
        assert!(gate.permits(&Caller::user(Uuid::new_v4())));
        assert!(!gate.permits(&Caller::Anonymous));
    }

    #[test]
    fn boss_reservations_are_closed_to_plain_users() {
        let gate = Permission::for_reservation(Action::BossReservations);
        assert!(matches!(
            gate.check(&Caller::user(Uuid::new_v4()), Action::BossReservations),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn needs_confirmation_is_open_to_plain_users() {
        let gate = Permission::for_reservation(Action::NeedsConfirmation);
        assert!(gate.check(&Caller::user(Uuid::new_v4()), Action::NeedsConfirmation).is_ok());
        assert!(matches!(
            gate.check(&Caller::Anonymous, Action::NeedsConfirmation),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn forbidden_message_reads_as_a_sentence() {
        let err = Permission::for_catalogue(Action::MySpots)
            .check(&Caller::user(Uuid::new_v4()), Action::MySpots)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Permission denied: You must be a host to list your parking spots"
        );
    }

    #[test]
    fn anonymous_caller_gets_unauthorized_not_forbidden() {
        let result = Permission::for_reservation(Action::MyReservations)
            .check(&Caller::Anonymous, Action::MyReservations);
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn staff_actions() {
        assert!(Permission::for_staff(Action::Me).permits(&Caller::Anonymous));
        assert!(!Permission::for_staff(Action::Fire).permits(&Caller::attendant(Uuid::new_v4(), None)));
        assert!(Permission::for_staff(Action::MyAttendants).permits(&Caller::host(Uuid::new_v4())));
        assert!(Permission::for_staff(Action::Create).permits(&Caller::user(Uuid::new_v4())));
    }
}
