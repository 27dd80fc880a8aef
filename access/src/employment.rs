use std::fmt;

use uuid::Uuid;

use crate::role::Role;

/// Why a role acquisition or a firing was turned down. These are reported to the
/// caller as `success: false` replies, never as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    MissingHost,
    AlreadyHost,
    AlreadyAttendant,
    CouldNotCreateHost,
    CouldNotCreateAttendant,
    NotYourEmployee,
}

impl Refusal {
    pub fn message(&self) -> &'static str {
        match self {
            Refusal::MissingHost => "must provide host pk",
            Refusal::AlreadyHost => "you are already a host",
            Refusal::AlreadyAttendant => "you are already an attendant",
            Refusal::CouldNotCreateHost => "could not create host",
            Refusal::CouldNotCreateAttendant => "could not create attendant",
            Refusal::NotYourEmployee => "this is not your employee",
        }
    }
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub const FIRED_MESSAGE: &str = "you just fired 'em good";

/// A user may become a host only while holding no role at all.
pub fn check_become_host(current: Role) -> Result<(), Refusal> {
    match current {
        Role::Attendant { .. } => Err(Refusal::AlreadyAttendant),
        Role::Host => Err(Refusal::AlreadyHost),
        Role::User => Ok(()),
    }
}

/// Returns the host the caller will work for, as it was given.
pub fn check_become_attendant<H>(current: Role, host: Option<H>) -> Result<H, Refusal> {
    let host = host.ok_or(Refusal::MissingHost)?;
    match current {
        Role::Host => Err(Refusal::AlreadyHost),
        Role::Attendant { .. } => Err(Refusal::AlreadyAttendant),
        Role::User => Ok(host),
    }
}

/// Only the attendant's own boss may fire them.
pub fn check_fire(host_id: Uuid, target: Role) -> Result<(), Refusal> {
    match target {
        Role::Attendant { boss: Some(boss) } if boss == host_id => Ok(()),
        _ => Err(Refusal::NotYourEmployee),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendant_check_runs_before_host_check() {
        assert_eq!(
            check_become_host(Role::Attendant { boss: None }),
            Err(Refusal::AlreadyAttendant)
        );
        assert_eq!(check_become_host(Role::Host), Err(Refusal::AlreadyHost));
        assert_eq!(check_become_host(Role::User), Ok(()));
    }

    #[test]
    fn missing_host_is_reported_first() {
        assert_eq!(
            check_become_attendant::<Uuid>(Role::Host, None),
            Err(Refusal::MissingHost)
        );
    }

    #[test]
    fn becoming_an_attendant_needs_a_plain_user() {
        let host = Uuid::new_v4();
        assert_eq!(check_become_attendant(Role::User, Some(host)), Ok(host));
        assert_eq!(
            check_become_attendant(Role::Host, Some(host)),
            Err(Refusal::AlreadyHost)
        );
        assert_eq!(
            check_become_attendant(Role::Attendant { boss: Some(host) }, Some(host)),
            Err(Refusal::AlreadyAttendant)
        );
    }

    #[test]
    fn only_the_boss_can_fire() {
        let boss = Uuid::new_v4();
        assert!(check_fire(boss, Role::Attendant { boss: Some(boss) }).is_ok());
        assert_eq!(
            check_fire(Uuid::new_v4(), Role::Attendant { boss: Some(boss) }),
            Err(Refusal::NotYourEmployee)
        );
        assert_eq!(check_fire(boss, Role::User), Err(Refusal::NotYourEmployee));
        assert_eq!(
            check_fire(boss, Role::Attendant { boss: None }),
            Err(Refusal::NotYourEmployee)
        );
    }

    #[test]
    fn refusals_display_their_message() {
        assert_eq!(Refusal::NotYourEmployee.to_string(), "this is not your employee");
    }
}
