use serde::Serialize;

/// Derived state of a reservation. The two stored flags are independent, so a
/// reservation canceled after confirmation is still `Canceled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Canceled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    pub confirmed: bool,
    pub canceled: bool,
}

impl Flags {
    pub fn status(&self) -> ReservationStatus {
        match (self.confirmed, self.canceled) {
            (_, true) => ReservationStatus::Canceled,
            (true, false) => ReservationStatus::Confirmed,
            (false, false) => ReservationStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The flag was flipped; persist the new flags.
    Applied(Flags),
    /// The flag was already set; nothing to write.
    AlreadyDone,
}

impl TransitionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TransitionOutcome::Applied(_))
    }
}

impl Transition {
    /// Flips this transition's flag. Confirming a canceled reservation is allowed and
    /// leaves it canceled; the flags never go back to `false`.
    pub fn apply(&self, flags: Flags) -> TransitionOutcome {
        match self {
            Transition::Confirm if flags.confirmed => TransitionOutcome::AlreadyDone,
            Transition::Confirm => TransitionOutcome::Applied(Flags {
                confirmed: true,
                ..flags
            }),
            Transition::Cancel if flags.canceled => TransitionOutcome::AlreadyDone,
            Transition::Cancel => TransitionOutcome::Applied(Flags {
                canceled: true,
                ..flags
            }),
        }
    }

    /// Acknowledgement sent back for both a real transition and a repeat.
    pub fn message(&self, outcome: &TransitionOutcome, reservation_id: i64) -> String {
        match (self, outcome) {
            (Transition::Confirm, TransitionOutcome::AlreadyDone) => {
                "you have already confirmed this reservation".to_string()
            }
            (Transition::Confirm, TransitionOutcome::Applied(_)) => {
                format!("you have confirmed reservation number: {}", reservation_id)
            }
            (Transition::Cancel, TransitionOutcome::AlreadyDone) => {
                "you have already canceled this reservation".to_string()
            }
            (Transition::Cancel, TransitionOutcome::Applied(_)) => {
                format!("you have canceled reservation number: {}", reservation_id)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Transition::Confirm => "confirm",
            Transition::Cancel => "cancel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PENDING: Flags = Flags {
        confirmed: false,
        canceled: false,
    };

    #[test]
    fn status_follows_the_flags() {
        assert_eq!(PENDING.status(), ReservationStatus::Pending);
        assert_eq!(
            Flags { confirmed: true, canceled: false }.status(),
            ReservationStatus::Confirmed
        );
        assert_eq!(
            Flags { confirmed: true, canceled: true }.status(),
            ReservationStatus::Canceled
        );
    }

    #[test]
    fn confirm_sets_only_the_confirmed_flag() {
        assert_eq!(
            Transition::Confirm.apply(PENDING),
            TransitionOutcome::Applied(Flags { confirmed: true, canceled: false })
        );
    }

    #[test]
    fn second_confirm_is_a_no_op() {
        let TransitionOutcome::Applied(flags) = Transition::Confirm.apply(PENDING) else {
            panic!("first confirm must apply");
        };
        assert_eq!(Transition::Confirm.apply(flags), TransitionOutcome::AlreadyDone);
    }

    #[test]
    fn second_cancel_is_a_no_op_and_stays_canceled() {
        let TransitionOutcome::Applied(flags) = Transition::Cancel.apply(PENDING) else {
            panic!("first cancel must apply");
        };
        assert!(flags.canceled);
        assert_eq!(Transition::Cancel.apply(flags), TransitionOutcome::AlreadyDone);
    }

    #[test]
    fn cancel_after_confirm_keeps_confirmed() {
        let confirmed = Flags { confirmed: true, canceled: false };
        assert_eq!(
            Transition::Cancel.apply(confirmed),
            TransitionOutcome::Applied(Flags { confirmed: true, canceled: true })
        );
    }

    #[test]
    fn confirm_after_cancel_is_permitted() {
        let canceled = Flags { confirmed: false, canceled: true };
        assert_eq!(
            Transition::Confirm.apply(canceled),
            TransitionOutcome::Applied(Flags { confirmed: true, canceled: true })
        );
    }

    #[test]
    fn messages_name_the_reservation_only_on_change() {
        let applied = Transition::Cancel.apply(PENDING);
        assert_eq!(
            Transition::Cancel.message(&applied, 7),
            "you have canceled reservation number: 7"
        );
        assert_eq!(
            Transition::Confirm.message(&TransitionOutcome::AlreadyDone, 7),
            "you have already confirmed this reservation"
        );
    }
}
