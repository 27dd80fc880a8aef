use uuid::Uuid;

/// Attributes a scope can filter on. Each storage query maps the ones it supports
/// to columns; relation fields (`HostId`, the location text fields) are reached
/// through the spot's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    /// Owner of a reservation or vehicle.
    UserId,
    /// Host owning the location, and through it the spot and its reservations.
    HostId,
    SizeId,
    Confirmed,
    Canceled,
    LocationName,
    LocationDescription,
    LocationAddress,
    LocationState,
    LocationCity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Uuid(Uuid),
    Int(i64),
    Bool(bool),
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Value::Uuid(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

/// A field as read from an in-memory record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Uuid(Uuid),
    Int(i64),
    Bool(bool),
    Text(&'a str),
    Null,
}

/// Anything a predicate can be evaluated against without a database.
pub trait Record {
    fn field(&self, field: Field) -> FieldValue<'_>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Always,
    Never,
    Eq(Field, Value),
    /// Case-insensitive substring match.
    IContains(Field, String),
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
}

impl Predicate {
    pub fn is(field: Field, value: impl Into<Value>) -> Self {
        Predicate::Eq(field, value.into())
    }

    pub fn icontains(field: Field, needle: impl Into<String>) -> Self {
        Predicate::IContains(field, needle.into())
    }

    pub fn and(self, other: Predicate) -> Self {
        match (self, other) {
            (Predicate::Never, _) | (_, Predicate::Never) => Predicate::Never,
            (Predicate::Always, p) | (p, Predicate::Always) => p,
            (Predicate::All(mut left), Predicate::All(right)) => {
                left.extend(right);
                Predicate::All(left)
            }
            (Predicate::All(mut left), p) => {
                left.push(p);
                Predicate::All(left)
            }
            (p, Predicate::All(mut right)) => {
                right.insert(0, p);
                Predicate::All(right)
            }
            (left, right) => Predicate::All(vec![left, right]),
        }
    }

    pub fn or(self, other: Predicate) -> Self {
        match (self, other) {
            (Predicate::Always, _) | (_, Predicate::Always) => Predicate::Always,
            (Predicate::Never, p) | (p, Predicate::Never) => p,
            (Predicate::Any(mut left), Predicate::Any(right)) => {
                left.extend(right);
                Predicate::Any(left)
            }
            (Predicate::Any(mut left), p) => {
                left.push(p);
                Predicate::Any(left)
            }
            (p, Predicate::Any(mut right)) => {
                right.insert(0, p);
                Predicate::Any(right)
            }
            (left, right) => Predicate::Any(vec![left, right]),
        }
    }

    /// Disjunction of all predicates; `Never` when there are none.
    pub fn any_of(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        predicates.into_iter().fold(Predicate::Never, Predicate::or)
    }

    /// Conjunction of all predicates; `Always` when there are none.
    pub fn all_of(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        predicates.into_iter().fold(Predicate::Always, Predicate::and)
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Predicate::Never)
    }

    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::Never => false,
            Predicate::Eq(field, value) => {
                match (record.field(*field), value) {
                    (FieldValue::Uuid(a), Value::Uuid(b)) => a == *b,
                    (FieldValue::Int(a), Value::Int(b)) => a == *b,
                    (FieldValue::Bool(a), Value::Bool(b)) => a == *b,
                    _ => false,
                }
            }
            Predicate::IContains(field, needle) => match record.field(*field) {
                FieldValue::Text(text) => text.to_lowercase().contains(&needle.to_lowercase()),
                _ => false,
            },
            Predicate::All(predicates) => predicates.iter().all(|p| p.matches(record)),
            Predicate::Any(predicates) => predicates.iter().any(|p| p.matches(record)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        user: Uuid,
        canceled: bool,
        name: &'static str,
    }

    impl Record for Row {
        fn field(&self, field: Field) -> FieldValue<'_> {
            match field {
                Field::UserId => FieldValue::Uuid(self.user),
                Field::Canceled => FieldValue::Bool(self.canceled),
                Field::LocationName => FieldValue::Text(self.name),
                _ => FieldValue::Null,
            }
        }
    }

    fn row() -> Row {
        Row {
            user: Uuid::new_v4(),
            canceled: false,
            name: "Back Driveway",
        }
    }

    #[test]
    fn and_folds_identities_away() {
        let p = Predicate::is(Field::Canceled, false);
        assert_eq!(Predicate::Always.and(p.clone()), p);
        assert_eq!(p.clone().and(Predicate::Never), Predicate::Never);
        assert_eq!(
            Predicate::all_of([p.clone(), p.clone(), p.clone()]),
            Predicate::All(vec![p.clone(), p.clone(), p])
        );
    }

    #[test]
    fn or_folds_identities_away() {
        let p = Predicate::icontains(Field::LocationCity, "provo");
        assert_eq!(Predicate::Never.or(p.clone()), p);
        assert_eq!(p.or(Predicate::Always), Predicate::Always);
        assert_eq!(Predicate::any_of(Vec::new()), Predicate::Never);
        assert_eq!(Predicate::all_of(Vec::new()), Predicate::Always);
    }

    #[test]
    fn equality_requires_matching_types() {
        let r = row();
        assert!(Predicate::is(Field::UserId, r.user).matches(&r));
        assert!(!Predicate::is(Field::UserId, Uuid::new_v4()).matches(&r));
        assert!(!Predicate::is(Field::Canceled, 0i64).matches(&r));
        assert!(!Predicate::is(Field::SizeId, 1i64).matches(&r));
    }

    #[test]
    fn icontains_ignores_case() {
        let r = row();
        assert!(Predicate::icontains(Field::LocationName, "DRIVEway").matches(&r));
        assert!(!Predicate::icontains(Field::LocationName, "garage").matches(&r));
        assert!(!Predicate::icontains(Field::UserId, "back").matches(&r));
    }

    #[test]
    fn composite_predicates_evaluate_recursively() {
        let r = row();
        let own_active = Predicate::is(Field::UserId, r.user).and(Predicate::is(Field::Canceled, false));
        assert!(own_active.matches(&r));
        let other = Predicate::is(Field::UserId, Uuid::new_v4()).or(Predicate::is(Field::Canceled, true));
        assert!(!other.matches(&r));
    }
}
