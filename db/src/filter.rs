use access::{Field, Predicate, predicate::Value};
use common::error::{AppError, Res};
use sqlx::{Postgres, QueryBuilder};

/// Maps scope fields to the column expressions of one query.
pub type Columns = fn(Field) -> Option<&'static str>;

/// Escapes `%`, `_` and the escape character itself for a `LIKE` pattern.
pub fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn column(columns: Columns, field: Field) -> Res<&'static str> {
    columns(field).ok_or_else(|| {
        AppError::Internal(format!("Field {:?} cannot be filtered in this query", field))
    })
}

fn push_value(qb: &mut QueryBuilder<'_, Postgres>, value: Value) {
    match value {
        Value::Uuid(v) => qb.push_bind(v),
        Value::Int(v) => qb.push_bind(v),
        Value::Bool(v) => qb.push_bind(v),
    };
}

fn push_group(
    qb: &mut QueryBuilder<'_, Postgres>,
    predicates: &[Predicate],
    separator: &str,
    columns: Columns,
) -> Res<()> {
    qb.push("(");
    for (i, predicate) in predicates.iter().enumerate() {
        if i > 0 {
            qb.push(separator);
        }
        push_predicate(qb, predicate, columns)?;
    }
    qb.push(")");
    Ok(())
}

pub fn push_predicate(
    qb: &mut QueryBuilder<'_, Postgres>,
    predicate: &Predicate,
    columns: Columns,
) -> Res<()> {
    match predicate {
        Predicate::Always => {
            qb.push("TRUE");
        }
        Predicate::Never => {
            qb.push("FALSE");
        }
        Predicate::Eq(field, value) => {
            qb.push(column(columns, *field)?).push(" = ");
            push_value(qb, *value);
        }
        Predicate::IContains(field, needle) => {
            qb.push(column(columns, *field)?)
                .push(" ILIKE ")
                .push_bind(format!("%{}%", escape_like(needle)));
        }
        Predicate::All(predicates) => push_group(qb, predicates, " AND ", columns)?,
        Predicate::Any(predicates) => push_group(qb, predicates, " OR ", columns)?,
    }
    Ok(())
}

/// Appends ` WHERE ...` unless the predicate lets everything through.
pub fn push_where(
    qb: &mut QueryBuilder<'_, Postgres>,
    predicate: &Predicate,
    columns: Columns,
) -> Res<()> {
    if *predicate == Predicate::Always {
        return Ok(());
    }
    qb.push(" WHERE ");
    push_predicate(qb, predicate, columns)
}

/// `base` filtered by `predicate` and ordered by `order_by`.
pub fn select<'args>(
    base: &str,
    predicate: &Predicate,
    columns: Columns,
    order_by: &str,
) -> Res<QueryBuilder<'args, Postgres>> {
    let mut qb = QueryBuilder::new(base);
    push_where(&mut qb, predicate, columns)?;
    qb.push(" ORDER BY ").push(order_by);
    Ok(qb)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn columns(field: Field) -> Option<&'static str> {
        match field {
            Field::UserId => Some("r.user_id"),
            Field::Canceled => Some("r.canceled"),
            Field::LocationName => Some("l.name"),
            Field::LocationCity => Some("l.city"),
            _ => None,
        }
    }

    fn render(predicate: &Predicate) -> Res<String> {
        let qb = select("SELECT * FROM reservations r", predicate, columns, "r.id")?;
        Ok(qb.sql().to_string())
    }

    #[test]
    fn always_adds_no_where_clause() {
        assert_eq!(
            render(&Predicate::Always).unwrap(),
            "SELECT * FROM reservations r ORDER BY r.id"
        );
    }

    #[test]
    fn conjunction_binds_each_value() {
        let predicate = Predicate::is(Field::Canceled, false).and(Predicate::is(Field::UserId, Uuid::new_v4()));
        assert_eq!(
            render(&predicate).unwrap(),
            "SELECT * FROM reservations r WHERE (r.canceled = $1 AND r.user_id = $2) ORDER BY r.id"
        );
    }

    #[test]
    fn nested_disjunction_is_parenthesised() {
        let text = Predicate::icontains(Field::LocationName, "drive")
            .or(Predicate::icontains(Field::LocationCity, "drive"));
        let predicate = Predicate::is(Field::Canceled, false).and(text);
        assert_eq!(
            render(&predicate).unwrap(),
            "SELECT * FROM reservations r WHERE (r.canceled = $1 AND (l.name ILIKE $2 OR l.city ILIKE $3)) ORDER BY r.id"
        );
    }

    #[test]
    fn never_renders_false() {
        assert_eq!(
            render(&Predicate::Never).unwrap(),
            "SELECT * FROM reservations r WHERE FALSE ORDER BY r.id"
        );
    }

    #[test]
    fn unmapped_field_is_an_internal_error() {
        assert!(matches!(
            render(&Predicate::is(Field::SizeId, 1i64)),
            Err(AppError::Internal(_))
        ));
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("driveway"), "driveway");
    }
}
