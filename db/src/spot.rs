use access::{Field, Predicate};
use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::{
    dtos::lot::{SpotCreateRequest, SpotUpdateRequest},
    filter,
    models::spot::ParkingSpot,
};

const SPOT_SELECT: &str = r#"
    SELECT s.id, s.location_id, s.size_id, s.actual_width, s.actual_length, s.price, s.notes,
           s.created_at, l.host_id,
           l.name AS location_name, l.description AS location_description,
           l.address AS location_address, l.city AS location_city, l.state AS location_state
    FROM parking_spots s
    JOIN locations l ON l.id = s.location_id
"#;

fn columns(field: Field) -> Option<&'static str> {
    match field {
        Field::Id => Some("s.id"),
        Field::SizeId => Some("s.size_id"),
        Field::HostId => Some("l.host_id"),
        Field::LocationName => Some("l.name"),
        Field::LocationDescription => Some("l.description"),
        Field::LocationAddress => Some("l.address"),
        Field::LocationState => Some("l.state"),
        Field::LocationCity => Some("l.city"),
        _ => None,
    }
}

pub async fn list_spots<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    scope: &Predicate,
) -> Res<Vec<ParkingSpot>> {
    if scope.is_never() {
        return Ok(Vec::new());
    }
    filter::select(SPOT_SELECT, scope, columns, "s.id")?
        .build_query_as::<ParkingSpot>()
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_spot<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    spot_id: i64,
) -> Res<Option<ParkingSpot>> {
    sqlx::query_as::<_, ParkingSpot>(&format!("{SPOT_SELECT} WHERE s.id = $1"))
        .bind(spot_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

fn lock_query() -> String {
    format!("{SPOT_SELECT} WHERE s.id = $1 FOR UPDATE OF s")
}

/// Like [`get_spot`] but holds a row lock on the spot until the surrounding
/// transaction ends. The joined location row is not locked.
pub async fn lock_spot<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    spot_id: i64,
) -> Res<Option<ParkingSpot>> {
    sqlx::query_as::<_, ParkingSpot>(&lock_query())
        .bind(spot_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn exists_spot<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    spot_id: i64,
) -> Res<bool> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM parking_spots WHERE id = $1)")
        .bind(spot_id)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

/// Inserts the spot and returns its id.
pub async fn insert_spot<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: SpotCreateRequest,
) -> Res<i64> {
    sqlx::query_scalar(
        r#"
        INSERT INTO parking_spots (location_id, size_id, actual_width, actual_length, price, notes)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(data.location_id)
    .bind(data.size_id)
    .bind(data.actual_width)
    .bind(data.actual_length)
    .bind(data.price)
    .bind(data.notes)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn update_spot<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    spot_id: i64,
    data: SpotUpdateRequest,
) -> Res<()> {
    sqlx::query(
        r#"
        UPDATE parking_spots
        SET location_id = COALESCE($2, location_id),
            size_id = COALESCE($3, size_id),
            actual_width = COALESCE($4, actual_width),
            actual_length = COALESCE($5, actual_length),
            price = COALESCE($6, price),
            notes = COALESCE($7, notes)
        WHERE id = $1
        "#,
    )
    .bind(spot_id)
    .bind(data.location_id)
    .bind(data.size_id)
    .bind(data.actual_width)
    .bind(data.actual_length)
    .bind(data.price)
    .bind(data.notes)
    .execute(executor)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use access::search::SpotSearch;

    use super::*;

    #[test]
    fn search_reaches_location_columns_through_the_join() {
        let search = SpotSearch {
            location: Some("driveway".to_string()),
            size: Some("4".to_string()),
        };
        let qb = filter::select(SPOT_SELECT, &search.predicate(), columns, "s.id").unwrap();
        let sql = qb.sql();
        assert!(sql.contains("JOIN locations l ON l.id = s.location_id"));
        assert!(sql.ends_with(
            "WHERE ((l.name ILIKE $1 OR l.description ILIKE $2 OR l.address ILIKE $3 \
             OR l.state ILIKE $4 OR l.city ILIKE $5) AND s.size_id = $6) ORDER BY s.id"
        ));
    }

    #[test]
    fn lock_covers_only_the_spot_row() {
        assert!(lock_query().ends_with("WHERE s.id = $1 FOR UPDATE OF s"));
    }

    #[test]
    fn every_searched_field_has_a_column() {
        for field in [
            Field::LocationName,
            Field::LocationDescription,
            Field::LocationAddress,
            Field::LocationState,
            Field::LocationCity,
            Field::SizeId,
            Field::HostId,
        ] {
            assert!(columns(field).is_some(), "{field:?}");
        }
    }
}
