use access::{Field, Predicate};
use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::{
    dtos::lot::{LocationCreateRequest, LocationUpdateRequest},
    filter,
    models::location::Location,
};

const LOCATION_SELECT: &str = "SELECT * FROM locations";

fn columns(field: Field) -> Option<&'static str> {
    match field {
        Field::Id => Some("id"),
        Field::HostId => Some("host_id"),
        Field::LocationName => Some("name"),
        Field::LocationDescription => Some("description"),
        Field::LocationAddress => Some("address"),
        Field::LocationState => Some("state"),
        Field::LocationCity => Some("city"),
        _ => None,
    }
}

pub async fn list_locations<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    scope: &Predicate,
) -> Res<Vec<Location>> {
    if scope.is_never() {
        return Ok(Vec::new());
    }
    filter::select(LOCATION_SELECT, scope, columns, "id")?
        .build_query_as::<Location>()
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_location<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    location_id: i64,
) -> Res<Option<Location>> {
    sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = $1")
        .bind(location_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_location<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: LocationCreateRequest,
) -> Res<Location> {
    sqlx::query_as::<_, Location>(
        r#"
        INSERT INTO locations (host_id, name, description, address, city, state, zip_code)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(data.host_id)
    .bind(data.name)
    .bind(data.description)
    .bind(data.address)
    .bind(data.city)
    .bind(data.state)
    .bind(data.zip_code)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn update_location<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    location_id: i64,
    data: LocationUpdateRequest,
) -> Res<Location> {
    sqlx::query_as::<_, Location>(
        r#"
        UPDATE locations
        SET name = COALESCE($2, name),
            description = COALESCE($3, description),
            address = COALESCE($4, address),
            city = COALESCE($5, city),
            state = COALESCE($6, state),
            zip_code = COALESCE($7, zip_code)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(location_id)
    .bind(data.name)
    .bind(data.description)
    .bind(data.address)
    .bind(data.city)
    .bind(data.state)
    .bind(data.zip_code)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
