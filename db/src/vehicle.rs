use access::{Field, Predicate};
use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::{
    dtos::reservation::{VehicleCreateRequest, VehicleUpdateRequest},
    filter,
    models::vehicle::Vehicle,
};

fn columns(field: Field) -> Option<&'static str> {
    match field {
        Field::Id => Some("id"),
        Field::UserId => Some("user_id"),
        _ => None,
    }
}

pub async fn list_vehicles<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    scope: &Predicate,
) -> Res<Vec<Vehicle>> {
    if scope.is_never() {
        return Ok(Vec::new());
    }
    filter::select("SELECT * FROM vehicles", scope, columns, "id")?
        .build_query_as::<Vehicle>()
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_vehicle<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    vehicle_id: i64,
) -> Res<Option<Vehicle>> {
    sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
        .bind(vehicle_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_vehicle<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: VehicleCreateRequest,
) -> Res<Vehicle> {
    sqlx::query_as::<_, Vehicle>(
        r#"
        INSERT INTO vehicles (user_id, year, make, model, color, license, description)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(data.year)
    .bind(data.make)
    .bind(data.model)
    .bind(data.color)
    .bind(data.license)
    .bind(data.description)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn update_vehicle<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    vehicle_id: i64,
    data: VehicleUpdateRequest,
) -> Res<Vehicle> {
    sqlx::query_as::<_, Vehicle>(
        r#"
        UPDATE vehicles
        SET year = COALESCE($2, year),
            make = COALESCE($3, make),
            model = COALESCE($4, model),
            color = COALESCE($5, color),
            license = COALESCE($6, license),
            description = COALESCE($7, description)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(vehicle_id)
    .bind(data.year)
    .bind(data.make)
    .bind(data.model)
    .bind(data.color)
    .bind(data.license)
    .bind(data.description)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
