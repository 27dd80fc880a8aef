use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::{
    dtos::lot::{SizeCreateRequest, SizeUpdateRequest},
    models::size::ParkingSize,
};

pub async fn list_sizes<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<ParkingSize>> {
    sqlx::query_as::<_, ParkingSize>("SELECT * FROM parking_sizes ORDER BY id")
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_size<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    size_id: i64,
) -> Res<Option<ParkingSize>> {
    sqlx::query_as::<_, ParkingSize>("SELECT * FROM parking_sizes WHERE id = $1")
        .bind(size_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn exists_size<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    size_id: i64,
) -> Res<bool> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM parking_sizes WHERE id = $1)")
        .bind(size_id)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_size<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: SizeCreateRequest,
) -> Res<ParkingSize> {
    sqlx::query_as::<_, ParkingSize>(
        r#"
        INSERT INTO parking_sizes (name, description, min_width, min_length)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(data.name)
    .bind(data.description)
    .bind(data.min_width)
    .bind(data.min_length)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn update_size<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    size_id: i64,
    data: SizeUpdateRequest,
) -> Res<Option<ParkingSize>> {
    sqlx::query_as::<_, ParkingSize>(
        r#"
        UPDATE parking_sizes
        SET name = COALESCE($2, name),
            description = COALESCE($3, description),
            min_width = COALESCE($4, min_width),
            min_length = COALESCE($5, min_length)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(size_id)
    .bind(data.name)
    .bind(data.description)
    .bind(data.min_width)
    .bind(data.min_length)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}
