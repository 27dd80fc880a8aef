use common::error::{AppError, Res};
use db::{
    dtos::lot::{SizeCreateRequest as SizeCreate, SizeUpdateRequest as SizeUpdate},
    models::size::ParkingSize,
};
use sqlx::PgPool;

use crate::dtos::lot::{SizeCreateRequest, SizeUpdateRequest};

pub async fn list_sizes(pool: &PgPool) -> Res<Vec<ParkingSize>> {
    db::size::list_sizes(pool).await
}

pub async fn get_size(pool: &PgPool, size_id: i64) -> Res<ParkingSize> {
    db::size::get_size(pool, size_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Parking size not found".to_string()))
}

pub async fn create_size(pool: &PgPool, req: SizeCreateRequest) -> Res<ParkingSize> {
    let size = db::size::insert_size(
        pool,
        SizeCreate {
            name: req.name,
            description: req.description,
            min_width: req.min_width,
            min_length: req.min_length,
        },
    )
    .await?;
    log::info!("Created parking size {} ({})", size.id, size.name);
    Ok(size)
}

pub async fn update_size(pool: &PgPool, size_id: i64, req: SizeUpdateRequest) -> Res<ParkingSize> {
    db::size::update_size(
        pool,
        size_id,
        SizeUpdate {
            name: req.name,
            description: req.description,
            min_width: req.min_width,
            min_length: req.min_length,
        },
    )
    .await?
    .ok_or_else(|| AppError::NotFound("Parking size not found".to_string()))
}
