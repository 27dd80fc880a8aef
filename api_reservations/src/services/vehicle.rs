use access::{Caller, scope};
use common::error::{AppError, Res};
use db::{
    dtos::reservation::{VehicleCreateRequest as VehicleCreate, VehicleUpdateRequest as VehicleUpdate},
    models::vehicle::Vehicle,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::vehicle::{VehicleCreateRequest, VehicleUpdateRequest};

pub async fn list_vehicles(pool: &PgPool, caller: &Caller) -> Res<Vec<Vehicle>> {
    db::vehicle::list_vehicles(pool, &scope::vehicle_scope(caller)).await
}

/// The caller's vehicle `vehicle_id`, if it exists and belongs to the caller.
pub async fn find_own_vehicle(pool: &PgPool, caller: &Caller, vehicle_id: i64) -> Res<Option<Vehicle>> {
    let visible = scope::vehicle_scope(caller);
    if visible.is_never() {
        return Ok(None);
    }
    Ok(db::vehicle::get_vehicle(pool, vehicle_id)
        .await?
        .filter(|vehicle| visible.matches(vehicle)))
}

pub async fn get_vehicle(pool: &PgPool, caller: &Caller, vehicle_id: i64) -> Res<Vehicle> {
    find_own_vehicle(pool, caller, vehicle_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))
}

pub async fn create_vehicle(pool: &PgPool, user_id: Uuid, req: VehicleCreateRequest) -> Res<Vehicle> {
    db::vehicle::insert_vehicle(
        pool,
        VehicleCreate {
            user_id,
            year: req.year,
            make: req.make,
            model: req.model,
            color: req.color,
            license: req.license,
            description: req.description,
        },
    )
    .await
}

pub async fn update_vehicle(
    pool: &PgPool,
    caller: &Caller,
    vehicle_id: i64,
    req: VehicleUpdateRequest,
) -> Res<Vehicle> {
    let vehicle = get_vehicle(pool, caller, vehicle_id).await?;
    db::vehicle::update_vehicle(
        pool,
        vehicle.id,
        VehicleUpdate {
            year: req.year,
            make: req.make,
            model: req.model,
            color: req.color,
            license: req.license,
            description: req.description,
        },
    )
    .await
}
