use access::{Action, Caller, scope};
use common::error::{AppError, Res};
use db::{
    dtos::lot::{LocationCreateRequest as LocationCreate, LocationUpdateRequest as LocationUpdate},
    models::location::Location,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::lot::{LocationCreateRequest, LocationUpdateRequest};

pub async fn list_locations(pool: &PgPool, caller: &Caller, action: Action) -> Res<Vec<Location>> {
    db::location::list_locations(pool, &scope::location_scope(caller, action)).await
}

/// Fetches a location the caller may act on. Missing and out-of-scope ids are both
/// reported as not found.
pub async fn get_location(
    pool: &PgPool,
    caller: &Caller,
    action: Action,
    location_id: i64,
) -> Res<Location> {
    let visible = scope::location_scope(caller, action);
    if visible.is_never() {
        return Err(not_found());
    }
    db::location::get_location(pool, location_id)
        .await?
        .filter(|location| visible.matches(location))
        .ok_or_else(not_found)
}

fn not_found() -> AppError {
    AppError::NotFound("Location not found".to_string())
}

pub async fn create_location(
    pool: &PgPool,
    host_id: Uuid,
    req: LocationCreateRequest,
) -> Res<Location> {
    let location = db::location::insert_location(
        pool,
        LocationCreate {
            host_id,
            name: req.name,
            description: req.description,
            address: req.address,
            city: req.city,
            state: req.state,
            zip_code: req.zip_code,
        },
    )
    .await?;
    log::info!("Host {} created location {}", host_id, location.id);
    Ok(location)
}

pub async fn update_location(
    pool: &PgPool,
    caller: &Caller,
    location_id: i64,
    req: LocationUpdateRequest,
) -> Res<Location> {
    let location = get_location(pool, caller, Action::Update, location_id).await?;
    db::location::update_location(
        pool,
        location.id,
        LocationUpdate {
            name: req.name,
            description: req.description,
            address: req.address,
            city: req.city,
            state: req.state,
            zip_code: req.zip_code,
        },
    )
    .await
}

/// Whether `location_id` names one of the locations the caller may place spots in.
pub async fn is_own_location(pool: &PgPool, caller: &Caller, location_id: i64) -> Res<bool> {
    let visible = scope::location_scope(caller, Action::Create);
    Ok(db::location::get_location(pool, location_id)
        .await?
        .is_some_and(|location| visible.matches(&location)))
}
