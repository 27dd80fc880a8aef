use access::{Action, Caller, scope, search::SpotSearch};
use common::error::{AppError, Res};
use db::{
    dtos::lot::{SpotCreateRequest as SpotCreate, SpotUpdateRequest as SpotUpdate},
    models::spot::ParkingSpot,
};
use sqlx::PgPool;

use crate::{
    dtos::lot::{SpotCreateRequest, SpotUpdateRequest},
    services::location,
};

pub async fn search_spots(pool: &PgPool, caller: &Caller, search: &SpotSearch) -> Res<Vec<ParkingSpot>> {
    let predicate = scope::spot_scope(caller, Action::List).and(search.predicate());
    db::spot::list_spots(pool, &predicate).await
}

pub async fn list_my_spots(pool: &PgPool, caller: &Caller) -> Res<Vec<ParkingSpot>> {
    db::spot::list_spots(pool, &scope::spot_scope(caller, Action::MySpots)).await
}

pub async fn get_spot(pool: &PgPool, caller: &Caller, action: Action, spot_id: i64) -> Res<ParkingSpot> {
    let visible = scope::spot_scope(caller, action);
    if visible.is_never() {
        return Err(not_found());
    }
    db::spot::get_spot(pool, spot_id)
        .await?
        .filter(|spot| visible.matches(spot))
        .ok_or_else(not_found)
}

fn not_found() -> AppError {
    AppError::NotFound("Parking spot not found".to_string())
}

async fn check_location(pool: &PgPool, caller: &Caller, location_id: i64) -> Res<()> {
    if !location::is_own_location(pool, caller, location_id).await? {
        return Err(AppError::invalid_field(
            "location_id",
            "invalid",
            "must be one of your locations",
        ));
    }
    Ok(())
}

async fn check_size(pool: &PgPool, size_id: i64) -> Res<()> {
    if !db::size::exists_size(pool, size_id).await? {
        return Err(AppError::invalid_field(
            "size_id",
            "invalid",
            "no parking size with this id",
        ));
    }
    Ok(())
}

pub async fn create_spot(pool: &PgPool, caller: &Caller, req: SpotCreateRequest) -> Res<ParkingSpot> {
    check_location(pool, caller, req.location_id).await?;
    check_size(pool, req.size_id).await?;

    let spot_id = db::spot::insert_spot(
        pool,
        SpotCreate {
            location_id: req.location_id,
            size_id: req.size_id,
            actual_width: req.actual_width,
            actual_length: req.actual_length,
            price: req.price,
            notes: req.notes,
        },
    )
    .await?;
    log::info!("Created parking spot {} at location {}", spot_id, req.location_id);

    db::spot::get_spot(pool, spot_id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("Parking spot {} vanished after insert", spot_id)))
}

/// Updates a spot while holding its row lock, so ownership is checked against the
/// row that gets written.
pub async fn update_spot(
    pool: &PgPool,
    caller: &Caller,
    spot_id: i64,
    req: SpotUpdateRequest,
) -> Res<ParkingSpot> {
    let visible = scope::spot_scope(caller, Action::Update);
    if visible.is_never() {
        return Err(not_found());
    }

    let mut tx = pool.begin().await?;
    db::spot::lock_spot(&mut *tx, spot_id)
        .await?
        .filter(|spot| visible.matches(spot))
        .ok_or_else(not_found)?;
    if let Some(location_id) = req.location_id {
        check_location(pool, caller, location_id).await?;
    }
    if let Some(size_id) = req.size_id {
        check_size(pool, size_id).await?;
    }
    db::spot::update_spot(
        &mut *tx,
        spot_id,
        SpotUpdate {
            location_id: req.location_id,
            size_id: req.size_id,
            actual_width: req.actual_width,
            actual_length: req.actual_length,
            price: req.price,
            notes: req.notes,
        },
    )
    .await?;
    let spot = db::spot::get_spot(&mut *tx, spot_id).await?.ok_or_else(not_found)?;
    tx.commit().await?;

    Ok(spot)
}

#[cfg(test)]
mod tests {
    use sqlx::postgres::PgPoolOptions;
    use uuid::Uuid;

    use super::*;

    fn lazy_pool() -> PgPool {
        PgPoolOptions::new()
            .connect_lazy("postgres://localhost/parking_test")
            .unwrap()
    }

    fn empty_update() -> SpotUpdateRequest {
        SpotUpdateRequest {
            location_id: None,
            size_id: None,
            actual_width: None,
            actual_length: None,
            price: None,
            notes: None,
        }
    }

    #[actix_web::test]
    async fn plain_user_cannot_update_a_spot() {
        let caller = Caller::user(Uuid::new_v4());
        let result = update_spot(&lazy_pool(), &caller, 1, empty_update()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
