use std::sync::Arc;

use access::{Action, Permission, Transition};
use actix_web::{Responder, get, post, web};
use common::{error::Res, http::Success};
use db::models::reservation::Reservation;
use extractor::CurrentCaller;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    dtos::reservation::{ReservationCreateRequest, ReservationResponse, ReservationUpdateRequest},
    services,
};

fn to_response(reservations: Vec<Reservation>) -> Vec<ReservationResponse> {
    reservations.into_iter().map(ReservationResponse::from).collect()
}

async fn list(
    caller: CurrentCaller,
    pool: &PgPool,
    action: Action,
) -> Res<Vec<ReservationResponse>> {
    Permission::for_reservation(action).check(&caller, action)?;
    let reservations = services::reservation::list_reservations(pool, &caller, action).await?;
    Ok(to_response(reservations))
}

/// The caller's own active reservations.
#[get("")]
pub async fn get_reservations(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    Success::ok(list(caller, &pool, Action::List).await?)
}

/// Active reservations on the calling host's spots.
#[get("/mine")]
pub async fn get_my_reservations(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    Success::ok(list(caller, &pool, Action::MyReservations).await?)
}

/// Active reservations on the spots of the calling attendant's boss.
#[get("/boss")]
pub async fn get_boss_reservations(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    Success::ok(list(caller, &pool, Action::BossReservations).await?)
}

/// Pending reservations the caller can confirm.
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/reservations/needs-confirmation', {
///   headers: { 'Authorization': `Bearer ${localStorage.getItem('authToken')}` }
/// });
/// const pending = await response.json();
/// ```
#[get("/needs-confirmation")]
pub async fn get_needs_confirmation(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    Permission::for_reservation(Action::NeedsConfirmation)
        .check(&caller, Action::NeedsConfirmation)?;
    Success::ok(to_response(
        services::reservation::needs_confirmation(&pool, &caller).await?,
    ))
}

/// One of the caller's reservations, canceled ones included.
#[get("/{id}")]
pub async fn get_reservation(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<i64>,
) -> Res<impl Responder> {
    Permission::for_reservation(Action::Retrieve).check(&caller, Action::Retrieve)?;
    let reservation = services::reservation::get_reservation(
        &pool,
        &caller,
        Action::Retrieve,
        path.into_inner(),
    )
    .await?;
    Success::ok(ReservationResponse::from(reservation))
}

/// Books a parking spot for the caller.
///
/// # Input
/// ```json
/// {
///   "spot_id": 3,
///   "vehicle_id": 7,
///   "date": "2025-03-01T09:00:00Z",
///   "user_charge": "12.50",
///   "fee_amount": "1.25",
///   "host_income": "11.25"
/// }
/// ```
///
/// # Output
/// - 201 with the reservation, `confirmed` and `canceled` both false
/// - 400 with `fields.spot_id` or `fields.vehicle_id` when the spot is unknown or the
///   vehicle is not the caller's
#[post("")]
pub async fn post_reservation(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    req: web::Json<ReservationCreateRequest>,
) -> Res<impl Responder> {
    Permission::for_reservation(Action::Create).check(&caller, Action::Create)?;
    let req = req.into_inner();
    req.validate()?;
    let user_id = caller.require_user()?;
    let reservation =
        services::reservation::create_reservation(&pool, &caller, user_id, req).await?;
    Success::created(ReservationResponse::from(reservation))
}

#[post("/{id}")]
pub async fn post_update_reservation(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<i64>,
    req: web::Json<ReservationUpdateRequest>,
) -> Res<impl Responder> {
    Permission::for_reservation(Action::Update).check(&caller, Action::Update)?;
    let req = req.into_inner();
    req.validate()?;
    let reservation =
        services::reservation::update_reservation(&pool, &caller, path.into_inner(), req).await?;
    Success::ok(ReservationResponse::from(reservation))
}

/// Marks a reservation on the caller's (or the caller's boss's) spots as confirmed.
///
/// # Output
/// - `{ "success": true, "message": "you have confirmed reservation number: 12" }`
/// - `{ "success": true, "message": "you have already confirmed this reservation" }`
/// - 404 for reservations outside the caller's scope
#[post("/{id}/confirm")]
pub async fn post_confirm(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<i64>,
) -> Res<impl Responder> {
    Permission::for_reservation(Action::Confirm).check(&caller, Action::Confirm)?;
    services::reservation::transition(&pool, &caller, path.into_inner(), Transition::Confirm)
        .await?
        .respond()
}

#[post("/{id}/cancel")]
pub async fn post_cancel(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<i64>,
) -> Res<impl Responder> {
    Permission::for_reservation(Action::Cancel).check(&caller, Action::Cancel)?;
    services::reservation::transition(&pool, &caller, path.into_inner(), Transition::Cancel)
        .await?
        .respond()
}
