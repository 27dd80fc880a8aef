use std::sync::Arc;

use access::{Action, Permission};
use actix_web::{Responder, get, post, web};
use common::{error::Res, http::Success};
use extractor::CurrentCaller;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    dtos::lot::{LocationCreateRequest, LocationUpdateRequest},
    services,
};

#[get("")]
pub async fn get_locations(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    Success::ok(services::location::list_locations(&pool, &caller, Action::List).await?)
}

/// Locations owned by the calling host; an empty list for everyone else.
#[get("/mine")]
pub async fn get_my_locations(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    Permission::for_catalogue(Action::MyLocations).check(&caller, Action::MyLocations)?;
    Success::ok(services::location::list_locations(&pool, &caller, Action::MyLocations).await?)
}

#[get("/{id}")]
pub async fn get_location(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<i64>,
) -> Res<impl Responder> {
    Success::ok(
        services::location::get_location(&pool, &caller, Action::Retrieve, path.into_inner())
            .await?,
    )
}

/// Creates a location owned by the calling host.
///
/// # Input
/// ```json
/// { "name": "Driveway", "address": "1 Elm", "city": "Springfield", "state": "IL", "zip_code": "62701" }
/// ```
///
/// # Output
/// - 201 with the stored location
/// - 400 `{ "error": "Validation failed", "fields": {...} }` on bad fields
/// - 403 when the caller is not a host
#[post("")]
pub async fn post_location(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    req: web::Json<LocationCreateRequest>,
) -> Res<impl Responder> {
    Permission::for_catalogue(Action::Create).check(&caller, Action::Create)?;
    let req = req.into_inner();
    req.validate()?;
    let host_id = caller.require_user()?;
    Success::created(services::location::create_location(&pool, host_id, req).await?)
}

/// Partial update of one of the caller's locations. Foreign ids answer 404.
#[post("/{id}")]
pub async fn post_update_location(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<i64>,
    req: web::Json<LocationUpdateRequest>,
) -> Res<impl Responder> {
    Permission::for_catalogue(Action::Update).check(&caller, Action::Update)?;
    let req = req.into_inner();
    req.validate()?;
    Success::ok(
        services::location::update_location(&pool, &caller, path.into_inner(), req).await?,
    )
}
