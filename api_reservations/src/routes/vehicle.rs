use std::sync::Arc;

use access::{Action, Permission};
use actix_web::{Responder, get, post, web};
use common::{error::Res, http::Success};
use extractor::CurrentCaller;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    dtos::vehicle::{VehicleCreateRequest, VehicleUpdateRequest},
    services,
};

#[get("")]
pub async fn get_vehicles(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    Permission::Authenticated.check(&caller, Action::List)?;
    Success::ok(services::vehicle::list_vehicles(&pool, &caller).await?)
}

#[get("/{id}")]
pub async fn get_vehicle(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<i64>,
) -> Res<impl Responder> {
    Permission::Authenticated.check(&caller, Action::Retrieve)?;
    Success::ok(services::vehicle::get_vehicle(&pool, &caller, path.into_inner()).await?)
}

#[post("")]
pub async fn post_vehicle(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    req: web::Json<VehicleCreateRequest>,
) -> Res<impl Responder> {
    let user_id = caller.require_user()?;
    let req = req.into_inner();
    req.validate()?;
    Success::created(services::vehicle::create_vehicle(&pool, user_id, req).await?)
}

#[post("/{id}")]
pub async fn post_update_vehicle(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<i64>,
    req: web::Json<VehicleUpdateRequest>,
) -> Res<impl Responder> {
    Permission::Authenticated.check(&caller, Action::Update)?;
    let req = req.into_inner();
    req.validate()?;
    Success::ok(
        services::vehicle::update_vehicle(&pool, &caller, path.into_inner(), req).await?,
    )
}
