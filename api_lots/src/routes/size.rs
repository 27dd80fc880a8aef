use std::sync::Arc;

use access::{Action, Permission};
use actix_web::{Responder, get, post, web};
use common::{error::Res, http::Success};
use extractor::CurrentCaller;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    dtos::lot::{SizeCreateRequest, SizeUpdateRequest},
    services,
};

#[get("")]
pub async fn get_sizes(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    Success::ok(services::size::list_sizes(&pool).await?)
}

#[get("/{id}")]
pub async fn get_size(pool: web::Data<Arc<PgPool>>, path: web::Path<i64>) -> Res<impl Responder> {
    Success::ok(services::size::get_size(&pool, path.into_inner()).await?)
}

#[post("")]
pub async fn post_size(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    req: web::Json<SizeCreateRequest>,
) -> Res<impl Responder> {
    Permission::for_catalogue(Action::Create).check(&caller, Action::Create)?;
    let req = req.into_inner();
    req.validate()?;
    Success::created(services::size::create_size(&pool, req).await?)
}

#[post("/{id}")]
pub async fn post_update_size(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<i64>,
    req: web::Json<SizeUpdateRequest>,
) -> Res<impl Responder> {
    Permission::for_catalogue(Action::Update).check(&caller, Action::Update)?;
    let req = req.into_inner();
    req.validate()?;
    Success::ok(services::size::update_size(&pool, path.into_inner(), req).await?)
}
