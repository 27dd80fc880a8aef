use std::sync::Arc;

use access::{Action, Permission};
use actix_web::{Responder, get, post, web};
use common::{error::Res, http::Success};
use extractor::CurrentCaller;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{dtos::employment::BecomeAttendantRequest, services::employment};

#[get("")]
pub async fn get_attendants(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    Permission::for_staff(Action::List).check(&caller, Action::List)?;
    Success::ok(employment::list_attendants(&pool, None).await?)
}

/// Attendants employed by the calling host.
#[get("/mine")]
pub async fn get_my_attendants(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    Permission::for_staff(Action::MyAttendants).check(&caller, Action::MyAttendants)?;
    Success::ok(employment::list_attendants(&pool, caller.host_id()).await?)
}

#[get("/{id}")]
pub async fn get_attendant(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<Uuid>,
) -> Res<impl Responder> {
    Permission::for_staff(Action::Retrieve).check(&caller, Action::Retrieve)?;
    Success::ok(employment::get_attendant(&pool, path.into_inner()).await?)
}

/// Makes the caller an attendant of the host named by `host_pk`.
#[post("")]
pub async fn post_become_attendant(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    req: web::Json<BecomeAttendantRequest>,
) -> Res<impl Responder> {
    Permission::for_staff(Action::Create).check(&caller, Action::Create)?;
    employment::become_attendant(&pool, &caller, req.host_pk.as_deref())
        .await?
        .respond()
}
