use std::sync::Arc;

use access::{Action, Permission};
use actix_web::{HttpResponse, Responder, get, post, web};
use common::{error::Res, http::Success};
use extractor::CurrentCaller;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::{dtos::user::UserUpdateRequest, services};

#[get("")]
pub async fn get_users(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    Permission::Authenticated.check(&caller, Action::List)?;
    Success::ok(services::user::list_users(&pool).await?)
}

/// Profile of the caller with its host and attendant flags.
///
/// # Output
/// - Success: `{ user, host, attendant, host_data?, attendant_data? }`
/// - Anonymous callers get 404 `{ "error": "not found" }`
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/users/me', {
///   headers: { 'Authorization': `Bearer ${localStorage.getItem('authToken')}` }
/// });
/// const { user, host, attendant } = await response.json();
/// ```
#[get("/me")]
pub async fn get_me(caller: CurrentCaller, pool: web::Data<Arc<PgPool>>) -> Res<HttpResponse> {
    let Some(user_id) = caller.user_id() else {
        return Ok(HttpResponse::NotFound().json(json!({ "error": "not found" })));
    };
    let me = services::user::get_me(&pool, user_id, &caller).await?;
    Ok(HttpResponse::Ok().json(me))
}

/// Partial update of the caller's own profile.
#[post("/me")]
pub async fn post_me(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    req: web::Json<UserUpdateRequest>,
) -> Res<impl Responder> {
    let user_id = caller.require_user()?;
    let req = req.into_inner();
    req.validate()?;
    Success::ok(services::user::update_user(&pool, user_id, req).await?)
}

#[get("/{id}")]
pub async fn get_user(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<Uuid>,
) -> Res<impl Responder> {
    Permission::Authenticated.check(&caller, Action::Retrieve)?;
    Success::ok(services::user::get_user_by_id(&pool, path.into_inner()).await?)
}
