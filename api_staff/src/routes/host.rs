use std::sync::Arc;

use access::{Action, Permission};
use actix_web::{Responder, get, post, web};
use common::{error::Res, http::Success};
use extractor::CurrentCaller;
use sqlx::PgPool;
use uuid::Uuid;

use crate::services::employment;

#[get("")]
pub async fn get_hosts(caller: CurrentCaller, pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    Permission::for_staff(Action::List).check(&caller, Action::List)?;
    Success::ok(employment::list_hosts(&pool).await?)
}

#[get("/{id}")]
pub async fn get_host(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<Uuid>,
) -> Res<impl Responder> {
    Permission::for_staff(Action::Retrieve).check(&caller, Action::Retrieve)?;
    Success::ok(employment::get_host(&pool, path.into_inner()).await?)
}

/// Makes the caller a host.
///
/// # Output
/// - `{ "success": true, "host": {...} }`
/// - `{ "success": false, "message": "you are already an attendant" }` and the like when
///   the caller already holds a role or the record could not be written
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/hosts', {
///   method: 'POST',
///   headers: { 'Authorization': `Bearer ${localStorage.getItem('authToken')}` }
/// });
/// const { success, message } = await response.json();
/// ```
#[post("")]
pub async fn post_become_host(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    Permission::for_staff(Action::Create).check(&caller, Action::Create)?;
    employment::become_host(&pool, &caller).await?.respond()
}

/// Fires one of the caller's attendants. Answers `success: false` for anyone who is
/// not the caller's employee.
#[post("/{attendant_id}/fire")]
pub async fn post_fire(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<Uuid>,
) -> Res<impl Responder> {
    Permission::for_staff(Action::Fire).check(&caller, Action::Fire)?;
    let host_id = caller.require_user()?;
    employment::fire(&pool, host_id, path.into_inner())
        .await?
        .respond()
}
