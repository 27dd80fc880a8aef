use access::{Caller, Role};
use common::error::{AppError, Res};
use db::{dtos::user::UserUpdateRequest as UserUpdate, models::user::User};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::user::{MeResponse, UserUpdateRequest};

pub async fn exists_user_by_email(pool: &PgPool, email: &str) -> Res<bool> {
    db::user::exists_user_by_email(pool, email).await
}

pub async fn list_users(pool: &PgPool) -> Res<Vec<User>> {
    db::user::list_users(pool).await
}

pub async fn get_user_by_id(pool: &PgPool, user_id: Uuid) -> Res<User> {
    db::user::get_user_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

pub async fn update_user(pool: &PgPool, user_id: Uuid, req: UserUpdateRequest) -> Res<User> {
    db::user::update_user(
        pool,
        user_id,
        UserUpdate {
            first_name: req.first_name,
            last_name: req.last_name,
        },
    )
    .await
}

/// Profile of an authenticated caller together with its role records.
pub async fn get_me(pool: &PgPool, user_id: Uuid, caller: &Caller) -> Res<MeResponse> {
    let user = get_user_by_id(pool, user_id).await?;
    let role = caller.role();

    let host_data = match role {
        Role::Host => db::role::get_host(pool, user_id).await?,
        _ => None,
    };
    let attendant_data = match role {
        Role::Attendant { .. } => db::role::get_attendant(pool, user_id).await?,
        _ => None,
    };

    Ok(MeResponse {
        user,
        host: role.is_host(),
        attendant: role.is_attendant(),
        host_data,
        attendant_data,
    })
}
