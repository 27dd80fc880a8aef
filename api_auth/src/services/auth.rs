use common::{
    error::{AppError, Res},
    misc,
};
use db::{
    dtos::user::UserCreateRequest,
    models::user::{AuthCredentials, User},
};
use sqlx::PgPool;

use crate::dtos::auth::{LoginRequest, RegisterRequest};

/// Authenticates existing user.
/// Unknown emails and wrong passwords are both answered with 401.
pub async fn authenticate_user(pool: &PgPool, login_data: &LoginRequest) -> Res<User> {
    let invalid = || AppError::Unauthorized("Invalid credentials".to_string());

    let (user, credentials) = db::user::get_user_with_password_hash(pool, &login_data.email)
        .await?
        .ok_or_else(invalid)?;

    if misc::verify_password(&login_data.password, &credentials.password_hash)? {
        Ok(user)
    } else {
        Err(invalid())
    }
}

/// Inserts user record and credentials to the database.
pub async fn create_user_with_credentials(pool: &PgPool, req: RegisterRequest) -> Res<User> {
    let password_hash = misc::hash_password(&req.password)?;

    let mut tx = pool.begin().await?;

    // insert user
    let user = db::user::insert_user(
        &mut *tx,
        UserCreateRequest {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
        },
    )
    .await?;

    // insert credentials
    db::user::insert_user_with_credentials(
        &mut *tx,
        AuthCredentials {
            user_id: user.id,
            password_hash,
        },
    )
    .await?;

    tx.commit().await?;
    log::info!("Registered user {}", user.id);
    Ok(user)
}
