use actix_web::{Responder, post, web};
use common::env_config::Config;
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt;
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

use crate::dtos::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::services;

/// Registers a new user with email and password authentication.
///
/// # Input
/// - `req`: JSON payload containing registration information (email, password, names)
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: Returns the created user object with 201 Created status
/// - Error: Returns 400 Bad Request if the email already exists or a field is invalid
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/auth/register', {
///   method: 'POST',
///   headers: { 'Content-Type': 'application/json' },
///   body: JSON.stringify({
///     email: 'driver@example.com',
///     password: 'securepassword',
///     first_name: 'Dana',
///     last_name: 'Park'
///   })
/// });
/// ```
#[post("/register")]
pub async fn post_register(
    req: web::Json<RegisterRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let req = req.into_inner();
    req.validate()?;
    let pg_pool: &PgPool = &pool;
    if services::user::exists_user_by_email(pg_pool, &req.email).await? {
        return Err(AppError::BadRequest("Email already exists".to_string()));
    }
    let user = services::auth::create_user_with_credentials(pg_pool, req).await?;
    Success::created(user)
}

/// Authenticates a user with email and password.
///
/// # Input
/// - `login_data`: JSON payload containing email and password
/// - `config`: Application configuration for JWT generation
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: Returns an auth response with JWT token and user details
/// - Error: Returns 401 Unauthorized for invalid credentials
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/auth/login', {
///   method: 'POST',
///   headers: { 'Content-Type': 'application/json' },
///   body: JSON.stringify({ email: 'driver@example.com', password: 'securepassword' })
/// });
/// if (response.ok) {
///   const { token } = await response.json();
///   localStorage.setItem('authToken', token);
/// }
/// ```
#[post("/login")]
pub async fn post_login(
    login_data: web::Json<LoginRequest>,
    config: web::Data<Arc<Config>>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let user = services::auth::authenticate_user(pg_pool, &login_data.into_inner()).await?;
    let token = jwt::generate_jwt(user.id, &config.jwt_config)?;
    Success::ok(AuthResponse { token, user })
}
