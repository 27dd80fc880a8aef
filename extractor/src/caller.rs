use std::{ops::Deref, sync::Arc};

use access::{Caller, Role};
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web};
use common::{
    error::{AppError, Res},
    jwt,
};
use futures::future::LocalBoxFuture;
use sqlx::PgPool;
use uuid::Uuid;

/// The caller of the current request, with its role loaded from the database.
///
/// No token means an anonymous caller; a token that failed validation rejects the
/// request with 401 before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct CurrentCaller(pub Caller);

impl CurrentCaller {
    pub fn into_inner(self) -> Caller {
        self.0
    }
}

impl Deref for CurrentCaller {
    type Target = Caller;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

async fn resolve(pool: &PgPool, user_id: Uuid) -> Res<Caller> {
    let role = match db::role::get_role(pool, user_id).await? {
        Some(record) => record.role()?,
        None => Role::User,
    };
    Ok(Caller::Authenticated { user_id, role })
}

impl FromRequest for CurrentCaller {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let claims = jwt::claims_from_extensions(&req.extensions());
        let pool = req.app_data::<web::Data<Arc<PgPool>>>().cloned();

        Box::pin(async move {
            let Some(claims) = claims? else {
                return Ok(CurrentCaller(Caller::Anonymous));
            };
            let pool = pool
                .ok_or_else(|| AppError::Internal("Database pool is not configured".to_string()))?;
            resolve(&pool, claims.user_id).await.map(CurrentCaller)
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, HttpResponse, Responder, get, http::StatusCode, test};
    use common::env_config::{Config, JwtConfig};

    use super::*;

    #[get("/whoami")]
    async fn whoami(caller: CurrentCaller) -> impl Responder {
        HttpResponse::Ok().body(if caller.is_authenticated() {
            "authenticated"
        } else {
            "anonymous"
        })
    }

    fn config() -> Arc<Config> {
        Arc::new(Config {
            environment: "development".to_string(),
            database_url: "postgres://localhost/parking_test".to_string(),
            jwt_config: JwtConfig {
                secret: "test-secret".to_string(),
                expiration_hours: 1,
            },
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            num_workers: 1,
            cors_allowed_origin: "http://localhost:3000".to_string(),
            console_logging_enabled: false,
            log_level: log::LevelFilter::Off,
            log_file: "parking.log".to_string(),
        })
    }

    #[actix_web::test]
    async fn request_without_token_is_anonymous() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config()))
                .wrap(crate::middleware())
                .service(whoami),
        )
        .await;
        let req = test::TestRequest::get().uri("/whoami").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "anonymous");
    }

    #[actix_web::test]
    async fn invalid_token_is_rejected_before_the_handler() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config()))
                .wrap(crate::middleware())
                .service(whoami),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn non_bearer_authorization_is_ignored() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config()))
                .wrap(crate::middleware())
                .service(whoami),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "anonymous");
    }
}
