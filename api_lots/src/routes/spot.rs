use std::sync::Arc;

use access::{Action, Permission, search::SpotSearch};
use actix_web::{Responder, get, post, web};
use common::{error::Res, http::Success};
use extractor::CurrentCaller;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    dtos::lot::{SpotCreateRequest, SpotUpdateRequest},
    services,
};

/// Searches parking spots.
///
/// # Query
/// - `location`: free text; words of four or more characters are matched against the
///   location's name, description, address, state and city
/// - `size`: parking size id
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/spots?location=elm%20driveway&size=2');
/// const spots = await response.json();
/// ```
#[get("")]
pub async fn get_spots(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    search: web::Query<SpotSearch>,
) -> Res<impl Responder> {
    Success::ok(services::spot::search_spots(&pool, &caller, &search).await?)
}

#[get("/mine")]
pub async fn get_my_spots(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    Permission::for_catalogue(Action::MySpots).check(&caller, Action::MySpots)?;
    Success::ok(services::spot::list_my_spots(&pool, &caller).await?)
}

#[get("/{id}")]
pub async fn get_spot(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<i64>,
) -> Res<impl Responder> {
    Success::ok(
        services::spot::get_spot(&pool, &caller, Action::Retrieve, path.into_inner()).await?,
    )
}

#[post("")]
pub async fn post_spot(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    req: web::Json<SpotCreateRequest>,
) -> Res<impl Responder> {
    Permission::for_catalogue(Action::Create).check(&caller, Action::Create)?;
    let req = req.into_inner();
    req.validate()?;
    Success::created(services::spot::create_spot(&pool, &caller, req).await?)
}

#[post("/{id}")]
pub async fn post_update_spot(
    caller: CurrentCaller,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<i64>,
    req: web::Json<SpotUpdateRequest>,
) -> Res<impl Responder> {
    Permission::for_catalogue(Action::Update).check(&caller, Action::Update)?;
    let req = req.into_inner();
    req.validate()?;
    Success::ok(services::spot::update_spot(&pool, &caller, path.into_inner(), req).await?)
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use common::{
        env_config::{Config, JwtConfig},
        jwt::generate_jwt,
    };
    use serde_json::{Value, json};
    use sqlx::postgres::PgPoolOptions;
    use uuid::Uuid;

    use super::*;

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

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(config()))
                    .app_data(web::Data::new(Arc::new(
                        PgPoolOptions::new()
                            .connect_lazy("postgres://localhost/parking_test")
                            .unwrap(),
                    )))
                    .app_data(common::http::json_config())
                    .wrap(extractor::middleware())
                    .service(crate::mount_sizes())
                    .service(crate::mount_locations())
                    .service(crate::mount_spots()),
            )
            .await
        };
    }

    fn spot_body() -> Value {
        json!({
            "location_id": 1,
            "size_id": 1,
            "actual_width": 9.0,
            "actual_length": 18.0,
            "price": "5.00",
            "notes": "by the gate",
        })
    }

    #[actix_web::test]
    async fn anonymous_caller_cannot_create_a_spot() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/spots")
            .set_json(spot_body())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn anonymous_caller_cannot_create_a_location() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/locations")
            .set_json(json!({
                "name": "Driveway",
                "address": "1 Elm",
                "city": "Springfield",
                "state": "IL",
                "zip_code": "62701",
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn my_spots_requires_a_token() {
        let app = app!();
        let req = test::TestRequest::get().uri("/spots/mine").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn my_locations_for_anonymous_is_empty() {
        let app = app!();
        let req = test::TestRequest::get().uri("/locations/mine").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn size_update_rejects_an_invalid_token() {
        let app = app!();
        let token = generate_jwt(Uuid::new_v4(), &JwtConfig {
            secret: "some-other-secret".to_string(),
            expiration_hours: 1,
        })
        .unwrap();
        let req = test::TestRequest::post()
            .uri("/sizes/1")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({ "name": "Compact" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn malformed_spot_body_is_a_bad_request() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/spots")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"location_id\": ")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
