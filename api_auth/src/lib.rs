use actix_web::web;

pub mod routes {
    pub mod auth;
    pub mod user;
}

mod services {
    pub(crate) mod auth;
    pub(crate) mod user;
}

mod dtos {
    pub(crate) mod auth;
    pub(crate) mod user;
}

pub fn mount_auth() -> actix_web::Scope {
    web::scope("/auth")
        .service(routes::auth::post_register)
        .service(routes::auth::post_login)
}

pub fn mount_users() -> actix_web::Scope {
    web::scope("/users")
        .service(routes::user::get_users)
        .service(routes::user::get_me)
        .service(routes::user::post_me)
        .service(routes::user::get_user)
}
