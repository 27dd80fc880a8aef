//! Reservations with their confirm/cancel lifecycle, and the vehicles they are made for.

use actix_web::web;

pub mod routes {
    pub mod reservation;
    pub mod vehicle;
}

mod services {
    pub(crate) mod reservation;
    pub(crate) mod vehicle;
}

mod dtos {
    pub(crate) mod reservation;
    pub(crate) mod vehicle;
}

pub fn mount_reservations() -> actix_web::Scope {
    web::scope("/reservations")
        .service(routes::reservation::get_reservations)
        .service(routes::reservation::post_reservation)
        .service(routes::reservation::get_my_reservations)
        .service(routes::reservation::get_boss_reservations)
        .service(routes::reservation::get_needs_confirmation)
        .service(routes::reservation::get_reservation)
        .service(routes::reservation::post_update_reservation)
        .service(routes::reservation::post_confirm)
        .service(routes::reservation::post_cancel)
}

pub fn mount_vehicles() -> actix_web::Scope {
    web::scope("/vehicles")
        .service(routes::vehicle::get_vehicles)
        .service(routes::vehicle::post_vehicle)
        .service(routes::vehicle::get_vehicle)
        .service(routes::vehicle::post_update_vehicle)
}
