//! Parking catalogue: size categories, locations and parking spots.

use actix_web::web;

pub mod routes {
    pub mod location;
    pub mod size;
    pub mod spot;
}

mod services {
    pub(crate) mod location;
    pub(crate) mod size;
    pub(crate) mod spot;
}

mod dtos {
    pub(crate) mod lot;
}

pub fn mount_sizes() -> actix_web::Scope {
    web::scope("/sizes")
        .service(routes::size::get_sizes)
        .service(routes::size::post_size)
        .service(routes::size::get_size)
        .service(routes::size::post_update_size)
}

pub fn mount_locations() -> actix_web::Scope {
    web::scope("/locations")
        .service(routes::location::get_locations)
        .service(routes::location::post_location)
        .service(routes::location::get_my_locations)
        .service(routes::location::get_location)
        .service(routes::location::post_update_location)
}

pub fn mount_spots() -> actix_web::Scope {
    web::scope("/spots")
        .service(routes::spot::get_spots)
        .service(routes::spot::post_spot)
        .service(routes::spot::get_my_spots)
        .service(routes::spot::get_spot)
        .service(routes::spot::post_update_spot)
}
