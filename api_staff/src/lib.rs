//! Employment management: becoming a host or an attendant, and hosts firing their
//! attendants.

use actix_web::web;

pub mod routes {
    pub mod attendant;
    pub mod host;
}

mod services {
    pub(crate) mod employment;
}

mod dtos {
    pub(crate) mod employment;
}

pub fn mount_hosts() -> actix_web::Scope {
    web::scope("/hosts")
        .service(routes::host::get_hosts)
        .service(routes::host::post_become_host)
        .service(routes::host::get_host)
        .service(routes::host::post_fire)
}

pub fn mount_attendants() -> actix_web::Scope {
    web::scope("/attendants")
        .service(routes::attendant::get_attendants)
        .service(routes::attendant::post_become_attendant)
        .service(routes::attendant::get_my_attendants)
        .service(routes::attendant::get_attendant)
}
