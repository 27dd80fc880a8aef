use access::ReservationStatus;
use chrono::{DateTime, Utc};
use db::models::reservation::Reservation;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ReservationCreateRequest {
    pub spot_id: i64,
    pub vehicle_id: i64,
    pub date: DateTime<Utc>,
    #[validate(custom(function = "common::validation::amount"))]
    pub user_charge: Decimal,
    #[validate(custom(function = "common::validation::amount"))]
    pub fee_amount: Decimal,
    #[validate(custom(function = "common::validation::amount"))]
    pub host_income: Decimal,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReservationUpdateRequest {
    pub spot_id: Option<i64>,
    pub vehicle_id: Option<i64>,
    pub date: Option<DateTime<Utc>>,
    #[validate(custom(function = "common::validation::amount"))]
    pub user_charge: Option<Decimal>,
    #[validate(custom(function = "common::validation::amount"))]
    pub fee_amount: Option<Decimal>,
    #[validate(custom(function = "common::validation::amount"))]
    pub host_income: Option<Decimal>,
}

/// A reservation as sent to clients, with its derived status next to the flags.
#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub status: ReservationStatus,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        let status = reservation.status();
        Self {
            reservation,
            status,
        }
    }
}
