use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

pub struct ReservationCreateRequest {
    pub user_id: Uuid,
    pub spot_id: i64,
    pub vehicle_id: i64,
    pub date: DateTime<Utc>,
    pub user_charge: Decimal,
    pub fee_amount: Decimal,
    pub host_income: Decimal,
    pub verification_token: String,
}

#[derive(Default)]
pub struct ReservationUpdateRequest {
    pub spot_id: Option<i64>,
    pub vehicle_id: Option<i64>,
    pub date: Option<DateTime<Utc>>,
    pub user_charge: Option<Decimal>,
    pub fee_amount: Option<Decimal>,
    pub host_income: Option<Decimal>,
}

pub struct VehicleCreateRequest {
    pub user_id: Uuid,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub color: String,
    pub license: String,
    pub description: String,
}

#[derive(Default)]
pub struct VehicleUpdateRequest {
    pub year: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub license: Option<String>,
    pub description: Option<String>,
}
