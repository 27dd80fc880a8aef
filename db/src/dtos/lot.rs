use rust_decimal::Decimal;
use uuid::Uuid;

pub struct SizeCreateRequest {
    pub name: String,
    pub description: String,
    pub min_width: f64,
    pub min_length: f64,
}

#[derive(Default)]
pub struct SizeUpdateRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub min_width: Option<f64>,
    pub min_length: Option<f64>,
}

pub struct LocationCreateRequest {
    pub host_id: Uuid,
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Default)]
pub struct LocationUpdateRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

pub struct SpotCreateRequest {
    pub location_id: i64,
    pub size_id: i64,
    pub actual_width: f64,
    pub actual_length: f64,
    pub price: Decimal,
    pub notes: String,
}

#[derive(Default)]
pub struct SpotUpdateRequest {
    pub location_id: Option<i64>,
    pub size_id: Option<i64>,
    pub actual_width: Option<f64>,
    pub actual_length: Option<f64>,
    pub price: Option<Decimal>,
    pub notes: Option<String>,
}
