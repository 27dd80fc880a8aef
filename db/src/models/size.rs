use serde::Serialize;

/// Size class of a parking spot, in feet.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ParkingSize {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub min_width: f64,
    pub min_length: f64,
}
