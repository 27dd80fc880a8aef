use access::{Field, FieldValue, Record};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// A parking spot joined with the location fields it is searched and scoped by.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ParkingSpot {
    pub id: i64,
    pub location_id: i64,
    pub size_id: i64,
    pub actual_width: f64,
    pub actual_length: f64,
    /// Hourly rate.
    pub price: Decimal,
    pub notes: String,
    pub created_at: NaiveDateTime,
    pub host_id: Uuid,
    pub location_name: String,
    pub location_description: String,
    pub location_address: String,
    pub location_city: String,
    pub location_state: String,
}

impl Record for ParkingSpot {
    fn field(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Id => FieldValue::Int(self.id),
            Field::HostId => FieldValue::Uuid(self.host_id),
            Field::SizeId => FieldValue::Int(self.size_id),
            Field::LocationName => FieldValue::Text(&self.location_name),
            Field::LocationDescription => FieldValue::Text(&self.location_description),
            Field::LocationAddress => FieldValue::Text(&self.location_address),
            Field::LocationState => FieldValue::Text(&self.location_state),
            Field::LocationCity => FieldValue::Text(&self.location_city),
            _ => FieldValue::Null,
        }
    }
}
