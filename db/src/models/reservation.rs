use access::{Field, FieldValue, Flags, Record, ReservationStatus};
use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// A reservation joined with the location and host owning its spot.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Reservation {
    pub id: i64,
    pub user_id: Uuid,
    pub spot_id: i64,
    pub vehicle_id: i64,
    pub date: DateTime<Utc>,
    pub user_charge: Decimal,
    pub fee_amount: Decimal,
    pub host_income: Decimal,
    pub confirmed: bool,
    pub canceled: bool,
    pub verification_token: String,
    pub created_at: NaiveDateTime,
    pub location_id: i64,
    pub host_id: Uuid,
}

impl Reservation {
    pub fn flags(&self) -> Flags {
        Flags {
            confirmed: self.confirmed,
            canceled: self.canceled,
        }
    }

    pub fn status(&self) -> ReservationStatus {
        self.flags().status()
    }
}

impl Record for Reservation {
    fn field(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Id => FieldValue::Int(self.id),
            Field::UserId => FieldValue::Uuid(self.user_id),
            Field::HostId => FieldValue::Uuid(self.host_id),
            Field::Confirmed => FieldValue::Bool(self.confirmed),
            Field::Canceled => FieldValue::Bool(self.canceled),
            _ => FieldValue::Null,
        }
    }
}
