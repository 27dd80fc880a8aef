use access::{Field, FieldValue, Record};
use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Location {
    pub id: i64,
    pub host_id: Uuid,
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub created_at: NaiveDateTime,
}

impl Record for Location {
    fn field(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Id => FieldValue::Int(self.id),
            Field::HostId => FieldValue::Uuid(self.host_id),
            Field::LocationName => FieldValue::Text(&self.name),
            Field::LocationDescription => FieldValue::Text(&self.description),
            Field::LocationAddress => FieldValue::Text(&self.address),
            Field::LocationState => FieldValue::Text(&self.state),
            Field::LocationCity => FieldValue::Text(&self.city),
            _ => FieldValue::Null,
        }
    }
}
