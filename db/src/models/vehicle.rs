use access::{Field, FieldValue, Record};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Vehicle {
    pub id: i64,
    pub user_id: Uuid,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub color: String,
    pub license: String,
    pub description: String,
}

impl Record for Vehicle {
    fn field(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Id => FieldValue::Int(self.id),
            Field::UserId => FieldValue::Uuid(self.user_id),
            _ => FieldValue::Null,
        }
    }
}
