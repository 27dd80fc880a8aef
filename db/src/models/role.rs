use access::{Role, RoleKind};
use chrono::NaiveDateTime;
use common::error::Res;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RoleRecord {
    pub user_id: Uuid,
    pub kind: String,
    pub boss_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
}

impl RoleRecord {
    pub fn role(&self) -> Res<Role> {
        let kind = RoleKind::from_str(&self.kind)?;
        Ok(Role::from_record(Some(kind), self.boss_id))
    }
}

/// A host as listed to other users. The host id is the user id.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Host {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Attendant {
    pub id: Uuid,
    pub boss_id: Option<Uuid>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: NaiveDateTime,
}
