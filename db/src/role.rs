use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::role::{Attendant, Host, RoleRecord};

const HOST_SELECT: &str = r#"
    SELECT u.id, u.email, u.first_name, u.last_name, r.created_at
    FROM roles r
    JOIN users u ON u.id = r.user_id
    WHERE r.kind = 'host'
"#;

const ATTENDANT_SELECT: &str = r#"
    SELECT u.id, r.boss_id, u.email, u.first_name, u.last_name, r.created_at
    FROM roles r
    JOIN users u ON u.id = r.user_id
    WHERE r.kind = 'attendant'
"#;

pub async fn get_role<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Option<RoleRecord>> {
    sqlx::query_as::<_, RoleRecord>("SELECT * FROM roles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Grants the host role. `None` when the user already holds a role.
pub async fn insert_host<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Option<RoleRecord>> {
    sqlx::query_as::<_, RoleRecord>(
        r#"
        INSERT INTO roles (user_id, kind)
        VALUES ($1, 'host')
        ON CONFLICT (user_id) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

/// Grants the attendant role under `boss_id`. `None` when the user already holds a
/// role or `boss_id` is not a host.
pub async fn insert_attendant<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    boss_id: Uuid,
) -> Res<Option<RoleRecord>> {
    sqlx::query_as::<_, RoleRecord>(
        r#"
        INSERT INTO roles (user_id, kind, boss_id)
        SELECT $1, 'attendant', h.user_id
        FROM roles h
        WHERE h.user_id = $2 AND h.kind = 'host'
        ON CONFLICT (user_id) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(boss_id)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

/// Removes the attendant role of `attendant_id` if `boss_id` is its boss.
pub async fn delete_attendant<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    attendant_id: Uuid,
    boss_id: Uuid,
) -> Res<bool> {
    let result = sqlx::query(
        "DELETE FROM roles WHERE user_id = $1 AND kind = 'attendant' AND boss_id = $2",
    )
    .bind(attendant_id)
    .bind(boss_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_hosts<'e, E: Executor<'e, Database = Postgres>>(executor: E) -> Res<Vec<Host>> {
    sqlx::query_as::<_, Host>(&format!("{HOST_SELECT} ORDER BY r.created_at"))
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_host<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    host_id: Uuid,
) -> Res<Option<Host>> {
    sqlx::query_as::<_, Host>(&format!("{HOST_SELECT} AND r.user_id = $1"))
        .bind(host_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn list_attendants<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    boss_id: Option<Uuid>,
) -> Res<Vec<Attendant>> {
    match boss_id {
        Some(boss_id) => sqlx::query_as::<_, Attendant>(&format!(
            "{ATTENDANT_SELECT} AND r.boss_id = $1 ORDER BY r.created_at"
        ))
        .bind(boss_id)
        .fetch_all(executor)
        .await
        .map_err(AppError::from),
        None => sqlx::query_as::<_, Attendant>(&format!("{ATTENDANT_SELECT} ORDER BY r.created_at"))
            .fetch_all(executor)
            .await
            .map_err(AppError::from),
    }
}

pub async fn get_attendant<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    attendant_id: Uuid,
) -> Res<Option<Attendant>> {
    sqlx::query_as::<_, Attendant>(&format!("{ATTENDANT_SELECT} AND r.user_id = $1"))
        .bind(attendant_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}
