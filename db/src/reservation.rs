use access::{Field, Flags, Predicate};
use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::{
    dtos::reservation::{ReservationCreateRequest, ReservationUpdateRequest},
    filter,
    models::reservation::Reservation,
};

const RESERVATION_SELECT: &str = r#"
    SELECT r.id, r.user_id, r.spot_id, r.vehicle_id, r.date, r.user_charge, r.fee_amount,
           r.host_income, r.confirmed, r.canceled, r.verification_token, r.created_at,
           s.location_id, l.host_id
    FROM reservations r
    JOIN parking_spots s ON s.id = r.spot_id
    JOIN locations l ON l.id = s.location_id
"#;

fn columns(field: Field) -> Option<&'static str> {
    match field {
        Field::Id => Some("r.id"),
        Field::UserId => Some("r.user_id"),
        Field::HostId => Some("l.host_id"),
        Field::Confirmed => Some("r.confirmed"),
        Field::Canceled => Some("r.canceled"),
        _ => None,
    }
}

pub async fn list_reservations<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    scope: &Predicate,
) -> Res<Vec<Reservation>> {
    if scope.is_never() {
        return Ok(Vec::new());
    }
    filter::select(RESERVATION_SELECT, scope, columns, "r.date, r.id")?
        .build_query_as::<Reservation>()
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_reservation<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    reservation_id: i64,
) -> Res<Option<Reservation>> {
    sqlx::query_as::<_, Reservation>(&format!("{RESERVATION_SELECT} WHERE r.id = $1"))
        .bind(reservation_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

fn lock_query() -> String {
    format!("{RESERVATION_SELECT} WHERE r.id = $1 FOR UPDATE OF r")
}

/// Like [`get_reservation`] but holds a row lock on the reservation until the
/// surrounding transaction ends.
pub async fn lock_reservation<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    reservation_id: i64,
) -> Res<Option<Reservation>> {
    sqlx::query_as::<_, Reservation>(&lock_query())
        .bind(reservation_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn set_flags<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    reservation_id: i64,
    flags: Flags,
) -> Res<()> {
    sqlx::query("UPDATE reservations SET confirmed = $2, canceled = $3 WHERE id = $1")
        .bind(reservation_id)
        .bind(flags.confirmed)
        .bind(flags.canceled)
        .execute(executor)
        .await?;
    Ok(())
}

/// Inserts the reservation and returns its id.
pub async fn insert_reservation<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: ReservationCreateRequest,
) -> Res<i64> {
    sqlx::query_scalar(
        r#"
        INSERT INTO reservations
            (user_id, spot_id, vehicle_id, date, user_charge, fee_amount, host_income, verification_token)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(data.user_id)
    .bind(data.spot_id)
    .bind(data.vehicle_id)
    .bind(data.date)
    .bind(data.user_charge)
    .bind(data.fee_amount)
    .bind(data.host_income)
    .bind(data.verification_token)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn update_reservation<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    reservation_id: i64,
    data: ReservationUpdateRequest,
) -> Res<()> {
    sqlx::query(
        r#"
        UPDATE reservations
        SET spot_id = COALESCE($2, spot_id),
            vehicle_id = COALESCE($3, vehicle_id),
            date = COALESCE($4, date),
            user_charge = COALESCE($5, user_charge),
            fee_amount = COALESCE($6, fee_amount),
            host_income = COALESCE($7, host_income)
        WHERE id = $1
        "#,
    )
    .bind(reservation_id)
    .bind(data.spot_id)
    .bind(data.vehicle_id)
    .bind(data.date)
    .bind(data.user_charge)
    .bind(data.fee_amount)
    .bind(data.host_income)
    .execute(executor)
    .await?;
    Ok(())
}
