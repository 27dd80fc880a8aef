use access::{Action, Caller, Predicate, Transition, TransitionOutcome, scope};
use common::{
    error::{AppError, Res},
    http::Outcome,
};
use db::{
    dtos::reservation::{
        ReservationCreateRequest as ReservationCreate,
        ReservationUpdateRequest as ReservationUpdate,
    },
    models::reservation::Reservation,
};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    dtos::reservation::{ReservationCreateRequest, ReservationUpdateRequest},
    services::vehicle,
};

fn not_found() -> AppError {
    AppError::NotFound("Reservation not found".to_string())
}

pub async fn list_reservations(pool: &PgPool, caller: &Caller, action: Action) -> Res<Vec<Reservation>> {
    db::reservation::list_reservations(pool, &scope::reservation_scope(caller, action)).await
}

pub async fn needs_confirmation(pool: &PgPool, caller: &Caller) -> Res<Vec<Reservation>> {
    db::reservation::list_reservations(pool, &scope::needs_confirmation(caller)).await
}

pub async fn get_reservation(
    pool: &PgPool,
    caller: &Caller,
    action: Action,
    reservation_id: i64,
) -> Res<Reservation> {
    let visible = scope::reservation_scope(caller, action);
    if visible.is_never() {
        return Err(not_found());
    }
    db::reservation::get_reservation(pool, reservation_id)
        .await?
        .filter(|reservation| visible.matches(reservation))
        .ok_or_else(not_found)
}

async fn check_spot(pool: &PgPool, spot_id: i64) -> Res<()> {
    if !db::spot::exists_spot(pool, spot_id).await? {
        return Err(AppError::invalid_field(
            "spot_id",
            "invalid",
            "no parking spot with this id",
        ));
    }
    Ok(())
}

async fn check_vehicle(pool: &PgPool, caller: &Caller, vehicle_id: i64) -> Res<()> {
    if vehicle::find_own_vehicle(pool, caller, vehicle_id)
        .await?
        .is_none()
    {
        return Err(AppError::invalid_field(
            "vehicle_id",
            "invalid",
            "must be one of your vehicles",
        ));
    }
    Ok(())
}

/// Books a spot for the caller. Overlapping bookings of the same spot are not
/// rejected.
pub async fn create_reservation(
    pool: &PgPool,
    caller: &Caller,
    user_id: Uuid,
    req: ReservationCreateRequest,
) -> Res<Reservation> {
    check_spot(pool, req.spot_id).await?;
    check_vehicle(pool, caller, req.vehicle_id).await?;

    let reservation_id = db::reservation::insert_reservation(
        pool,
        ReservationCreate {
            user_id,
            spot_id: req.spot_id,
            vehicle_id: req.vehicle_id,
            date: req.date,
            user_charge: req.user_charge,
            fee_amount: req.fee_amount,
            host_income: req.host_income,
            verification_token: Uuid::new_v4().simple().to_string(),
        },
    )
    .await?;
    log::info!(
        "User {} reserved spot {} (reservation {})",
        user_id,
        req.spot_id,
        reservation_id
    );

    db::reservation::get_reservation(pool, reservation_id)
        .await?
        .ok_or_else(|| {
            AppError::Internal(format!("Reservation {} vanished after insert", reservation_id))
        })
}

/// Locks the reservation row and checks it against `visible`, so the row cannot
/// leave the caller's scope before the transaction ends.
async fn lock_in_scope(
    tx: &mut Transaction<'_, Postgres>,
    visible: &Predicate,
    reservation_id: i64,
) -> Res<Reservation> {
    db::reservation::lock_reservation(&mut **tx, reservation_id)
        .await?
        .filter(|reservation| visible.matches(reservation))
        .ok_or_else(not_found)
}

pub async fn update_reservation(
    pool: &PgPool,
    caller: &Caller,
    reservation_id: i64,
    req: ReservationUpdateRequest,
) -> Res<Reservation> {
    let visible = scope::reservation_scope(caller, Action::Update);
    if visible.is_never() {
        return Err(not_found());
    }

    let mut tx = pool.begin().await?;
    lock_in_scope(&mut tx, &visible, reservation_id).await?;
    if let Some(spot_id) = req.spot_id {
        check_spot(pool, spot_id).await?;
    }
    if let Some(vehicle_id) = req.vehicle_id {
        check_vehicle(pool, caller, vehicle_id).await?;
    }
    db::reservation::update_reservation(
        &mut *tx,
        reservation_id,
        ReservationUpdate {
            spot_id: req.spot_id,
            vehicle_id: req.vehicle_id,
            date: req.date,
            user_charge: req.user_charge,
            fee_amount: req.fee_amount,
            host_income: req.host_income,
        },
    )
    .await?;
    let reservation = db::reservation::get_reservation(&mut *tx, reservation_id)
        .await?
        .ok_or_else(not_found)?;
    tx.commit().await?;

    Ok(reservation)
}

fn action_of(transition: Transition) -> Action {
    match transition {
        Transition::Confirm => Action::Confirm,
        Transition::Cancel => Action::Cancel,
    }
}

/// Confirms or cancels a reservation inside one transaction holding its row lock.
///
/// A repeat is acknowledged with `success: true` and writes nothing.
pub async fn transition(
    pool: &PgPool,
    caller: &Caller,
    reservation_id: i64,
    transition: Transition,
) -> Res<Outcome> {
    let visible = scope::reservation_scope(caller, action_of(transition));
    if visible.is_never() {
        return Err(not_found());
    }

    let mut tx = pool.begin().await?;
    let reservation = lock_in_scope(&mut tx, &visible, reservation_id).await?;

    let outcome = transition.apply(reservation.flags());
    if let TransitionOutcome::Applied(flags) = outcome {
        db::reservation::set_flags(&mut *tx, reservation.id, flags).await?;
    }
    tx.commit().await?;

    match outcome {
        TransitionOutcome::Applied(flags) => log::info!(
            "Reservation {} {}: {:?} -> {:?}",
            reservation.id,
            transition.as_str(),
            reservation.status(),
            flags.status(),
        ),
        TransitionOutcome::AlreadyDone => log::debug!(
            "Reservation {} {}: already {:?}, nothing written",
            reservation.id,
            transition.as_str(),
            reservation.status(),
        ),
    }
    Ok(Outcome::succeeded(transition.message(&outcome, reservation.id)))
}
