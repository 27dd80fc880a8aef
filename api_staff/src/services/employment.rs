use access::{
    Caller, Role,
    employment::{self, FIRED_MESSAGE, Refusal},
};
use common::{
    error::{AppError, Res},
    http::Outcome,
};
use db::models::role::{Attendant, Host};
use sqlx::PgPool;
use uuid::Uuid;

pub async fn list_hosts(pool: &PgPool) -> Res<Vec<Host>> {
    db::role::list_hosts(pool).await
}

pub async fn get_host(pool: &PgPool, host_id: Uuid) -> Res<Host> {
    db::role::get_host(pool, host_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Host not found".to_string()))
}

pub async fn list_attendants(pool: &PgPool, boss_id: Option<Uuid>) -> Res<Vec<Attendant>> {
    db::role::list_attendants(pool, boss_id).await
}

pub async fn get_attendant(pool: &PgPool, attendant_id: Uuid) -> Res<Attendant> {
    db::role::get_attendant(pool, attendant_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Attendant not found".to_string()))
}

async fn create_host(pool: &PgPool, user_id: Uuid) -> Res<Option<Host>> {
    let mut tx = pool.begin().await?;
    if db::role::insert_host(&mut *tx, user_id).await?.is_none() {
        return Ok(None);
    }
    let host = db::role::get_host(&mut *tx, user_id).await?;
    tx.commit().await?;
    Ok(host)
}

async fn create_attendant(pool: &PgPool, user_id: Uuid, boss_id: Uuid) -> Res<Option<Attendant>> {
    let mut tx = pool.begin().await?;
    if db::role::insert_attendant(&mut *tx, user_id, boss_id)
        .await?
        .is_none()
    {
        return Ok(None);
    }
    let attendant = db::role::get_attendant(&mut *tx, user_id).await?;
    tx.commit().await?;
    Ok(attendant)
}

/// Grants the caller the host role.
///
/// Refusals and storage failures are reported in the outcome, never as errors.
pub async fn become_host(pool: &PgPool, caller: &Caller) -> Res<Outcome> {
    let user_id = caller.require_user()?;
    if let Err(refusal) = employment::check_become_host(caller.role()) {
        return Ok(Outcome::failed(refusal.message()));
    }

    match create_host(pool, user_id).await {
        Ok(Some(host)) => {
            log::info!("User {} became a host", user_id);
            Outcome::with_payload("host", &host)
        }
        Ok(None) => Ok(Outcome::failed(Refusal::CouldNotCreateHost.message())
            .caused_by("user already holds a role")),
        Err(e) => {
            log::error!("Could not create host for {}: {}", user_id, e);
            Ok(Outcome::failed(Refusal::CouldNotCreateHost.message()).caused_by(e))
        }
    }
}

/// Resolves the host a caller asked to work for. Refusals come first; an id that
/// is not a UUID then fails like an unknown host.
fn requested_boss(current: Role, host_pk: Option<&str>) -> Result<Uuid, Outcome> {
    let host_pk = host_pk.map(str::trim).filter(|pk| !pk.is_empty());
    let host_pk = employment::check_become_attendant(current, host_pk)
        .map_err(|refusal| Outcome::failed(refusal.message()))?;
    Uuid::parse_str(host_pk).map_err(|e| {
        Outcome::failed(Refusal::CouldNotCreateAttendant.message())
            .caused_by(format!("invalid host pk {:?}: {}", host_pk, e))
    })
}

pub async fn become_attendant(
    pool: &PgPool,
    caller: &Caller,
    host_pk: Option<&str>,
) -> Res<Outcome> {
    let user_id = caller.require_user()?;
    let boss_id = match requested_boss(caller.role(), host_pk) {
        Ok(boss_id) => boss_id,
        Err(outcome) => return Ok(outcome),
    };

    match create_attendant(pool, user_id, boss_id).await {
        Ok(Some(attendant)) => {
            log::info!("User {} became an attendant of {}", user_id, boss_id);
            Outcome::with_payload("attendant", &attendant)
        }
        Ok(None) => Ok(Outcome::failed(Refusal::CouldNotCreateAttendant.message())
            .caused_by(format!("no host with id {}", boss_id))),
        Err(e) => {
            log::error!("Could not create attendant for {}: {}", user_id, e);
            Ok(Outcome::failed(Refusal::CouldNotCreateAttendant.message()).caused_by(e))
        }
    }
}

/// Removes the attendant role of one of the caller's employees.
pub async fn fire(pool: &PgPool, host_id: Uuid, attendant_id: Uuid) -> Res<Outcome> {
    let target = match db::role::get_role(pool, attendant_id).await? {
        Some(record) => record.role()?,
        None => Role::User,
    };
    if let Err(refusal) = employment::check_fire(host_id, target) {
        return Ok(Outcome::failed(refusal.message()));
    }
    // the boss filter in the delete covers a reassignment since the read
    if !db::role::delete_attendant(pool, attendant_id, host_id).await? {
        return Ok(Outcome::failed(Refusal::NotYourEmployee.message()));
    }
    log::info!("Host {} fired attendant {}", host_id, attendant_id);
    Ok(Outcome::succeeded(FIRED_MESSAGE))
}
