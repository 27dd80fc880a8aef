use std::fmt;

use common::error::{AppError, Res};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored discriminant of a role record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    Host,
    Attendant,
}

impl RoleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Host => "host",
            RoleKind::Attendant => "attendant",
        }
    }

    pub fn from_str(s: &str) -> Res<Self> {
        match s {
            "host" => Ok(RoleKind::Host),
            "attendant" => Ok(RoleKind::Attendant),
            other => Err(AppError::Internal(format!("Invalid role kind: {}", other))),
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a user is allowed to act as, beyond being a plain user.
///
/// A user holds at most one of these, so the variants are exclusive by construction.
/// A host is identified by its user id; an attendant whose host was removed keeps the
/// role with `boss: None` and has no reservation scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Role {
    User,
    Host,
    Attendant { boss: Option<Uuid> },
}

impl Role {
    /// Builds the role from the stored record, if any.
    pub fn from_record(kind: Option<RoleKind>, boss: Option<Uuid>) -> Self {
        match kind {
            None => Role::User,
            Some(RoleKind::Host) => Role::Host,
            Some(RoleKind::Attendant) => Role::Attendant { boss },
        }
    }

    pub fn is_host(&self) -> bool {
        matches!(self, Role::Host)
    }

    pub fn is_attendant(&self) -> bool {
        matches!(self, Role::Attendant { .. })
    }

    pub fn kind(&self) -> Option<RoleKind> {
        match self {
            Role::User => None,
            Role::Host => Some(RoleKind::Host),
            Role::Attendant { .. } => Some(RoleKind::Attendant),
        }
    }
}

/// The identity behind a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    Anonymous,
    Authenticated { user_id: Uuid, role: Role },
}

impl Caller {
    pub fn user(user_id: Uuid) -> Self {
        Caller::Authenticated {
            user_id,
            role: Role::User,
        }
    }

    pub fn host(user_id: Uuid) -> Self {
        Caller::Authenticated {
            user_id,
            role: Role::Host,
        }
    }

    pub fn attendant(user_id: Uuid, boss: Option<Uuid>) -> Self {
        Caller::Authenticated {
            user_id,
            role: Role::Attendant { boss },
        }
    }

    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Caller::Anonymous => None,
            Caller::Authenticated { user_id, .. } => Some(*user_id),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Caller::Anonymous => Role::User,
            Caller::Authenticated { role, .. } => *role,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Caller::Authenticated { .. })
    }

    pub fn is_host(&self) -> bool {
        self.role().is_host()
    }

    pub fn is_attendant(&self) -> bool {
        self.role().is_attendant()
    }

    /// The host id of a host caller (its own user id).
    pub fn host_id(&self) -> Option<Uuid> {
        match self {
            Caller::Authenticated {
                user_id,
                role: Role::Host,
            } => Some(*user_id),
            _ => None,
        }
    }

    /// Requires an authenticated caller, returning its user id.
    pub fn require_user(&self) -> Res<Uuid> {
        self.user_id()
            .ok_or_else(|| AppError::Unauthorized("No authorization token provided".to_string()))
    }
}
