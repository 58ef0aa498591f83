//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Player, Scout};
use crate::config::{ROLE_ADMIN, ROLE_JUGADOR, ROLE_OJEADOR};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Athlete
    Jugador,
    /// Talent scout
    Ojeador,
    Admin,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Jugador => ROLE_JUGADOR,
            UserRole::Ojeador => ROLE_OJEADOR,
            UserRole::Admin => ROLE_ADMIN,
        }
    }

    /// Parse a stored role value. Unknown values are rejected rather than
    /// defaulted, since every role gates different routes.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            ROLE_JUGADOR => Some(UserRole::Jugador),
            ROLE_OJEADOR => Some(UserRole::Ojeador),
            ROLE_ADMIN => Some(UserRole::Admin),
            _ => None,
        }
    }

    /// Landing page for an authenticated user of this role.
    pub fn home_path(&self) -> &'static str {
        match self {
            UserRole::Jugador => "/perfil/jugador",
            UserRole::Ojeador => "/perfil/ojeador",
            UserRole::Admin => "/admin",
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Label shown when this user is offered as a message recipient.
    pub fn recipient_label(&self) -> String {
        format!("{} ({})", self.email, self.role)
    }
}

/// A user together with the profile its role implies.
#[derive(Debug, Clone)]
pub enum Account {
    Player { user: User, profile: Player },
    Scout { user: User, profile: Scout },
    Admin { user: User },
}

impl Account {
    pub fn user(&self) -> &User {
        match self {
            Account::Player { user, .. } | Account::Scout { user, .. } | Account::Admin { user } => {
                user
            }
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            Account::Player { .. } => UserRole::Jugador,
            Account::Scout { .. } => UserRole::Ojeador,
            Account::Admin { .. } => UserRole::Admin,
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// User email address
    #[schema(example = "jugador1@scoutme.com")]
    pub email: String,
    /// User role
    pub role: UserRole,
    pub is_active: bool,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_and_display() {
        for role in [UserRole::Jugador, UserRole::Ojeador, UserRole::Admin] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
            assert_eq!(role.to_string(), role.as_str());
        }
        assert_eq!(UserRole::parse("user"), None);
    }

    #[test]
    fn test_role_serde_uses_spanish_names() {
        let json = serde_json::to_string(&UserRole::Ojeador).unwrap();
        assert_eq!(json, "\"ojeador\"");
    }

    #[test]
    fn test_home_paths() {
        assert_eq!(UserRole::Jugador.home_path(), "/perfil/jugador");
        assert_eq!(UserRole::Ojeador.home_path(), "/perfil/ojeador");
        assert_eq!(UserRole::Admin.home_path(), "/admin");
    }

    #[test]
    fn test_recipient_label() {
        let user = User {
            id: Uuid::new_v4(),
            email: "ojeador1@scoutme.com".into(),
            password_hash: "hash".into(),
            role: UserRole::Ojeador,
            is_active: true,
            created_at: Utc::now(),
        };
        assert_eq!(user.recipient_label(), "ojeador1@scoutme.com (ojeador)");
    }
}
