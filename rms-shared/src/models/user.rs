use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Role assigned to a backend account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    User,
    /// Any role string this client does not know about.
    #[serde(other)]
    Other,
}

impl UserRole {
    /// Return the canonical string representation used by the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::User => "user",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "user" => Ok(Self::User),
            _ => Err("unknown user role"),
        }
    }
}

/// Public view of an authenticated account, as returned by the users endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Backend identifier.
    pub id: i64,

    /// Login name.
    pub username: String,

    /// Contact address.
    pub email: String,

    /// Account role.
    #[serde(default)]
    pub role: UserRole,

    /// Whether the account is enabled. The backend may omit it.
    #[serde(default)]
    pub is_active: Option<bool>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    /// "First Last" when both names are known to the backend.
    #[serde(default)]
    pub full_name: Option<String>,
}

impl User {
    /// Name to show in the navigation header.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// Credentials posted to `/users/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login payload. The session itself travels in an http-only cookie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    pub user: User,
}

/// Payload of the "who am I" endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeResponse {
    pub user: User,
}
