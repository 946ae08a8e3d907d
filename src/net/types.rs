//! Wire DTOs for the remote auth API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's request/response schemas so serde
//! round-trips stay lossless. Profiles are immutable snapshots: a successful
//! profile fetch replaces the whole `User`, never individual fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role assigned to an account by the backend.
///
/// Kept as a closed enum so every role-dependent branch (route guards,
/// redirects) is forced to handle all roles exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Property owner; full dashboard access.
    Owner,
    /// Back-office staff; full dashboard access.
    Staff,
    /// End customer; restricted to the account surface.
    Client,
}

impl UserRole {
    /// Wire and display name for the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Staff => "staff",
            Self::Client => "client",
        }
    }

    /// Parse a role from a form value. Returns `None` for unknown strings.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "owner" => Some(Self::Owner),
            "staff" => Some(Self::Staff),
            "client" => Some(Self::Client),
            _ => None,
        }
    }
}

/// An account as returned by the profile and login endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email; unique on the backend.
    pub email: String,
    /// Access role; drives route guarding.
    pub role: UserRole,
    /// Whether the email verification link was followed.
    pub is_verified: bool,
    /// Inactive accounts are rejected at login by the backend.
    pub is_active: bool,
    /// Backend administration flag; unused by this client beyond display.
    pub is_superuser: bool,
}

/// Envelope returned by `GET /auth/profile` and `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The account snapshot.
    pub user: User,
}

/// Success payload of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    /// The authenticated account.
    pub user: User,
    /// Fresh bearer token for subsequent requests.
    pub token: String,
}

/// Credentials submitted to `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// New-account fields; sent wrapped as `{"user": ...}` to `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub password: String,
    pub password_confirm: String,
}

/// Payload of `POST /auth/reset`; the token arrives via the emailed link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: String,
    pub password_confirm: String,
    pub token: String,
}

/// Partial profile update accepted by `PUT /auth/profile`.
///
/// `None` fields are omitted from the wire payload and left untouched by the
/// backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}
