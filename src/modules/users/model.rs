//! User data models and DTOs.
//!
//! The user record is the backing store of the User Directory: guards look
//! a principal's email up here on every request and branch on the stored
//! role. Roles form a closed enumeration; the stored text is parsed at the
//! authorization boundary and unrecognized values are rejected outright
//! instead of being treated as non-privileged.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// System roles, lowest to highest privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Instructor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
            Role::Admin => "admin",
        }
    }

    /// Parses a stored role string. Returns `None` for anything outside
    /// the closed enumeration.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "student" => Some(Role::Student),
            "instructor" => Some(Role::Instructor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Student
    }
}

/// A user in the system, keyed by unique email.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub role: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for signing up a new user.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct SignupDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub photo_url: Option<String>,
}

/// Reported when signup finds the email already registered.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Result of a role-probe endpoint (`/users/admin/{email}`).
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct AdminCheckResponse {
    pub admin: bool,
}

/// Result of a role-probe endpoint (`/users/instructor/{email}`).
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct InstructorCheckResponse {
    pub instructor: bool,
}

/// Store update-result, echoing how many rows the statement touched.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct ModifyResult {
    pub modified_count: u64,
}

/// Store delete-result.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct DeleteResult {
    pub deleted_count: u64,
}
