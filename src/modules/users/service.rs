use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::users::model::{Role, SignupDto, User};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

pub struct UserService;

impl UserService {
    /// Conditional insert keyed by email: returns `None` when the email is
    /// already registered, leaving the existing record untouched.
    pub async fn create_user(db: &PgPool, dto: SignupDto) -> Result<Option<User>, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, photo_url, password) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (email) DO NOTHING \
             RETURNING id, name, email, photo_url, role, created_at",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.photo_url)
        .bind(&hashed_password)
        .fetch_optional(db)
        .await
        .context("Failed to insert user")
        .map_err(AppError::database)?;

        Ok(user)
    }

    pub async fn get_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, photo_url, role, created_at \
             FROM users ORDER BY created_at",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch users")
        .map_err(AppError::database)?;

        Ok(users)
    }

    /// Single directory lookup used by guards and role probes. The stored
    /// role text is parsed against the closed enumeration; an unrecognized
    /// value is a data error, not a non-privileged role.
    pub async fn role_of(db: &PgPool, email: &str) -> Result<Option<Role>, AppError> {
        let role: Option<String> =
            sqlx::query_scalar("SELECT role FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(db)
                .await
                .context("Failed to look up user role")
                .map_err(AppError::database)?;

        match role {
            None => Ok(None),
            Some(value) => Role::parse(&value)
                .map(Some)
                .ok_or_else(|| {
                    AppError::internal(anyhow::anyhow!("Invalid role in store: {value}"))
                }),
        }
    }

    /// Unconditionally sets the target record's role. Idempotent:
    /// re-applying the same role has no additional effect.
    pub async fn set_role(db: &PgPool, id: Uuid, role: Role) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE users SET role = $2 WHERE id = $1")
            .bind(id)
            .bind(role.as_str())
            .execute(db)
            .await
            .context("Failed to update user role")
            .map_err(AppError::database)?;

        Ok(result.rows_affected())
    }

    pub async fn delete_user(db: &PgPool, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete user")
            .map_err(AppError::database)?;

        Ok(result.rows_affected())
    }
}
