use sqlx::PgPool;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

use super::model::{TokenRequest, TokenResponse};

pub struct AuthService;

impl AuthService {
    /// Verifies the caller's credentials and issues a signed, time-bounded
    /// access token. Unknown email and wrong password are indistinguishable
    /// to the caller.
    pub async fn issue_token(
        db: &PgPool,
        dto: TokenRequest,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserCredentials {
            id: Uuid,
            email: String,
            password: String,
        }

        let credentials = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, email, password FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::unauthorized("invalid email or password"))?;

        let is_valid = verify_password(&dto.password, &credentials.password)?;
        if !is_valid {
            return Err(AppError::unauthorized("invalid email or password"));
        }

        let token = create_access_token(credentials.id, &credentials.email, jwt_config)?;

        Ok(TokenResponse { token })
    }
}
