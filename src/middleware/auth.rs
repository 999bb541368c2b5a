use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that verifies the bearer token and attaches the decoded
/// claims as the request's authenticated principal. Lives only for the
/// request; downstream guards and handlers read it, nothing mutates it.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::unauthorized("unauthorized access"))
    }
}

/// Extracts the token from an `Authorization` header value.
///
/// The value is expected to be two whitespace-separated parts,
/// `<scheme> <token>`; the scheme itself is not validated, any non-empty
/// scheme is accepted.
pub fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();
    let _scheme = parts.next()?;
    parts.next()
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("unauthorized access"))?;

        let token = bearer_token(auth_header)
            .ok_or_else(|| AppError::unauthorized("unauthorized access"))?;

        let claims = verify_token(token, &state.jwt_config)
            .map_err(|_| AppError::unauthorized("unauthorized access"))?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_standard_scheme() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_any_scheme_accepted() {
        assert_eq!(bearer_token("Token abc"), Some("abc"));
        assert_eq!(bearer_token("bearer abc"), Some("abc"));
    }

    #[test]
    fn test_bearer_token_missing_token_part() {
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token(""), None);
        assert_eq!(bearer_token("   "), None);
    }

    #[test]
    fn test_bearer_token_extra_whitespace() {
        assert_eq!(bearer_token("Bearer   abc"), Some("abc"));
    }

    fn principal(sub: &str) -> AuthUser {
        AuthUser(Claims {
            sub: sub.to_string(),
            email: "u@test.com".to_string(),
            iat: 0,
            exp: 0,
        })
    }

    #[test]
    fn test_user_id_parses_uuid_subject() {
        let id = Uuid::new_v4();
        assert_eq!(principal(&id.to_string()).user_id().unwrap(), id);
    }

    #[test]
    fn test_user_id_rejects_non_uuid_subject() {
        assert!(principal("not-a-uuid").user_id().is_err());
    }
}
