//! Role and ownership guards.
//!
//! Each guard runs after [`AuthUser`] has attached a principal. Role
//! guards perform exactly one User Directory lookup by the principal's
//! email and branch on the stored role; the result is derived per request
//! and never cached. Guards are pure predicates over the principal, so
//! composing them in any order yields the same accept/reject outcome.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::Role;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Extractor that admits only principals whose directory role is `admin`.
///
/// Applied uniformly to all role-mutating routes; a missing directory
/// record counts as non-admin.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        let role = UserService::role_of(&state.db, auth_user.email()).await?;

        if role != Some(Role::Admin) {
            return Err(AppError::forbidden("forbidden access"));
        }

        Ok(RequireAdmin(auth_user))
    }
}

/// Ownership check for self-service routes: the asserted email must equal
/// the principal's email exactly.
///
/// Callers distinguish "no identity asserted" (answer with an empty result
/// set) from "wrong identity asserted" (this function, 403) before calling.
pub fn check_owner(auth_user: &AuthUser, asserted_email: &str) -> Result<(), AppError> {
    if auth_user.email() != asserted_email {
        return Err(AppError::forbidden("forbidden access"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::model::Claims;

    fn principal(email: &str) -> AuthUser {
        AuthUser(Claims {
            sub: "00000000-0000-0000-0000-000000000000".to_string(),
            email: email.to_string(),
            iat: 1_234_567_890,
            exp: 9_999_999_999,
        })
    }

    #[test]
    fn test_check_owner_match() {
        let auth_user = principal("a@x.com");
        assert!(check_owner(&auth_user, "a@x.com").is_ok());
    }

    #[test]
    fn test_check_owner_mismatch() {
        let auth_user = principal("a@x.com");
        let err = check_owner(&auth_user, "b@x.com").unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_check_owner_is_case_sensitive() {
        let auth_user = principal("a@x.com");
        assert!(check_owner(&auth_user, "A@x.com").is_err());
    }
}
