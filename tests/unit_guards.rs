use shineon_api::middleware::auth::{AuthUser, bearer_token};
use shineon_api::middleware::role::check_owner;
use shineon_api::modules::auth::model::Claims;
use shineon_api::modules::users::model::Role;

fn principal(email: &str) -> AuthUser {
    AuthUser(Claims {
        sub: "00000000-0000-0000-0000-000000000000".to_string(),
        email: email.to_string(),
        iat: 1_234_567_890,
        exp: 9_999_999_999,
    })
}

#[test]
fn test_bearer_token_two_part_header() {
    assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
}

#[test]
fn test_bearer_token_scheme_is_not_validated() {
    // Any non-empty scheme is accepted.
    assert_eq!(bearer_token("Token abc"), Some("abc"));
    assert_eq!(bearer_token("whatever abc"), Some("abc"));
}

#[test]
fn test_bearer_token_rejects_one_part_header() {
    assert_eq!(bearer_token("Bearer"), None);
    assert_eq!(bearer_token(""), None);
}

#[test]
fn test_check_owner_accepts_own_email() {
    assert!(check_owner(&principal("a@x.com"), "a@x.com").is_ok());
}

#[test]
fn test_check_owner_rejects_other_email() {
    let err = check_owner(&principal("a@x.com"), "b@x.com").unwrap_err();
    assert_eq!(err.status, axum::http::StatusCode::FORBIDDEN);
}

#[test]
fn test_check_owner_order_independent() {
    // The check is a pure predicate over the principal: re-applying it
    // never changes the outcome.
    let auth_user = principal("a@x.com");
    assert!(check_owner(&auth_user, "a@x.com").is_ok());
    assert!(check_owner(&auth_user, "a@x.com").is_ok());
    assert!(check_owner(&auth_user, "b@x.com").is_err());
    assert!(check_owner(&auth_user, "a@x.com").is_ok());
}

#[test]
fn test_role_parse_closed_enumeration() {
    assert_eq!(Role::parse("student"), Some(Role::Student));
    assert_eq!(Role::parse("instructor"), Some(Role::Instructor));
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
}

#[test]
fn test_role_parse_rejects_unknown_values() {
    assert_eq!(Role::parse("superadmin"), None);
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn test_role_default_is_student() {
    assert_eq!(Role::default(), Role::Student);
}

#[test]
fn test_role_as_str_round_trips() {
    for role in [Role::Student, Role::Instructor, Role::Admin] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}
