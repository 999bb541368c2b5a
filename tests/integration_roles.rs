//! Database-backed tests of the admin guard and the directory mutations
//! it protects. Each test gets its own database via `sqlx::test`.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{create_test_user, generate_unique_email, stored_role};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shineon_api::config::cors::CorsConfig;
use shineon_api::config::jwt::JwtConfig;
use shineon_api::config::payment::PaymentConfig;
use shineon_api::router::init_router;
use shineon_api::state::AppState;
use sqlx::PgPool;
use tower::ServiceExt;

fn setup_test_app(pool: PgPool) -> axum::Router {
    init_router(AppState {
        db: pool,
        jwt_config: JwtConfig {
            secret: "roles_test_secret".to_string(),
            access_token_expiry: 3600,
        },
        cors_config: CorsConfig {
            allowed_origins: vec![],
        },
        payment_config: PaymentConfig {
            secret_key: "sk_test".to_string(),
        },
    })
}

async fn get_auth_token(app: axum::Router, email: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/jwt")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "Failed to parse token response. Status: {}, Body: {:?}",
            status,
            String::from_utf8_lossy(&body)
        )
    });
    body["token"]
        .as_str()
        .unwrap_or_else(|| panic!("No token in response. Status: {status}, Body: {body}"))
        .to_string()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ============ Admin Guard Tests ============

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_can_list_users(pool: PgPool) {
    let email = generate_unique_email();
    let password = "testpass123";
    create_test_user(&pool, &email, password, "admin").await;

    let token = get_auth_token(setup_test_app(pool.clone()), &email, password).await;

    let request = Request::builder()
        .method("GET")
        .uri("/users")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = setup_test_app(pool).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let users = body.as_array().unwrap();
    assert!(users.iter().any(|user| user["email"] == json!(email)));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_non_admin_cannot_list_users(pool: PgPool) {
    let email = generate_unique_email();
    let password = "testpass123";
    create_test_user(&pool, &email, password, "student").await;

    let token = get_auth_token(setup_test_app(pool.clone()), &email, password).await;

    let request = Request::builder()
        .method("GET")
        .uri("/users")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = setup_test_app(pool).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_non_admin_cannot_promote(pool: PgPool) {
    let email = generate_unique_email();
    let password = "testpass123";
    create_test_user(&pool, &email, password, "instructor").await;
    let target = create_test_user(&pool, &generate_unique_email(), password, "student").await;

    let token = get_auth_token(setup_test_app(pool.clone()), &email, password).await;

    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/users/admin/{}", target.id))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Denied request must not have touched the target.
    assert_eq!(stored_role(&pool, target.id).await, "student");
}

// ============ Promotion Tests ============

#[sqlx::test(migrations = "./migrations")]
async fn test_promotion_is_idempotent(pool: PgPool) {
    let email = generate_unique_email();
    let password = "testpass123";
    create_test_user(&pool, &email, password, "admin").await;
    let target = create_test_user(&pool, &generate_unique_email(), password, "student").await;

    let token = get_auth_token(setup_test_app(pool.clone()), &email, password).await;

    for _ in 0..2 {
        let request = Request::builder()
            .method("PATCH")
            .uri(format!("/users/admin/{}", target.id))
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();

        let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["modified_count"], json!(1));
        assert_eq!(stored_role(&pool, target.id).await, "admin");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_promotion_takes_effect_without_new_token(pool: PgPool) {
    let email = generate_unique_email();
    let password = "testpass123";
    let user = create_test_user(&pool, &email, password, "student").await;

    // Token issued while still a student.
    let token = get_auth_token(setup_test_app(pool.clone()), &email, password).await;

    let request = Request::builder()
        .method("GET")
        .uri("/users")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    sqlx::query("UPDATE users SET role = 'admin' WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    // Same token, guard re-reads the directory.
    let request = Request::builder()
        .method("GET")
        .uri("/users")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app(pool).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// ============ Signup Tests ============

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_conflict_reports_user_exists(pool: PgPool) {
    let email = generate_unique_email();
    let body = serde_json::to_string(&json!({
        "name": "First Signup",
        "email": email,
        "password": "testpass123"
    }))
    .unwrap();

    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.clone()))
        .unwrap();

    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["email"], json!(email));
    assert_eq!(created["role"], json!("student"));

    // Same email again: existing record stays, no second row.
    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "message": "user exists" }));

    let count: i64 = sqlx::query_scalar("SELECT count(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
