//! # ShineOn API
//!
//! Backend for a summer-class marketplace: catalog browsing, user and role
//! management, a shopping cart, and payment-intent creation, built with
//! Axum and PostgreSQL.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/       # Environment configuration (JWT, database, CORS, payments)
//! ├── middleware/   # Authentication extractor and role/ownership guards
//! ├── modules/      # Feature modules
//! │   ├── auth/     # Credential check and token issuance
//! │   ├── catalog/  # Public class and instructor listings
//! │   ├── users/    # User directory, role probes, promotions
//! │   ├── carts/    # Owner-guarded shopping cart
//! │   └── payments/ # Payment-intent creation
//! └── utils/        # Errors, JWT, password hashing
//! ```
//!
//! Each feature module follows the same structure: `controller.rs` (HTTP
//! handlers), `service.rs` (store access), `model.rs` (entities and DTOs),
//! `router.rs` (route wiring).
//!
//! ## Authentication and authorization
//!
//! - `POST /jwt` verifies a password and issues an HS256 token with a
//!   1-hour expiry. Claims are server-chosen (user id + email); the role
//!   is never embedded in the token.
//! - The [`middleware::auth::AuthUser`] extractor rejects requests without
//!   a verifiable token (401) before any handler runs.
//! - [`middleware::role::RequireAdmin`] looks the principal's role up in
//!   the user directory on each request; non-admins get 403. All
//!   role-mutating routes carry this guard.
//! - Cart routes check ownership: the asserted email must match the
//!   principal's, and an absent assertion yields an empty list.
//!
//! All auth failures share one body shape:
//! `{"error": true, "message": "..."}`.

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
