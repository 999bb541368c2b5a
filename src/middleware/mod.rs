//! Request-pipeline middleware.
//!
//! Protected routes compose Authentication → Authorization → handler via
//! extractor ordering: [`auth::AuthUser`] verifies the bearer token and
//! attaches the principal, [`role::RequireAdmin`] consults the User
//! Directory for the principal's role, and a failing stage short-circuits
//! the chain with its status returned verbatim.
//!
//! # Flow
//!
//! 1. Client sends `Authorization: <scheme> <token>`
//! 2. `AuthUser` verifies the token and decodes the claims (401 on failure)
//! 3. Guards check role or ownership (403 on failure)
//! 4. The handler runs only if every stage passed

pub mod auth;
pub mod role;
