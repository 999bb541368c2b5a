//! Configuration modules.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables once at startup and immutable thereafter.
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: token signing secret and lifetime
//! - [`payment`]: payment-provider secret

pub mod cors;
pub mod database;
pub mod jwt;
pub mod payment;
