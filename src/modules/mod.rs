pub mod auth;
pub mod carts;
pub mod catalog;
pub mod payments;
pub mod users;
