pub mod auth;
pub mod trade;
