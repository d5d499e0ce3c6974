//! DTO modules that bridge the mock endpoints with the typed services.

pub mod api;
pub mod auth;
pub mod customers;
