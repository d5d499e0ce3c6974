//! Domain records served by the mock CRM API.

pub mod customer;
pub mod dashboard;
pub mod project;
pub mod types;
pub mod user;
