//! Typed client-side services over the request transport.

use thiserror::Error;

use crate::forms::FormError;
use crate::transport::TransportError;

pub mod api;
pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod projects;

pub use api::{ApiOutcome, ApiService};
pub use auth::AuthService;
pub use customers::CustomerService;
pub use dashboard::DashboardService;
pub use projects::ProjectService;

#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("invalid form: {0}")]
    Form(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("{0}")]
    Api(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
