//! Request bodies accepted by the mock endpoints.

use thiserror::Error;
use validator::ValidationErrors;

pub mod auth;
pub mod customers;

#[derive(Debug, Error)]
/// Errors that can occur when processing a submitted body.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid customer type")]
    InvalidCustomerType,

    #[error("invalid customer status")]
    InvalidCustomerStatus,
}
