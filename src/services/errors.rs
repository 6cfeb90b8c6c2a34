//! Error type returned by the service layer.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller supplied criteria or paging that cannot be executed.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found")]
    NotFound,

    /// The store could not be reached or failed while running a query.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A stored row violates a domain constraint.
    #[error("data integrity error: {0}")]
    DataIntegrity(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConnectionError(message)
            | RepositoryError::DatabaseError(message)
            | RepositoryError::Unexpected(message) => ServiceError::Unavailable(message),
            RepositoryError::DataIntegrity(message) => ServiceError::DataIntegrity(message),
            RepositoryError::ValidationError(message)
            | RepositoryError::ConstraintViolation(message) => ServiceError::Internal(message),
        }
    }
}
