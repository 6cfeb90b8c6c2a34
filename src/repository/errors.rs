use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A stored row could not be turned into a domain value.
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    /// Wraps a failed row-to-domain conversion.
    pub fn data_integrity(err: impl std::fmt::Display) -> Self {
        RepositoryError::DataIntegrity(err.to_string())
    }
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::UniqueViolation
                    | DatabaseErrorKind::ForeignKeyViolation
                    | DatabaseErrorKind::NotNullViolation
                    | DatabaseErrorKind::CheckViolation => {
                        RepositoryError::ConstraintViolation(message)
                    }
                    DatabaseErrorKind::ClosedConnection => RepositoryError::ConnectionError(message),
                    _ => RepositoryError::DatabaseError(message),
                }
            }
            // A stored value that no longer fits its column type.
            DieselError::DeserializationError(e) => {
                RepositoryError::DataIntegrity(format!("Unreadable column: {e}"))
            }
            DieselError::QueryBuilderError(e) | DieselError::SerializationError(e) => {
                RepositoryError::ValidationError(format!("Cannot build query: {e}"))
            }
            other @ (DieselError::RollbackTransaction | DieselError::BrokenTransactionManager) => {
                RepositoryError::DatabaseError(other.to_string())
            }
            other => RepositoryError::Unexpected(other.to_string()),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        RepositoryError::ConnectionError(format!("Connection error: {err}"))
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::ConnectionError(format!("Connection error: {err}"))
    }
}
