//! Error conversion glue between layers.
//!
//! The domain and search layers must not depend on service or repository
//! error types, so the conversions live here.

use crate::domain::types::TypeConstraintError;
use crate::pagination::PageError;
use crate::search::CriteriaError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<CriteriaError> for ServiceError {
    fn from(val: CriteriaError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<PageError> for ServiceError {
    fn from(val: PageError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}
