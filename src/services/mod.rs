//! Use cases behind the HTTP handlers.
//!
//! Services are generic over the repository traits so they can run against
//! [`crate::repository::DieselRepository`] or a mock.

pub mod animal;
pub mod errors;
pub mod recruitment;

pub use errors::{ServiceError, ServiceResult};

use validator::Validate;

/// Runs the `validator` rules of a request DTO.
pub(crate) fn validate_params<T: Validate>(params: &T) -> ServiceResult<()> {
    params
        .validate()
        .map_err(|err| ServiceError::Validation(err.to_string()))
}
