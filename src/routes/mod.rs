//! Actix-web handlers of the JSON API.

use actix_web::HttpResponse;
use serde::Serialize;

use crate::services::ServiceError;

pub mod animal;
pub mod recruitment;

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Maps a failed service call to its HTTP response.
pub(crate) fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::Validation(message) => HttpResponse::BadRequest().json(ErrorBody { message }),
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorBody {
            message: "not found".to_string(),
        }),
        ServiceError::Unavailable(message) => {
            log::error!("Failed to {action}: store unavailable: {message}");
            HttpResponse::ServiceUnavailable().finish()
        }
        err => {
            log::error!("Failed to {action}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
