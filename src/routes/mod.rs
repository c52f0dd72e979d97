pub mod clients;
pub mod health;
pub mod metrics;

use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

/// Maps a service failure onto the JSON error response the API exposes.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(json!({"message": "Client not found"}))
        }
        ServiceError::Validation(message) => {
            HttpResponse::BadRequest().json(json!({"message": message}))
        }
        ServiceError::Unauthorized => HttpResponse::Unauthorized().finish(),
        ServiceError::Repository(err) => {
            log::error!("Repository failure: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
