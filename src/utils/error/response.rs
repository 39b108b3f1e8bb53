//! HTTP response handling for errors

use super::types::ServiceError;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};

/// Plain-text body returned for any request that fails to decode
pub const INVALID_JSON_BODY: &str = "Invalid JSON";

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Decode(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Decode failures keep the bare text body clients already match on.
        if let ServiceError::Decode(_) = self {
            return HttpResponse::BadRequest()
                .content_type(ContentType::plaintext())
                .body(INVALID_JSON_BODY);
        }

        let error_code = match self {
            ServiceError::Config(_) => "CONFIG_ERROR",
            ServiceError::Io(_) => "IO_ERROR",
            ServiceError::Yaml(_) => "CONFIG_ERROR",
            ServiceError::SortUnit(_) => "SORT_UNIT_FAILED",
            ServiceError::Server(_) => "SERVER_ERROR",
            ServiceError::Internal(_) | ServiceError::Decode(_) => "INTERNAL_ERROR",
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message: self.to_string(),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail carried by [`ErrorResponse`]
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
