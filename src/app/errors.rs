use axum::{http::StatusCode, BoxError};
use tower::buffer::error::{Closed, ServiceError};

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
    ServiceUnavailable,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "An internal server error occurred.".to_string(),
            },
            Self::ServiceUnavailable => ApiError {
                code: StatusCode::SERVICE_UNAVAILABLE,
                message: "The service is busy. Please try again.".to_string(),
            },
        }
    }
}

/// Maps failures raised by the buffer and rate limit layers.
pub async fn handle_middleware_error(err: BoxError) -> ApiError {
    tracing::error!(%err);

    if err.is::<Closed>() || err.is::<ServiceError>() {
        return DefaultApiError::ServiceUnavailable.value();
    }

    DefaultApiError::InternalServerError.value()
}
