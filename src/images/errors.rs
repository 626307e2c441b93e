use std::fmt;

use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ImagesApiError {
    RequestFailure(String),
}

impl ImagesApiError {
    pub fn request_failure<D: fmt::Display>(detail: D) -> Self {
        Self::RequestFailure(format!(
            "An error occurred during Azure DALL-E 3 query: {}",
            detail
        ))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::RequestFailure(message) => message,
        }
    }

    pub fn value(&self) -> ApiError {
        match self {
            Self::RequestFailure(message) => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: message.to_string(),
            },
        }
    }
}

impl fmt::Display for ImagesApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
