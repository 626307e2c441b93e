use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum SessionsApiError {
    SessionNotFound,
    ExampleNotFound,
}

impl SessionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::SessionNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Session not found.".to_string(),
            },
            Self::ExampleNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Example not found.".to_string(),
            },
        }
    }
}
