use axum::Json;
use axum_macros::FromRequest;

use super::api_error::ApiError;

/// `Json` whose rejections (bad syntax, unknown mode, missing fields) are
/// rendered as `ApiError` bodies.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonFromRequest<T>(pub T);
