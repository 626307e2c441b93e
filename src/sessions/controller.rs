use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    images::dtos::generate_image_dto::GenerateImageDto,
    AppState,
};

use super::{
    dtos::select_example_dto::SelectExampleDto,
    models::{session::Session, session_generation::SessionGeneration},
    service,
};

pub async fn create_session(State(state): State<AppState>) -> Json<Session> {
    Json(service::create_session(&state.sessions).await)
}

pub async fn get_session_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Session>, ApiError> {
    match service::get_session_by_id(&id, &state.sessions).await {
        Ok(session) => Ok(Json(session)),
        Err(e) => Err(e),
    }
}

pub async fn generate_for_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonFromRequest(dto): JsonFromRequest<GenerateImageDto>,
) -> Result<Json<SessionGeneration>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(e.into());
    }

    match service::generate_for_session(&id, &dto, &state).await {
        Ok(generation) => Ok(Json(generation)),
        Err(e) => Err(e),
    }
}

pub async fn select_example_for_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonFromRequest(dto): JsonFromRequest<SelectExampleDto>,
) -> Result<Json<SessionGeneration>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(e.into());
    }

    match service::select_example_for_session(&id, &dto, &state).await {
        Ok(generation) => Ok(Json(generation)),
        Err(e) => Err(e),
    }
}

pub async fn reset_session_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Session>, ApiError> {
    match service::reset_session_by_id(&id, &state.sessions).await {
        Ok(session) => Ok(Json(session)),
        Err(e) => Err(e),
    }
}
