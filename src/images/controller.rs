use axum::{extract::State, Json};
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::generate_image_dto::GenerateImageDto,
    enums::{image_quality::ImageQuality, image_style::ImageStyle, prompt_mode::PromptMode},
    models::{generated_image::GeneratedImage, image_options::ImageOptions},
    service,
};

pub async fn get_options() -> Json<Value> {
    let defaults = ImageOptions::default();

    Json(json!({
        "quality": {
            "values": ImageQuality::supported(),
            "default": defaults.quality,
            "help": ImageQuality::HELP,
        },
        "style": {
            "values": ImageStyle::supported(),
            "default": defaults.style,
            "help": ImageStyle::HELP,
        },
        "sizes": {
            "icon": PromptMode::Icon.sizes(),
            "headline": PromptMode::Headline.sizes(),
        },
        "examples": {
            "icon": PromptMode::Icon.examples(),
            "headline": PromptMode::Headline.examples(),
        },
    }))
}

pub async fn generate_image(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateImageDto>,
) -> Result<Json<GeneratedImage>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(e.into());
    }

    match service::generate_image(
        &state.http,
        &state.envy.credentials(),
        dto.mode,
        &dto.subject,
        &dto.options(),
    )
    .await
    {
        Ok(image) => Ok(Json(image)),
        Err(e) => Err(e.value()),
    }
}
