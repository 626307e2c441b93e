use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::images::{
    enums::{
        image_quality::ImageQuality, image_size::ImageSize, image_style::ImageStyle,
        prompt_mode::PromptMode,
    },
    models::image_options::ImageOptions,
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateImageDto {
    pub mode: PromptMode,
    #[validate(length(
        min = 1,
        max = 4000,
        message = "subject must be between 1 and 4000 characters."
    ))]
    pub subject: String,
    #[validate(custom(function = "validate_size"))]
    pub size: Option<String>,
    #[validate(custom(function = "validate_quality"))]
    pub quality: Option<String>,
    #[validate(custom(function = "validate_style"))]
    pub style: Option<String>,
}

impl GenerateImageDto {
    pub fn options(&self) -> ImageOptions {
        options_from(&self.size, &self.quality, &self.style)
    }
}

pub fn options_from(
    size: &Option<String>,
    quality: &Option<String>,
    style: &Option<String>,
) -> ImageOptions {
    let defaults = ImageOptions::default();

    ImageOptions {
        size: size.clone().unwrap_or(defaults.size),
        quality: quality.clone().unwrap_or(defaults.quality),
        style: style.clone().unwrap_or(defaults.style),
    }
}

// The selectors only ever offer these values; the request service itself
// forwards whatever it is given.
pub fn validate_size(value: &str) -> Result<(), ValidationError> {
    if !ImageSize::supported().contains(&value) {
        return Err(ValidationError::new("validate_size"));
    }

    return Ok(());
}

pub fn validate_quality(value: &str) -> Result<(), ValidationError> {
    if !ImageQuality::supported().contains(&value) {
        return Err(ValidationError::new("validate_quality"));
    }

    return Ok(());
}

pub fn validate_style(value: &str) -> Result<(), ValidationError> {
    if !ImageStyle::supported().contains(&value) {
        return Err(ValidationError::new("validate_style"));
    }

    return Ok(());
}
