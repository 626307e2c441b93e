use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::images::{
    dtos::generate_image_dto::{options_from, validate_quality, validate_size, validate_style},
    enums::prompt_mode::PromptMode,
    models::image_options::ImageOptions,
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SelectExampleDto {
    pub mode: PromptMode,
    pub index: usize,
    #[validate(custom(function = "validate_size"))]
    pub size: Option<String>,
    #[validate(custom(function = "validate_quality"))]
    pub quality: Option<String>,
    #[validate(custom(function = "validate_style"))]
    pub style: Option<String>,
}

impl SelectExampleDto {
    pub fn example(&self) -> Option<&'static str> {
        self.mode.examples().get(self.index).copied()
    }

    pub fn options(&self) -> ImageOptions {
        options_from(&self.size, &self.quality, &self.style)
    }
}
