use serde::Serialize;

use crate::images::enums::prompt_mode::PromptMode;

use super::image_options::ImageOptions;

pub const IMAGE_COUNT: u8 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageRequestParameters {
    pub subject_text: String,
    pub prompt: String,
    pub size: String,
    pub quality: String,
    pub style: String,
    pub image_count: u8,
}

impl ImageRequestParameters {
    pub fn new(mode: PromptMode, subject_text: &str, options: &ImageOptions) -> Self {
        let size = match mode.fixed_size() {
            Some(size) => size.to_string(),
            None => options.size.to_string(),
        };

        Self {
            subject_text: subject_text.to_string(),
            prompt: mode.prompt(subject_text),
            size,
            quality: options.quality.to_string(),
            style: options.style.to_string(),
            image_count: IMAGE_COUNT,
        }
    }
}
