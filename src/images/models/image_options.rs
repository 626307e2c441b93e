use serde::{Deserialize, Serialize};

use crate::images::enums::{
    image_quality::ImageQuality, image_size::ImageSize, image_style::ImageStyle,
};

/// Caller-selected options. Values are forwarded untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOptions {
    pub size: String,
    pub quality: String,
    pub style: String,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            size: ImageSize::SQUARE.to_string(),
            quality: ImageQuality::STANDARD.to_string(),
            style: ImageStyle::VIVID.to_string(),
        }
    }
}
