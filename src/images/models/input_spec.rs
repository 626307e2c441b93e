use serde::Serialize;

use super::image_request_parameters::ImageRequestParameters;

/// JSON body of an image generations call.
#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub model: String,
    pub prompt: String,
    pub size: String,
    pub quality: String,
    pub style: String,
    pub n: u8,
}

impl InputSpec {
    pub fn new(model: &str, parameters: &ImageRequestParameters) -> Self {
        Self {
            model: model.to_string(),
            prompt: parameters.prompt.to_string(),
            size: parameters.size.to_string(),
            quality: parameters.quality.to_string(),
            style: parameters.style.to_string(),
            n: parameters.image_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::images::{enums::prompt_mode::PromptMode, models::image_options::ImageOptions};

    use super::*;

    #[test]
    fn test_icon_builder_payload() {
        let parameters =
            ImageRequestParameters::new(PromptMode::Icon, "IconBuilder", &ImageOptions::default());
        let input_spec = InputSpec::new("dalle-3", &parameters);

        assert_eq!(
            serde_json::to_value(&input_spec).unwrap(),
            json!({
                "model": "dalle-3",
                "prompt": "Rounded edges square mobile app logo design without text, 3d origami of a 'IconBuilder' GPT, subtle gradient, minimal blue background. Conveys the idea of the APPLICATION NAME: 'IconBuilder'",
                "size": "1024x1024",
                "quality": "standard",
                "style": "vivid",
                "n": 1
            })
        );
    }
}
