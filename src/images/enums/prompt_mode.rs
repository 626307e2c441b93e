use serde::{Deserialize, Serialize};

use super::image_size::ImageSize;

const ICON_EXAMPLES: [&str; 4] = ["IntelliPrompt", "SmartChat", "Headline2Image", "IconBuilder"];

const HEADLINE_EXAMPLES: [&str; 4] = [
    "Scientists Discover Glowing Fish Species in the Deep Sea",
    "City Opens Its First Fully Solar-Powered Public Library",
    "Local Bakery Wins National Award for Sourdough Bread",
    "Astronomers Capture Clearest Image Yet of a Distant Galaxy",
];

/// How the subject text becomes a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptMode {
    /// The subject is an application name wrapped in the logo template.
    Icon,
    /// The subject is a news headline sent as-is.
    Headline,
}

impl PromptMode {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Icon => "icon",
            Self::Headline => "headline",
        }
    }

    /// Builds the prompt sent to the service. The subject is substituted
    /// verbatim, without escaping or trimming.
    pub fn prompt(&self, subject_text: &str) -> String {
        match *self {
            Self::Icon => format!(
                "Rounded edges square mobile app logo design without text, 3d origami of a '{}' GPT, subtle gradient, minimal blue background. Conveys the idea of the APPLICATION NAME: '{}'",
                subject_text, subject_text
            ),
            Self::Headline => subject_text.to_string(),
        }
    }

    /// Icons are always square; headlines take whatever size was chosen.
    pub fn fixed_size(&self) -> Option<&'static str> {
        match *self {
            Self::Icon => Some(ImageSize::SQUARE),
            Self::Headline => None,
        }
    }

    pub fn sizes(&self) -> Vec<&'static str> {
        match self.fixed_size() {
            Some(size) => vec![size],
            None => ImageSize::supported().to_vec(),
        }
    }

    pub fn examples(&self) -> &'static [&'static str] {
        match *self {
            Self::Icon => &ICON_EXAMPLES,
            Self::Headline => &HEADLINE_EXAMPLES,
        }
    }
}
