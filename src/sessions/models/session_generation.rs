use serde::{Deserialize, Serialize};

use crate::images::models::generated_image::GeneratedImage;

use super::session::Session;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionGeneration {
    pub session: Session,
    pub image: GeneratedImage,
}
