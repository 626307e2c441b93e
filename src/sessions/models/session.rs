use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    app::util::time,
    images::{errors::ImagesApiError, models::generated_image::GeneratedImage},
};

pub type SessionStore = Arc<RwLock<HashMap<String, Session>>>;

/// What a client currently shows: the chosen example title and the last
/// image that was generated successfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub created_at: i64,
}

impl Session {
    pub fn new() -> Self {
        return Self {
            id: Uuid::new_v4().to_string(),
            title: None,
            image_url: None,
            created_at: time::current_time_in_secs() as i64,
        };
    }

    pub fn with_title(self, title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..self
        }
    }

    /// A failed generation leaves the previous image in place.
    pub fn with_result(self, result: &Result<GeneratedImage, ImagesApiError>) -> Self {
        match result {
            Ok(image) => Self {
                image_url: Some(image.url.to_string()),
                ..self
            },
            Err(_) => self,
        }
    }

    pub fn reset(self) -> Self {
        Self {
            title: None,
            image_url: None,
            ..self
        }
    }
}
