use axum::Json;
use serde_json::{json, Value};

pub const TITLE: &str = "IconBuilder: DALL-E 3 Icon Generator";
pub const SUBTITLE: &str = "Please be patient after every submission";

pub async fn get_root() -> Json<Value> {
    Json(json!({
        "title": TITLE,
        "subtitle": SUBTITLE,
    }))
}
