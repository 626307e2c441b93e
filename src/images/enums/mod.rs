pub mod image_quality;
pub mod image_size;
pub mod image_style;
pub mod prompt_mode;
