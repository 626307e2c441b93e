#[non_exhaustive]
pub struct ImageSize;

impl ImageSize {
    pub const SQUARE: &'static str = "1024x1024";
    pub const LANDSCAPE: &'static str = "1792x1024";
    pub const PORTRAIT: &'static str = "1024x1792";

    pub fn supported() -> [&'static str; 3] {
        [Self::SQUARE, Self::LANDSCAPE, Self::PORTRAIT]
    }
}
