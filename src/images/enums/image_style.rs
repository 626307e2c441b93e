#[non_exhaustive]
pub struct ImageStyle;

impl ImageStyle {
    pub const VIVID: &'static str = "vivid";
    pub const NATURAL: &'static str = "natural";

    pub const HELP: &'static str =
        "Style provides advanced control of the visual style of the generation.";

    pub fn supported() -> [&'static str; 2] {
        [Self::VIVID, Self::NATURAL]
    }
}
