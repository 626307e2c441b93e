#[non_exhaustive]
pub struct ImageQuality;

impl ImageQuality {
    pub const STANDARD: &'static str = "standard";
    pub const HD: &'static str = "hd";

    pub const HELP: &'static str = "“Standard” quality will create attractive images quickly and at low cost. Users can specify “hd” (and pay a higher price) to give the model more time to generate images, resulting in higher image quality, but also higher latency.";

    pub fn supported() -> [&'static str; 2] {
        [Self::STANDARD, Self::HD]
    }
}
