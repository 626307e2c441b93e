use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DalleGenerateImageResponse {
    pub data: Vec<DalleDataUrl>,
}

#[derive(Debug, Deserialize)]
pub struct DalleDataUrl {
    pub url: Option<String>,
    pub revised_prompt: Option<String>,
}
