use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DalleErrorResponse {
    pub error: DalleError,
}

#[derive(Debug, Deserialize)]
pub struct DalleError {
    pub code: Option<String>,
    pub message: String,
}
