#[derive(Debug, Clone)]
pub struct AzureCredentials {
    pub api_key: String,
    pub endpoint: String,
    pub deployment: String,
    pub api_version: String,
}

impl AzureCredentials {
    pub const DEFAULT_DEPLOYMENT: &'static str = "dalle-3";
    pub const DEFAULT_API_VERSION: &'static str = "2023-12-01-preview";

    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            deployment: Self::DEFAULT_DEPLOYMENT.to_string(),
            api_version: Self::DEFAULT_API_VERSION.to_string(),
        }
    }

    pub fn generations_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/images/generations",
            self.endpoint.trim_end_matches('/'),
            self.deployment
        )
    }
}
