use serde::Deserialize;

use crate::images::models::azure_credentials::AzureCredentials;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub azure_openai_dalle3_api_key: String,
    pub azure_openai_api_endpoint_dalle3: String,
    #[serde(default = "default_deployment")]
    pub azure_openai_dalle3_deployment: String,
    #[serde(default = "default_api_version")]
    pub azure_openai_api_version: String,

    pub request_timeout_secs: Option<u64>,
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
}

impl Envy {
    pub fn credentials(&self) -> AzureCredentials {
        AzureCredentials {
            deployment: self.azure_openai_dalle3_deployment.to_string(),
            api_version: self.azure_openai_api_version.to_string(),
            ..AzureCredentials::new(
                self.azure_openai_dalle3_api_key.to_string(),
                self.azure_openai_api_endpoint_dalle3.to_string(),
            )
        }
    }
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_deployment() -> String {
    AzureCredentials::DEFAULT_DEPLOYMENT.to_string()
}

fn default_api_version() -> String {
    AzureCredentials::DEFAULT_API_VERSION.to_string()
}

fn default_session_ttl_secs() -> u64 {
    3600
}
