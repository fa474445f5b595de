use crate::common::*;

pub const DEFAULT_API_BASE_URL: &str = "https://bigquery.googleapis.com/bigquery/v2";

#[doc = "Env var consulted when the config file carries no access token"]
pub const ACCESS_TOKEN_ENV: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct WarehouseConfig {
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl WarehouseConfig {
    #[doc = "Token from the config file first, then from the environment"]
    pub fn resolve_access_token(&self) -> Option<String> {
        self.access_token
            .clone()
            .or_else(|| env::var(ACCESS_TOKEN_ENV).ok())
            .filter(|token| !token.trim().is_empty())
    }
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            project_id: "your-gcp-project-id".to_string(),
            dataset_id: "your_ads_dataset".to_string(),
            table_id: "ads_performance_table".to_string(),
            api_base_url: default_api_base_url(),
            location: None,
            access_token: None,
        }
    }
}
