use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_API_KEY_ENV: &str = "TMDB_API_KEY";

/// Options that control how the catalog service is queried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogOptions {
    pub base_url: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    pub language: String,
    /// Result pages requested per genre.
    pub pages: u32,
    pub timeout_secs: u64,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            language: "en-US".to_string(),
            pages: 1,
            timeout_secs: 30,
        }
    }
}
