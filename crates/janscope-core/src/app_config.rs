#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for the search front end, read from `JANSCOPE_*` env vars.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base endpoint of the product-search service; `/search` is appended.
    pub api_url: String,
    pub env: Environment,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Extra attempts after the first failure for transient errors.
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
}
