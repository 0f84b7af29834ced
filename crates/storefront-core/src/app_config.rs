/// Runtime configuration for the storefront catalog client, loaded from
/// environment variables by [`crate::config::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the REST backend, e.g. `https://shop.example.com`.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// `limit` query parameter sent to the public products endpoint.
    pub product_limit: u32,
    /// Additional retry attempts after the first failure for transient errors.
    pub max_retries: u32,
    /// Base delay in seconds for exponential backoff: `base * 2^attempt`.
    pub retry_backoff_base_secs: u64,
    /// Quiet period before a typed query fires a suggestion request.
    pub debounce_ms: u64,
    pub log_level: String,
}
