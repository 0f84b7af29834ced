//! HTTP client for the storefront REST backend.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use storefront_core::Product;

use crate::error::ClientError;
use crate::payload::normalize_payload;
use crate::retry::retry_with_backoff;

/// HTTP client for the storefront's public product endpoints.
///
/// Handles rate limiting (429), not-found (404), and other non-2xx responses
/// as typed errors. Transient errors (429, network failures) are automatically
/// retried with exponential backoff up to `max_retries` additional attempts.
///
/// Response payloads are passed through the shape normalizer, so every fetch
/// returns one canonical `Vec<Product>` regardless of how the endpoint wraps
/// its list.
pub struct ApiClient {
    client: Client,
    base_url: String,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl ApiClient {
    /// Creates an `ApiClient` with configured timeout, `User-Agent`, and retry policy.
    ///
    /// `max_retries` is the number of additional attempts after the first failure for
    /// retriable errors (429, network errors). Set to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed (e.g., invalid TLS config).
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches the public product listing, optionally scoped to a category slug.
    ///
    /// `GET <base>/api/products/public?limit=<n>[&category=<slug>]`
    ///
    /// # Errors
    ///
    /// - [`ClientError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`ClientError::NotFound`] — HTTP 404 (not retried).
    /// - [`ClientError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ClientError::Http`] — network or TLS failure after all retries exhausted.
    /// - [`ClientError::Deserialize`] — response body is not valid JSON (not retried).
    pub async fn fetch_products(
        &self,
        limit: u32,
        category: Option<&str>,
    ) -> Result<Vec<Product>, ClientError> {
        let mut params = vec![("limit", limit.to_string())];
        if let Some(slug) = category {
            params.push(("category", slug.to_owned()));
        }
        let url = self.endpoint_url("api/products/public", &params)?;
        self.fetch_normalized(&url, "public product listing").await
    }

    /// Fetches the products of one category.
    ///
    /// `GET <base>/api/categories/:slug`
    ///
    /// # Errors
    ///
    /// Same error surface as [`Self::fetch_products`].
    pub async fn fetch_category(&self, slug: &str) -> Result<Vec<Product>, ClientError> {
        let url = self.endpoint_url(&format!("api/categories/{slug}"), &[])?;
        self.fetch_normalized(&url, "category listing").await
    }

    /// Fetches free-text search results.
    ///
    /// `GET <base>/api/products/search?q=<term>`
    ///
    /// # Errors
    ///
    /// Same error surface as [`Self::fetch_products`].
    pub async fn search(&self, term: &str) -> Result<Vec<Product>, ClientError> {
        let url = self.endpoint_url("api/products/search", &[("q", term.to_owned())])?;
        self.fetch_normalized(&url, "search results").await
    }

    /// Performs one GET with retry, status triage, and payload normalization.
    async fn fetch_normalized(
        &self,
        url: &str,
        context: &str,
    ) -> Result<Vec<Product>, ClientError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.to_owned();
            let context = context.to_owned();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(ClientError::RateLimited {
                        url,
                        retry_after_secs,
                    });
                }

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(ClientError::NotFound { url });
                }

                if !status.is_success() {
                    return Err(ClientError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                let payload =
                    serde_json::from_str::<Value>(&body).map_err(|e| ClientError::Deserialize {
                        context: context.clone(),
                        source: e,
                    })?;

                Ok(normalize_payload(&payload))
            }
        })
        .await
    }

    /// Builds an endpoint URL from the configured base, path, and query pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the configured base cannot be
    /// parsed as a valid URL base.
    fn endpoint_url(&self, path: &str, params: &[(&str, String)]) -> Result<String, ClientError> {
        let base = format!("{}/{path}", self.base_url);
        let mut url = reqwest::Url::parse(&base).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: self.base_url.clone(),
            reason: format!("cannot build endpoint \"{path}\": {e}"),
        })?;

        for (key, value) in params {
            url.query_pairs_mut().append_pair(key, value);
        }

        Ok(url.to_string())
    }
}
