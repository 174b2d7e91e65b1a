//! HTTP client for ShipStation API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the ShipStation API and tracking the server-reported
//! rate-limit window.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use parking_lot::RwLock;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::{HttpResponse, RateLimit};
use crate::config::ShipStationConfig;

/// Header carrying the partner key, when one is configured.
pub const PARTNER_HEADER: &str = "x-partner";

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the ShipStation API.
///
/// The client handles:
/// - Base URI construction from the configured base URL
/// - Default headers including Basic authentication and the partner key
/// - Rate-limit bookkeeping from response headers
///
/// The client performs no retry and no backoff: transport failures and
/// non-2xx responses pass through to the caller unchanged. Callers wanting
/// resilience must wrap calls externally.
///
/// # Rate-Limit State
///
/// After every completed HTTP exchange — success or error status alike —
/// the client records the rate-limit snapshot parsed from the response
/// headers, overwriting the previous observation. The snapshot is
/// instance-scoped: independent clients never share rate-limit state.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The snapshot is guarded by a lock and is
/// last-writer-wins; the call model is sequential request/response within
/// one logical session.
///
/// # Example
///
/// ```rust,ignore
/// use shipstation_api::{HttpClient, HttpRequest, HttpMethod, ShipStationConfig, ApiKey, ApiSecret};
///
/// let config = ShipStationConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret(ApiSecret::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/orders/")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// println!("{} requests remaining", client.remaining_requests());
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://ssapi.shipstation.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Most recent rate-limit observation; `None` until a request completes.
    rate_limit: RwLock<Option<RateLimit>>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// The `Authorization` header is computed once as
    /// `Basic base64(key:secret)` and reused for every request. When a
    /// partner key is configured it is attached under the `x-partner`
    /// header.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use shipstation_api::{ApiKey, ApiSecret, ShipStationConfig};
    /// use shipstation_api::clients::HttpClient;
    ///
    /// let config = ShipStationConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .api_secret(ApiSecret::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// ```
    #[must_use]
    pub fn new(config: &ShipStationConfig) -> Self {
        let base_uri = config.base_url().as_ref().to_string();

        // Basic credentials from key:secret
        let credentials = format!(
            "{}:{}",
            config.api_key().as_ref(),
            config.api_secret().as_ref()
        );
        let authorization = format!("Basic {}", STANDARD.encode(credentials));

        // Build User-Agent header
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("ShipStation API Library v{SDK_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Authorization".to_string(), authorization);

        if let Some(partner_key) = config.partner_key() {
            default_headers.insert(PARTNER_HEADER.to_string(), partner_key.to_string());
        }

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
            rate_limit: RwLock::new(None),
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the most recent rate-limit snapshot, if any request has
    /// completed.
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimit> {
        *self.rate_limit.read()
    }

    /// Returns the request ceiling from the last snapshot, or 0 if no
    /// request has completed yet.
    #[must_use]
    pub fn max_allowed_requests(&self) -> u64 {
        self.rate_limit().map_or(0, |limit| limit.limit)
    }

    /// Returns the remaining request count from the last snapshot, or 0 if
    /// no request has completed yet.
    #[must_use]
    pub fn remaining_requests(&self) -> u64 {
        self.rate_limit().map_or(0, |limit| limit.remaining)
    }

    /// Returns the seconds until the window resets from the last snapshot,
    /// or 0 if no request has completed yet.
    #[must_use]
    pub fn seconds_until_reset(&self) -> u64 {
        self.rate_limit().map_or(0, |limit| limit.reset_seconds)
    }

    /// Returns `true` if the last observed window reports zero remaining
    /// requests.
    ///
    /// Returns `false` before any request has completed. The SDK never
    /// throttles on its own; callers must check this proactively.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.rate_limit().is_some_and(|limit| limit.is_exhausted())
    }

    /// Sends an HTTP request to the ShipStation API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction
    /// - Header merging
    /// - Response parsing
    /// - Rate-limit bookkeeping
    ///
    /// The rate-limit snapshot is recorded from every completed exchange,
    /// including non-2xx responses, before the result is returned.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        // Build full URL
        let url = format!("{}{}", self.base_uri, request.path);

        // Merge headers
        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        // Build the reqwest request
        let mut req_builder = match request.http_method {
            crate::clients::http_request::HttpMethod::Get => self.client.get(&url),
            crate::clients::http_request::HttpMethod::Post => self.client.post(&url),
            crate::clients::http_request::HttpMethod::Put => self.client.put(&url),
            crate::clients::http_request::HttpMethod::Delete => self.client.delete(&url),
        };

        // Add headers
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        // Add query params
        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        // Add body
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        // Send request
        let res = req_builder.send().await?;

        // Parse response
        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        // Parse body as JSON
        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| serde_json::json!({}))
        };

        let response = HttpResponse::new(code, res_headers, body);

        // Record the snapshot, overwriting any prior observation
        self.record_rate_limit(response.rate_limit);

        if response.rate_limit.is_exhausted() {
            tracing::warn!(
                "ShipStation rate limit exhausted; window resets in {} seconds",
                response.rate_limit.reset_seconds
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: body_text,
            body: response.body,
        }))
    }

    /// Stores the latest rate-limit observation.
    fn record_rate_limit(&self, snapshot: RateLimit) {
        *self.rate_limit.write() = Some(snapshot);
    }

    /// Parses response headers into a `HashMap`, lowercasing names.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, ApiSecret};

    fn create_test_config() -> ShipStationConfig {
        ShipStationConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .api_secret(ApiSecret::new("secret").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_config() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        assert_eq!(client.base_uri(), "https://ssapi.shipstation.com");
    }

    #[test]
    fn test_authorization_header_is_basic_base64() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        // base64("key:secret")
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Basic a2V5OnNlY3JldA==".to_string())
        );
    }

    #[test]
    fn test_partner_header_injection() {
        let config = ShipStationConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .api_secret(ApiSecret::new("secret").unwrap())
            .partner_key("partner-123")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        assert_eq!(
            client.default_headers().get(PARTNER_HEADER),
            Some(&"partner-123".to_string())
        );
    }

    #[test]
    fn test_no_partner_header_when_unset() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        assert!(client.default_headers().get(PARTNER_HEADER).is_none());
    }

    #[test]
    fn test_accept_header_is_json() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("ShipStation API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_rate_limit_unset_before_any_request() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        assert!(client.rate_limit().is_none());
        assert_eq!(client.max_allowed_requests(), 0);
        assert_eq!(client.remaining_requests(), 0);
        assert_eq!(client.seconds_until_reset(), 0);
        assert!(!client.is_rate_limited());
    }

    #[test]
    fn test_record_rate_limit_overwrites_snapshot() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        client.record_rate_limit(RateLimit {
            limit: 40,
            remaining: 10,
            reset_seconds: 45,
        });
        assert_eq!(client.remaining_requests(), 10);
        assert!(!client.is_rate_limited());

        client.record_rate_limit(RateLimit {
            limit: 40,
            remaining: 0,
            reset_seconds: 60,
        });
        assert_eq!(client.max_allowed_requests(), 40);
        assert_eq!(client.remaining_requests(), 0);
        assert_eq!(client.seconds_until_reset(), 60);
        assert!(client.is_rate_limited());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
