//! HTTP response types for the ShipStation API SDK.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimit`]
//! snapshot parsed from ShipStation's rate-limit headers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Header reporting the request ceiling for the current window.
pub const RATE_LIMIT_LIMIT_HEADER: &str = "x-rate-limit-limit";
/// Header reporting the requests remaining in the current window.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-rate-limit-remaining";
/// Header reporting the seconds until the current window resets.
pub const RATE_LIMIT_RESET_HEADER: &str = "x-rate-limit-reset";

/// A snapshot of the rate-limit window reported by the server.
///
/// ShipStation reports its rate limit in three integer headers:
/// `X-Rate-Limit-Limit`, `X-Rate-Limit-Remaining`, and `X-Rate-Limit-Reset`.
/// A snapshot is the most recent observation only — it is overwritten on
/// each request and never aggregated.
///
/// Absent, malformed, or negative header values are clamped to 0.
///
/// # Example
///
/// ```rust
/// use shipstation_api::RateLimit;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-rate-limit-limit".to_string(), vec!["40".to_string()]);
/// headers.insert("x-rate-limit-remaining".to_string(), vec!["39".to_string()]);
/// headers.insert("x-rate-limit-reset".to_string(), vec!["28".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers);
/// assert_eq!(limit.limit, 40);
/// assert_eq!(limit.remaining, 39);
/// assert_eq!(limit.reset_seconds, 28);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimit {
    /// The maximum number of requests allowed in the current window.
    pub limit: u64,
    /// The number of requests remaining in the current window.
    pub remaining: u64,
    /// Seconds until the current window resets.
    pub reset_seconds: u64,
}

impl RateLimit {
    /// Parses a rate-limit snapshot from a response header map.
    ///
    /// Header names are expected lowercased (as produced by the HTTP
    /// client's header parsing). Each value is coerced to a non-negative
    /// integer; anything absent, malformed, or negative becomes 0.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Self {
        Self {
            limit: parse_header_value(headers, RATE_LIMIT_LIMIT_HEADER),
            remaining: parse_header_value(headers, RATE_LIMIT_REMAINING_HEADER),
            reset_seconds: parse_header_value(headers, RATE_LIMIT_RESET_HEADER),
        }
    }

    /// Returns `true` if this snapshot reports an exhausted window.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// Coerces a header value to a non-negative integer, clamping to 0.
fn parse_header_value(headers: &HashMap<String, Vec<String>>, name: &str) -> u64 {
    headers
        .get(name)
        .and_then(|values| values.first())
        .and_then(|value| value.trim().parse::<i64>().ok())
        .map_or(0, |value| u64::try_from(value).unwrap_or(0))
}

/// An HTTP response from the ShipStation API.
///
/// Contains the response status code, headers, parsed JSON body, and the
/// rate-limit snapshot parsed from the response headers.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body (`{}` when the body was empty or not JSON).
    pub body: serde_json::Value,
    /// Rate-limit snapshot parsed from the response headers.
    pub rate_limit: RateLimit,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    ///
    /// The rate-limit headers are parsed unconditionally — a response
    /// without them yields an all-zero snapshot.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let rate_limit = RateLimit::from_headers(&headers);

        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rate_limit_headers(
        limit: &str,
        remaining: &str,
        reset: &str,
    ) -> HashMap<String, Vec<String>> {
        let mut headers = HashMap::new();
        headers.insert(RATE_LIMIT_LIMIT_HEADER.to_string(), vec![limit.to_string()]);
        headers.insert(
            RATE_LIMIT_REMAINING_HEADER.to_string(),
            vec![remaining.to_string()],
        );
        headers.insert(RATE_LIMIT_RESET_HEADER.to_string(), vec![reset.to_string()]);
        headers
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        let response_400 = HttpResponse::new(400, HashMap::new(), json!({}));
        assert!(!response_400.is_ok());

        let response_404 = HttpResponse::new(404, HashMap::new(), json!({}));
        assert!(!response_404.is_ok());

        let response_429 = HttpResponse::new(429, HashMap::new(), json!({}));
        assert!(!response_429.is_ok());

        let response_500 = HttpResponse::new(500, HashMap::new(), json!({}));
        assert!(!response_500.is_ok());
    }

    #[test]
    fn test_rate_limit_parsing() {
        let limit = RateLimit::from_headers(&rate_limit_headers("40", "0", "60"));
        assert_eq!(limit.limit, 40);
        assert_eq!(limit.remaining, 0);
        assert_eq!(limit.reset_seconds, 60);
        assert!(limit.is_exhausted());
    }

    #[test]
    fn test_rate_limit_missing_headers_clamp_to_zero() {
        let limit = RateLimit::from_headers(&HashMap::new());
        assert_eq!(limit.limit, 0);
        assert_eq!(limit.remaining, 0);
        assert_eq!(limit.reset_seconds, 0);
    }

    #[test]
    fn test_rate_limit_negative_values_clamp_to_zero() {
        let limit = RateLimit::from_headers(&rate_limit_headers("-1", "-5", "-60"));
        assert_eq!(limit.limit, 0);
        assert_eq!(limit.remaining, 0);
        assert_eq!(limit.reset_seconds, 0);
    }

    #[test]
    fn test_rate_limit_malformed_values_clamp_to_zero() {
        let limit = RateLimit::from_headers(&rate_limit_headers("abc", "", "12.5"));
        assert_eq!(limit.limit, 0);
        assert_eq!(limit.remaining, 0);
        assert_eq!(limit.reset_seconds, 0);
    }

    #[test]
    fn test_rate_limit_tolerates_surrounding_whitespace() {
        let limit = RateLimit::from_headers(&rate_limit_headers(" 40 ", "39", "28"));
        assert_eq!(limit.limit, 40);
        assert_eq!(limit.remaining, 39);
        assert!(!limit.is_exhausted());
    }

    #[test]
    fn test_response_parses_rate_limit_headers() {
        let response = HttpResponse::new(
            200,
            rate_limit_headers("40", "12", "33"),
            json!({"orders": []}),
        );

        assert_eq!(response.rate_limit.limit, 40);
        assert_eq!(response.rate_limit.remaining, 12);
        assert_eq!(response.rate_limit.reset_seconds, 33);
    }

    #[test]
    fn test_response_without_headers_has_zero_snapshot() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert_eq!(response.rate_limit, RateLimit::default());
    }

    #[test]
    fn test_empty_body_returns_empty_json() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert_eq!(response.body, json!({}));
    }
}
