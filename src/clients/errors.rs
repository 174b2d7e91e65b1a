//! HTTP-specific error types for the ShipStation API SDK.
//!
//! This module contains error types for HTTP operations, including response
//! errors and request validation failures.
//!
//! # Error Handling
//!
//! The SDK uses specific error types for different failure scenarios:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Dispatch-time errors pass through to the caller unchanged: the SDK
//! performs no retry and no error re-shaping.
//!
//! # Example
//!
//! ```rust,ignore
//! use shipstation_api::{HttpError, ShipStationClient};
//!
//! match client.resource(resource).get("", None).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message is the raw response body as returned by the server — no
/// transformation is applied. The parsed body is also available for callers
/// that want to inspect individual fields.
///
/// # Example
///
/// ```rust
/// use shipstation_api::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"Message":"Not Found"}"#.to_string(),
///     body: json!({"Message": "Not Found"}),
/// };
///
/// println!("Status {}: {}", error.code, error.message);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body text.
    pub message: String,
    /// The response body parsed as JSON (`{}` if the body was not JSON).
    pub body: serde_json::Value,
}

impl HttpResponseError {
    /// Returns `true` if this error is an HTTP 404 Not Found response.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent. GET requests carry their
/// options as query parameters and DELETE requests carry nothing, so a body
/// on either is rejected.
///
/// # Example
///
/// ```rust
/// use shipstation_api::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::BodyNotAllowed {
///     method: "get".to_string(),
/// };
///
/// println!("{}", error); // "Cannot send a body with get requests."
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A body was provided for a method that does not accept one.
    #[error("Cannot send a body with {method} requests.")]
    BodyNotAllowed {
        /// The HTTP method that rejects a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// This enum provides a single error type for HTTP operations, making it
/// easier to handle errors at API boundaries. Use pattern matching to
/// handle specific error types.
///
/// # Example
///
/// ```rust,ignore
/// use shipstation_api::HttpError;
///
/// let result = client.resource(resource).get("", None).await;
/// match result {
///     Ok(response) => { /* handle success */ }
///     Err(HttpError::Response(e)) => { /* handle API error */ }
///     Err(HttpError::InvalidRequest(e)) => { /* handle validation error */ }
///     Err(HttpError::Network(e)) => { /* handle network error */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
