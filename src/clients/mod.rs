//! HTTP client types for ShipStation API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to the ShipStation API. It handles
//! request/response processing and rate-limit header parsing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RateLimit`]: The rate-limit snapshot parsed from response headers
//!
//! Most callers never touch this layer directly — the resource-scoped
//! client in [`crate::rest`] builds requests on their behalf.
//!
//! # Example
//!
//! ```rust,ignore
//! use shipstation_api::{HttpClient, HttpRequest, HttpMethod, ShipStationConfig};
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/orders/")
//!     .query_param("orderStatus", "awaiting_shipment")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Error Behavior
//!
//! The client performs no retry and no backoff. Non-2xx responses become
//! [`HttpError::Response`] carrying the raw body; connectivity failures
//! become [`HttpError::Network`]. The rate-limit snapshot is still recorded
//! from error responses before the error is returned.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, PARTNER_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{
    HttpResponse, RateLimit, RATE_LIMIT_LIMIT_HEADER, RATE_LIMIT_REMAINING_HEADER,
    RATE_LIMIT_RESET_HEADER,
};
