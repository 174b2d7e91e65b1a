//! # ShipStation API Rust SDK
//!
//! A Rust SDK for the ShipStation API, providing type-safe configuration,
//! Basic authentication, resource-scoped request dispatch, and rate-limit
//! bookkeeping.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ShipStationConfig`] and [`ShipStationConfigBuilder`]
//! - Validated newtypes for API credentials and the base URL
//! - An async HTTP client with Basic authentication and partner-key support
//! - Resource-scoped clients for the eleven ShipStation resource families
//! - Rate-limit tracking from the `X-Rate-Limit-*` response headers
//! - Per-resource convenience helpers (orders)
//!
//! ## Quick Start
//!
//! ```rust
//! use shipstation_api::{ShipStationConfig, ShipStationClient, ApiKey, ApiSecret};
//!
//! // Create configuration using the builder pattern
//! let config = ShipStationConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_secret(ApiSecret::new("your-api-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ShipStationClient::new(&config);
//! ```
//!
//! ## Making API Requests
//!
//! Every resource family is addressed through a scoped client returned by
//! [`ShipStationClient::resource`]:
//!
//! ```rust,ignore
//! use shipstation_api::Resource;
//!
//! // List carriers
//! let carriers = client.resource(Resource::Carriers).get("", None).await?;
//!
//! // Fetch one shipment by id
//! let shipment = client.resource(Resource::Shipments).get("123456", None).await?;
//!
//! // Create an order through the orders helper
//! let created = client.orders().create(serde_json::json!({
//!     "orderNumber": "TEST-1001",
//!     "orderDate": "2024-01-01",
//!     "orderStatus": "awaiting_shipment",
//! })).await?;
//! ```
//!
//! GET options are encoded as query parameters; POST/PUT options as a JSON
//! request body. Responses are decoded into `serde_json::Value` — the SDK
//! imposes no fixed schema on server payloads.
//!
//! ## Rate Limits
//!
//! ShipStation reports its per-window quota in three response headers. The
//! client records the latest observation after every request and exposes it
//! through accessors:
//!
//! ```rust,ignore
//! let response = client.resource(Resource::Orders).get("", None).await?;
//!
//! println!("{}/{} requests used, reset in {}s",
//!     client.max_allowed_requests() - client.remaining_requests(),
//!     client.max_allowed_requests(),
//!     client.seconds_until_reset());
//!
//! if client.is_rate_limited() {
//!     // The SDK never throttles or retries on its own.
//!     tokio::time::sleep(std::time::Duration::from_secs(client.seconds_until_reset())).await;
//! }
//! ```
//!
//! ## Error Handling
//!
//! Configuration errors ([`ConfigError`]) fail fast at construction, before
//! any network call. Dispatch-time errors ([`HttpError`]) pass through from
//! the transport unmodified: non-2xx responses, connectivity failures, and
//! request-validation errors. No retry, no backoff, no suppression — with
//! one documented exception: the orders existence check downgrades a 404 to
//! `Ok(false)`.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and rate-limit state are
//!   instance-based; independent clients never interfere
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Pure resource selection**: Scoping a client to a resource returns a
//!   new value instead of mutating shared state
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, ApiSecret, BaseUrl, ShipStationConfig, ShipStationConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RateLimit,
};

// Re-export resource layer types
pub use rest::{Orders, Resource, ResourceClient, ShipStationClient, UnknownResourceError};
