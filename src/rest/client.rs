//! Resource-scoped REST client for the ShipStation API.
//!
//! This module provides the top-level [`ShipStationClient`] and the
//! [`ResourceClient`] it hands out for a selected [`Resource`].

use std::collections::HashMap;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, RateLimit};
use crate::config::ShipStationConfig;
use crate::rest::orders::Orders;
use crate::rest::resource::Resource;

/// Top-level client for the ShipStation API.
///
/// Owns the configured HTTP transport for the lifetime of the client and
/// hands out immutable resource-scoped clients via [`resource`](Self::resource).
/// Selecting a resource is a pure operation: it returns a new scoped value
/// and never mutates the client, so scoped clients for different resources
/// can coexist freely. All of them share this client's transport and
/// rate-limit snapshot.
///
/// # Thread Safety
///
/// `ShipStationClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use shipstation_api::{ShipStationClient, ShipStationConfig, Resource, ApiKey, ApiSecret};
///
/// let config = ShipStationConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret(ApiSecret::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// let client = ShipStationClient::new(&config);
///
/// // Generic verbs against any resource
/// let response = client.resource(Resource::Carriers).get("", None).await?;
///
/// // The orders helper for common shorthand
/// let count = client.orders().awaiting_shipment_count().await?;
///
/// if client.is_rate_limited() {
///     println!("resets in {}s", client.seconds_until_reset());
/// }
/// ```
#[derive(Debug)]
pub struct ShipStationClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify ShipStationClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShipStationClient>();
};

impl ShipStationClient {
    /// Creates a new client for the given configuration.
    ///
    /// The reusable transport is established here; credentials were already
    /// validated when the configuration was built.
    #[must_use]
    pub fn new(config: &ShipStationConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns a client scoped to the given resource.
    ///
    /// The returned value borrows this client's transport; it carries no
    /// state of its own beyond the resource selector.
    #[must_use]
    pub const fn resource(&self, resource: Resource) -> ResourceClient<'_> {
        ResourceClient {
            http_client: &self.http_client,
            resource,
        }
    }

    /// Returns the orders helper, scoped to [`Resource::Orders`].
    #[must_use]
    pub const fn orders(&self) -> Orders<'_> {
        Orders::new(self.resource(Resource::Orders))
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the most recent rate-limit snapshot, if any request has
    /// completed.
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimit> {
        self.http_client.rate_limit()
    }

    /// Returns the request ceiling from the last snapshot, or 0 if no
    /// request has completed yet.
    #[must_use]
    pub fn max_allowed_requests(&self) -> u64 {
        self.http_client.max_allowed_requests()
    }

    /// Returns the remaining request count from the last snapshot, or 0 if
    /// no request has completed yet.
    #[must_use]
    pub fn remaining_requests(&self) -> u64 {
        self.http_client.remaining_requests()
    }

    /// Returns the seconds until the window resets from the last snapshot,
    /// or 0 if no request has completed yet.
    #[must_use]
    pub fn seconds_until_reset(&self) -> u64 {
        self.http_client.seconds_until_reset()
    }

    /// Returns `true` if the last observed window reports zero remaining
    /// requests. Returns `false` before any request has completed.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.http_client.is_rate_limited()
    }
}

/// A client scoped to a single [`Resource`].
///
/// Provides the generic verbs (`get`, `post`, `update`, `delete`), each a
/// thin wrapper over the transport that fixes the HTTP method and joins the
/// resource path with an optional sub-path suffix. GET options are encoded
/// as query parameters; POST/PUT options as a JSON body; DELETE carries
/// neither.
///
/// `ResourceClient` is a stateless borrow — cheap to create, `Copy`, and
/// safe to drop at any time.
#[derive(Clone, Copy, Debug)]
pub struct ResourceClient<'a> {
    http_client: &'a HttpClient,
    resource: Resource,
}

impl ResourceClient<'_> {
    /// Returns the resource this client is scoped to.
    #[must_use]
    pub const fn resource(&self) -> Resource {
        self.resource
    }

    /// Joins the resource path segment with a sub-path suffix.
    fn request_path(&self, endpoint: &str) -> String {
        format!("{}{}", self.resource.as_path(), endpoint)
    }

    /// Sends a GET request for this resource.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Sub-path suffix appended to the resource path
    ///   (e.g., an id, or `""` for the listing)
    /// * `query` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures and non-2xx
    /// responses, unmodified.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = HashMap::new();
    /// query.insert("orderStatus".to_string(), "awaiting_shipment".to_string());
    /// let response = client.resource(Resource::Orders).get("", Some(query)).await?;
    /// ```
    pub async fn get(
        &self,
        endpoint: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Get, endpoint, None, query)
            .await
    }

    /// Sends a POST request for this resource.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Sub-path suffix appended to the resource path
    /// * `body` - The JSON body to send
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures and non-2xx
    /// responses, unmodified.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let body = serde_json::json!({"orderNumber": "TEST-1001"});
    /// let response = client.resource(Resource::Orders).post("createorder", body).await?;
    /// ```
    pub async fn post(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Post, endpoint, Some(body), None)
            .await
    }

    /// Sends a PUT request for this resource.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Sub-path suffix appended to the resource path
    /// * `body` - The JSON body to send
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures and non-2xx
    /// responses, unmodified.
    pub async fn update(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Put, endpoint, Some(body), None)
            .await
    }

    /// Sends a DELETE request for this resource. DELETE takes no body.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Sub-path suffix appended to the resource path
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures and non-2xx
    /// responses, unmodified.
    pub async fn delete(&self, endpoint: &str) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Delete, endpoint, None, None)
            .await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(method, self.request_path(endpoint));

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build()?;
        self.http_client.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, ApiSecret};

    fn create_test_client() -> ShipStationClient {
        let config = ShipStationConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .api_secret(ApiSecret::new("secret").unwrap())
            .build()
            .unwrap();
        ShipStationClient::new(&config)
    }

    #[test]
    fn test_resource_selection_is_pure() {
        let client = create_test_client();

        let orders = client.resource(Resource::Orders);
        let carriers = client.resource(Resource::Carriers);

        // Selecting one resource does not disturb another scope
        assert_eq!(orders.resource(), Resource::Orders);
        assert_eq!(carriers.resource(), Resource::Carriers);
    }

    #[test]
    fn test_request_path_joins_resource_and_endpoint() {
        let client = create_test_client();

        let orders = client.resource(Resource::Orders);
        assert_eq!(orders.request_path(""), "/orders/");
        assert_eq!(orders.request_path("createorder"), "/orders/createorder");

        let shipments = client.resource(Resource::Shipments);
        assert_eq!(shipments.request_path("123"), "/shipments/123");
    }

    #[test]
    fn test_orders_helper_is_scoped_to_orders() {
        let client = create_test_client();
        assert_eq!(client.orders().client().resource(), Resource::Orders);
    }

    #[test]
    fn test_rate_limit_accessors_default_to_zero() {
        let client = create_test_client();

        assert!(client.rate_limit().is_none());
        assert_eq!(client.max_allowed_requests(), 0);
        assert_eq!(client.remaining_requests(), 0);
        assert_eq!(client.seconds_until_reset(), 0);
        assert!(!client.is_rate_limited());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShipStationClient>();
    }
}
