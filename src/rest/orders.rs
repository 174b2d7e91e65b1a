//! Convenience helper for the orders resource.
//!
//! [`Orders`] adds domain-shaped shorthand on top of the generic verbs:
//! order creation, existence checks by order number, and the
//! awaiting-shipment count.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::HttpError;
use crate::rest::client::ResourceClient;

/// Convenience methods for the orders resource.
///
/// A stateless wrapper over a scoped [`ResourceClient`]; nothing is cached
/// between calls. Obtain one via
/// [`ShipStationClient::orders`](crate::ShipStationClient::orders).
///
/// # Example
///
/// ```rust,ignore
/// let orders = client.orders();
///
/// let created = orders.create(serde_json::json!({
///     "orderNumber": "TEST-1001",
///     "orderStatus": "awaiting_shipment",
/// })).await?;
///
/// if orders.exists_by_order_number("TEST-1001").await? {
///     println!("order is in ShipStation");
/// }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Orders<'a> {
    client: ResourceClient<'a>,
}

impl<'a> Orders<'a> {
    /// Creates a helper bound to the given scoped client.
    #[must_use]
    pub const fn new(client: ResourceClient<'a>) -> Self {
        Self { client }
    }

    /// Returns the underlying scoped client.
    #[must_use]
    pub const fn client(&self) -> &ResourceClient<'a> {
        &self.client
    }

    /// Creates a single order.
    ///
    /// Posts the payload to the `createorder` sub-path and returns the
    /// decoded response body. An order with a matching `orderKey` is
    /// updated instead, per the API contract.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures and non-2xx
    /// responses, unmodified.
    pub async fn create(&self, order: Value) -> Result<Value, HttpError> {
        let response = self.client.post("createorder", order).await?;
        Ok(response.body)
    }

    /// Looks up the internal `orderId` for the given order number.
    ///
    /// Issues a listing request filtered by `orderNumber` and returns the
    /// first match's id. Returns `None` when the listing is empty or the
    /// id field is absent or zero.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures and non-2xx
    /// responses, unmodified.
    pub async fn order_id_by_number(
        &self,
        order_number: &str,
    ) -> Result<Option<i64>, HttpError> {
        let mut query = HashMap::new();
        query.insert("orderNumber".to_string(), order_number.to_string());

        let response = self.client.get("", Some(query)).await?;
        let order_id = response
            .body
            .get("orders")
            .and_then(|orders| orders.get(0))
            .and_then(|order| order.get("orderId"))
            .and_then(Value::as_i64)
            .filter(|id| *id != 0);

        Ok(order_id)
    }

    /// Returns `true` if an order with the given order number exists.
    ///
    /// A 404 response is treated as "does not exist" and downgraded to
    /// `Ok(false)`. Connectivity errors and all other HTTP failures
    /// propagate unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures and non-404
    /// HTTP errors.
    pub async fn exists_by_order_number(&self, order_number: &str) -> Result<bool, HttpError> {
        match self.order_id_by_number(order_number).await {
            Ok(order_id) => Ok(order_id.is_some()),
            Err(HttpError::Response(e)) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Returns how many orders are awaiting shipment.
    ///
    /// Issues a listing request filtered by
    /// `orderStatus=awaiting_shipment` and returns the response's `total`
    /// field, or `None` when the field is absent.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures and non-2xx
    /// responses, unmodified.
    pub async fn awaiting_shipment_count(&self) -> Result<Option<u64>, HttpError> {
        let mut query = HashMap::new();
        query.insert("orderStatus".to_string(), "awaiting_shipment".to_string());

        let response = self.client.get("", Some(query)).await?;
        Ok(response.body.get("total").and_then(Value::as_u64))
    }
}
