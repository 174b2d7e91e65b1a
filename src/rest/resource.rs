//! The fixed set of ShipStation API resource families.
//!
//! Every top-level API category maps to a literal URL path segment of the
//! form `/name/`. Resource selection is an explicit, pure operation:
//! constructing a [`Resource`] never touches client state.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a string does not name a known resource.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown resource '{name}'. Expected one of the ShipStation resource names (e.g., 'orders', 'shipments').")]
pub struct UnknownResourceError {
    /// The unrecognized name that was provided.
    pub name: String,
}

/// A top-level ShipStation API resource family.
///
/// Each variant maps to a URL path segment; generic verbs on a scoped
/// client are dispatched against that segment.
///
/// # Example
///
/// ```rust
/// use shipstation_api::Resource;
///
/// assert_eq!(Resource::Orders.as_path(), "/orders/");
/// assert_eq!("shipments".parse::<Resource>().unwrap(), Resource::Shipments);
/// assert_eq!("/webhooks/".parse::<Resource>().unwrap(), Resource::Webhooks);
/// assert!("bogus".parse::<Resource>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Account configuration and API key management.
    Accounts,
    /// Carriers connected to the account.
    Carriers,
    /// Customer records.
    Customers,
    /// Fulfillments created outside of label generation.
    Fulfillments,
    /// Orders — the default working set of the API.
    Orders,
    /// Product catalog entries.
    Products,
    /// Shipments and shipping labels.
    Shipments,
    /// Connected stores.
    Stores,
    /// Users on the account.
    Users,
    /// Ship-from warehouse locations.
    Warehouses,
    /// Webhook subscriptions.
    Webhooks,
}

impl Resource {
    /// Every valid resource, in path order.
    pub const ALL: [Self; 11] = [
        Self::Accounts,
        Self::Carriers,
        Self::Customers,
        Self::Fulfillments,
        Self::Orders,
        Self::Products,
        Self::Shipments,
        Self::Stores,
        Self::Users,
        Self::Warehouses,
        Self::Webhooks,
    ];

    /// Returns the resource name (e.g., `"orders"`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Accounts => "accounts",
            Self::Carriers => "carriers",
            Self::Customers => "customers",
            Self::Fulfillments => "fulfillments",
            Self::Orders => "orders",
            Self::Products => "products",
            Self::Shipments => "shipments",
            Self::Stores => "stores",
            Self::Users => "users",
            Self::Warehouses => "warehouses",
            Self::Webhooks => "webhooks",
        }
    }

    /// Returns the URL path segment for this resource (e.g., `"/orders/"`).
    #[must_use]
    pub const fn as_path(&self) -> &'static str {
        match self {
            Self::Accounts => "/accounts/",
            Self::Carriers => "/carriers/",
            Self::Customers => "/customers/",
            Self::Fulfillments => "/fulfillments/",
            Self::Orders => "/orders/",
            Self::Products => "/products/",
            Self::Shipments => "/shipments/",
            Self::Stores => "/stores/",
            Self::Users => "/users/",
            Self::Warehouses => "/warehouses/",
            Self::Webhooks => "/webhooks/",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = UnknownResourceError;

    /// Parses a resource from its bare name (`"orders"`) or its
    /// slash-wrapped path segment (`"/orders/"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim_start_matches('/').trim_end_matches('/');
        Self::ALL
            .iter()
            .find(|resource| resource.name() == name)
            .copied()
            .ok_or_else(|| UnknownResourceError {
                name: s.to_string(),
            })
    }
}
