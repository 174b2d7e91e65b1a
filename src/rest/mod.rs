//! Resource-oriented access to the ShipStation API.
//!
//! This module provides the resource layer on top of [`crate::clients`]:
//!
//! - **[`Resource`]**: the fixed set of eleven API resource families, each
//!   mapping to a literal `/name/` URL path segment
//! - **[`ShipStationClient`]**: the top-level client owning the transport
//! - **[`ResourceClient`]**: an immutable client scoped to one resource,
//!   exposing the generic verbs
//! - **[`Orders`]**: per-resource convenience shorthand for orders
//!
//! # Resource Selection
//!
//! Selection is explicit and pure. `client.resource(Resource::Shipments)`
//! returns a new scoped value; it does not mutate the client, so scopes for
//! different resources can be held simultaneously:
//!
//! ```rust,ignore
//! let orders = client.resource(Resource::Orders);
//! let shipments = client.resource(Resource::Shipments);
//!
//! let open = orders.get("", None).await?;
//! let recent = shipments.get("", None).await?;
//! ```

mod client;
mod orders;
mod resource;

pub use client::{ResourceClient, ShipStationClient};
pub use orders::Orders;
pub use resource::{Resource, UnknownResourceError};
