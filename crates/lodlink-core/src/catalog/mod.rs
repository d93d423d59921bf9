//! Clients for the external catalogs.

mod client;
mod document;
mod encode;
mod error;
mod sparql;

pub use client::DbpediaClient;
pub use encode::{decode_resource_name, encode_resource_name};
pub use error::CatalogError;

use async_trait::async_trait;

/// Catalog operations the resolution engine depends on.
///
/// This abstraction decouples the orchestrator from the concrete HTTP
/// client, so tests can script catalog behavior.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Metadata-only existence check of an already-formed URI.
    /// True means the catalog reported the resource exists.
    async fn probe_uri(&self, uri: &str) -> Result<bool, CatalogError>;

    /// Existence check of a candidate resource name. Returns the canonical
    /// resource URI when the resource exists, `None` when the catalog
    /// reports any non-success status.
    async fn probe_resource(&self, name: &str) -> Result<Option<String>, CatalogError>;

    /// Recover the secondary-store URI equivalent to a resource already
    /// confirmed to exist. Strategies are attempted in fixed order; the
    /// first success wins.
    async fn cross_reference(&self, name: &str) -> Result<Option<String>, CatalogError>;
}
