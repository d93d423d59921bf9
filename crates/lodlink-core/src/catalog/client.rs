//! DBpedia catalog client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::document::{scan_sameas, ResourceDocument};
use super::encode::encode_resource_name;
use super::sparql::{first_binding, sameas_query, SelectResponse};
use super::{Catalog, CatalogError};
use crate::config::CatalogConfig;

/// Client for the primary catalog (DBpedia) and its SPARQL endpoint.
pub struct DbpediaClient {
    base_url: String,
    sparql_endpoint: String,
    secondary_namespace: String,
    probe_timeout: Duration,
    query_timeout: Duration,
    document_timeout: Duration,
    client: Client,
}

impl DbpediaClient {
    /// Creates a client for the given catalog base URL with default
    /// endpoints and timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        let defaults = CatalogConfig::default();
        let mut client = Self::from_config(&defaults);
        client.base_url = trim_url(base_url.into());
        client
    }

    /// Creates a client from catalog configuration.
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            base_url: trim_url(config.base_url.clone()),
            sparql_endpoint: config.sparql_endpoint.clone(),
            secondary_namespace: config.secondary_namespace.clone(),
            probe_timeout: Duration::from_secs(config.probe_timeout_secs),
            query_timeout: Duration::from_secs(config.query_timeout_secs),
            document_timeout: Duration::from_secs(config.document_timeout_secs),
            client: Client::new(),
        }
    }

    /// Sets the SPARQL endpoint.
    pub fn with_sparql_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.sparql_endpoint = endpoint.into();
        self
    }

    /// Sets the secondary-store namespace prefix.
    pub fn with_secondary_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.secondary_namespace = namespace.into();
        self
    }

    /// Sets the existence-probe timeout.
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// The canonical resource URI for a (not yet encoded) resource name.
    pub fn resource_uri(&self, name: &str) -> String {
        format!("{}/resource/{}", self.base_url, encode_resource_name(name))
    }

    /// Strategy 1: ask the SPARQL endpoint for an equivalent secondary-store
    /// URI of the resource.
    pub async fn secondary_via_query(&self, name: &str) -> Result<Option<String>, CatalogError> {
        let query = sameas_query(&self.resource_uri(name), &self.secondary_namespace);
        let response = self
            .client
            .get(&self.sparql_endpoint)
            .query(&[("query", query.as_str()), ("format", "json")])
            .header(reqwest::header::ACCEPT, "application/sparql-results+json")
            .timeout(self.query_timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let parsed: SelectResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        Ok(first_binding(parsed, "wd"))
    }

    /// Strategy 2: fetch the resource's data document and scan its
    /// `owl:sameAs` objects for one under the secondary-store namespace.
    pub async fn secondary_via_document(&self, name: &str) -> Result<Option<String>, CatalogError> {
        let url = format!("{}/data/{}.json", self.base_url, encode_resource_name(name));
        let response = self
            .client
            .get(&url)
            .timeout(self.document_timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let document: ResourceDocument = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        Ok(scan_sameas(
            &document,
            &self.resource_uri(name),
            &self.secondary_namespace,
        ))
    }
}

#[async_trait]
impl Catalog for DbpediaClient {
    async fn probe_uri(&self, uri: &str) -> Result<bool, CatalogError> {
        let response = self
            .client
            .head(uri)
            .timeout(self.probe_timeout)
            .send()
            .await?;
        Ok(response.status() == reqwest::StatusCode::OK)
    }

    async fn probe_resource(&self, name: &str) -> Result<Option<String>, CatalogError> {
        let uri = self.resource_uri(name);
        if self.probe_uri(&uri).await? {
            Ok(Some(uri))
        } else {
            Ok(None)
        }
    }

    async fn cross_reference(&self, name: &str) -> Result<Option<String>, CatalogError> {
        // The query endpoint is faster and authoritative when reachable;
        // the per-resource document is the fallback.
        match self.secondary_via_query(name).await {
            Ok(Some(uri)) => return Ok(Some(uri)),
            Ok(None) => {}
            Err(err) => {
                tracing::debug!(resource = name, error = %err, "query lookup failed, trying data document");
            }
        }
        self.secondary_via_document(name).await
    }
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
