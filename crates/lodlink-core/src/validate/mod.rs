//! Stateless existence sweep over a finished graph.
//!
//! Independent of the resolution engine: collects every primary-catalog
//! URI present in a graph and re-checks that each still resolves. Useful
//! after an enrichment run, or on hand-edited files. The graph is never
//! mutated.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::graph::{Graph, Term};

/// Result of a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// How many distinct URIs were checked.
    pub checked: usize,
    /// URIs that no longer resolve, in sorted order. A transport failure
    /// counts as invalid: the sweep exists to flag URIs needing review.
    pub invalid: Vec<String>,
}

impl SweepReport {
    pub fn all_valid(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Every distinct IRI under `namespace` occurring as subject or object,
/// sorted.
pub fn collect_namespace_uris(graph: &Graph, namespace: &str) -> Vec<String> {
    let mut uris = BTreeSet::new();
    for triple in graph.iter() {
        if triple.subject.starts_with(namespace) {
            uris.insert(triple.subject.clone());
        }
        if let Term::Iri(iri) = &triple.object {
            if iri.starts_with(namespace) {
                uris.insert(iri.clone());
            }
        }
    }
    uris.into_iter().collect()
}

/// Probe each URI once and report the ones that fail.
pub async fn sweep<C: Catalog>(catalog: &C, uris: &[String]) -> SweepReport {
    let mut invalid = Vec::new();
    for uri in uris {
        match catalog.probe_uri(uri).await {
            Ok(true) => {}
            Ok(false) => invalid.push(uri.clone()),
            Err(err) => {
                tracing::warn!(uri = %uri, error = %err, "existence check failed");
                invalid.push(uri.clone());
            }
        }
    }
    SweepReport {
        checked: uris.len(),
        invalid,
    }
}
