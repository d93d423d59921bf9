//! Entity resolution orchestration.
//!
//! Drives the end-to-end resolution of each entity: candidate surface
//! forms from the variant generator, existence probes against the primary
//! catalog, cross-reference lookup of the secondary-store URI, and the
//! merge of the resulting equivalence edges. Strictly sequential; the
//! politeness gates keep the outbound request rate predictable.

pub mod entity;
pub mod merge;
mod pacer;

pub use entity::{Organization, Person, Place};
pub use pacer::Pacer;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::graph::{ns, Graph, Term};
use crate::variants::VariantGenerator;

/// The outcome of resolving one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    /// No candidate surface form exists in the primary catalog.
    Unresolved,
    /// A candidate matched; the secondary URI is present only when the
    /// cross-reference lookup found one.
    Resolved {
        primary_uri: String,
        matched_candidate: String,
        secondary_uri: Option<String>,
    },
}

/// What happened to an entity during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Already linked to the primary store; no network traffic.
    Skipped,
    Resolved,
    Unresolved,
}

/// Counters for a resolution run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub resolved: usize,
    pub unresolved: usize,
    pub skipped: usize,
}

impl RunStats {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Skipped => self.skipped += 1,
            Outcome::Resolved => self.resolved += 1,
            Outcome::Unresolved => self.unresolved += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.resolved + self.unresolved + self.skipped
    }
}

/// Sequences the resolution of every entity in a graph.
pub struct Resolver<C: Catalog> {
    catalog: C,
    variants: VariantGenerator,
    primary_namespace: String,
    entity_gate: Pacer,
    lookup_gate: Pacer,
}

impl<C: Catalog> Resolver<C> {
    /// Creates a resolver over the given catalog client.
    pub fn new(catalog: C, config: &Config) -> Self {
        Self {
            variants: VariantGenerator::new(&config.variants),
            primary_namespace: config.catalog.primary_namespace(),
            entity_gate: Pacer::from_millis(config.politeness.entity_delay_ms),
            lookup_gate: Pacer::from_millis(config.politeness.lookup_delay_ms),
            catalog,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Resolve every person, organization and place in the graph, in that
    /// order, and merge the discovered equivalence edges.
    pub async fn resolve_graph(&self, graph: &mut Graph) -> RunStats {
        let mut stats = RunStats::default();
        for person in entity::persons(graph) {
            stats.record(self.resolve_person(graph, &person).await);
        }
        for organization in entity::organizations(graph) {
            stats.record(self.resolve_organization(graph, &organization).await);
        }
        for place in entity::places(graph) {
            stats.record(self.resolve_place(graph, &place).await);
        }
        stats
    }

    /// Resolve one person.
    pub async fn resolve_person(&self, graph: &mut Graph, person: &Person) -> Outcome {
        if self.already_linked(graph, &person.uri) {
            return Outcome::Skipped;
        }
        let candidates = self
            .variants
            .person(&person.given_name, &person.family_name);
        let result = self.resolve_candidates(&candidates).await;
        self.finish(graph, &person.uri, result).await
    }

    /// Resolve one organization, trying its name variants in order.
    pub async fn resolve_organization(
        &self,
        graph: &mut Graph,
        organization: &Organization,
    ) -> Outcome {
        if self.already_linked(graph, &organization.uri) {
            return Outcome::Skipped;
        }
        let candidates = self
            .variants
            .organization(&organization.name, organization.location.as_deref());
        let result = self.resolve_candidates(&candidates).await;
        self.finish(graph, &organization.uri, result).await
    }

    /// Resolve one place through its already-linked city or country.
    pub async fn resolve_place(&self, graph: &mut Graph, place: &Place) -> Outcome {
        if self.already_linked(graph, &place.uri) {
            return Outcome::Skipped;
        }
        let result = match entity::resource_name(&place.target) {
            Some(name) => self.resolve_candidates(std::slice::from_ref(&name)).await,
            None => ResolutionResult::Unresolved,
        };
        self.finish(graph, &place.uri, result).await
    }

    /// Probe candidates in order and cross-reference the first match.
    ///
    /// A probe failure is logged and treated as "try the next candidate";
    /// a cross-reference failure degrades to a missing secondary URI. The
    /// engine cannot distinguish "does not exist" from a broken network,
    /// and resolution coverage, not completeness, is at stake.
    async fn resolve_candidates(&self, candidates: &[String]) -> ResolutionResult {
        let mut matched = None;
        for candidate in candidates {
            match self.catalog.probe_resource(candidate).await {
                Ok(Some(uri)) => {
                    matched = Some((uri, candidate.clone()));
                    break;
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(candidate = %candidate, error = %err, "existence probe failed");
                }
            }
        }

        let Some((primary_uri, matched_candidate)) = matched else {
            return ResolutionResult::Unresolved;
        };

        let secondary_uri = match self.catalog.cross_reference(&matched_candidate).await {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(candidate = %matched_candidate, error = %err, "cross-reference lookup failed");
                None
            }
        };
        self.lookup_gate.pause().await;

        ResolutionResult::Resolved {
            primary_uri,
            matched_candidate,
            secondary_uri,
        }
    }

    async fn finish(
        &self,
        graph: &mut Graph,
        subject: &str,
        result: ResolutionResult,
    ) -> Outcome {
        let outcome = match &result {
            ResolutionResult::Resolved {
                primary_uri,
                secondary_uri,
                ..
            } => {
                tracing::info!(
                    subject = %subject,
                    primary = %primary_uri,
                    secondary = secondary_uri.as_deref().unwrap_or("-"),
                    "linked entity"
                );
                Outcome::Resolved
            }
            ResolutionResult::Unresolved => Outcome::Unresolved,
        };
        merge::apply(graph, subject, &result, &self.primary_namespace);
        self.entity_gate.pause().await;
        outcome
    }

    fn already_linked(&self, graph: &Graph, subject: &str) -> bool {
        graph.objects(subject, ns::OWL_SAME_AS).any(|object| {
            matches!(object, Term::Iri(iri) if iri.starts_with(&self.primary_namespace))
        })
    }
}
