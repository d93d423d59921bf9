//! Applies a resolution result to the graph.

use crate::graph::{ns, Graph, Term};

use super::ResolutionResult;

/// Merge a result's equivalence edges for `subject` into the graph.
///
/// Primary-store edges are replaced: every existing `owl:sameAs` edge
/// whose object falls under the primary namespace is removed before the
/// new one is added. Secondary-store edges are only ever appended, so an
/// edge discovered by an earlier run survives a later run that fails to
/// rediscover it. `Unresolved` leaves the graph untouched.
pub fn apply(
    graph: &mut Graph,
    subject: &str,
    result: &ResolutionResult,
    primary_namespace: &str,
) {
    let ResolutionResult::Resolved {
        primary_uri,
        secondary_uri,
        ..
    } = result
    else {
        return;
    };

    graph.remove_matching(subject, ns::OWL_SAME_AS, |object| {
        matches!(object, Term::Iri(iri) if iri.starts_with(primary_namespace))
    });
    graph.add_iri(subject, ns::OWL_SAME_AS, primary_uri.clone());

    if let Some(secondary) = secondary_uri {
        graph.add_iri(subject, ns::OWL_SAME_AS, secondary.clone());
    }
}
