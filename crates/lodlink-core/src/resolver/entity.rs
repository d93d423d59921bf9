//! Read-only entity views over the graph.
//!
//! An entity is eligible for resolution only if it carries at least one
//! usable name; subjects missing the required literals are silently
//! excluded here, upstream of the engine.

use crate::catalog::decode_resource_name;
use crate::graph::{ns, Graph};

/// A person with both name components present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub uri: String,
    pub given_name: String,
    pub family_name: String,
}

/// An organization with a name and an optional location hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub uri: String,
    pub name: String,
    pub location: Option<String>,
}

/// A place whose city or country already points at a catalog resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub uri: String,
    /// The city (preferred) or country IRI linked from the place node.
    pub target: String,
}

/// Persons typed `foaf:Person` carrying both given and family names.
pub fn persons(graph: &Graph) -> Vec<Person> {
    graph
        .subjects_of_type(ns::FOAF_PERSON)
        .into_iter()
        .filter_map(|subject| {
            let given = graph.value(subject, ns::FOAF_GIVEN_NAME)?;
            let family = graph.value(subject, ns::FOAF_FAMILY_NAME)?;
            Some(Person {
                uri: subject.to_string(),
                given_name: given.to_string(),
                family_name: family.to_string(),
            })
        })
        .collect()
}

/// Organizations typed `schema:Organization` carrying a name.
///
/// The location hint is the `schema:location` literal when present, or the
/// `rdfs:label` of the linked place node.
pub fn organizations(graph: &Graph) -> Vec<Organization> {
    graph
        .subjects_of_type(ns::SCHEMA_ORGANIZATION)
        .into_iter()
        .filter_map(|subject| {
            let name = graph
                .value(subject, ns::FOAF_NAME)
                .or_else(|| graph.value(subject, ns::SCHEMA_NAME))?;
            Some(Organization {
                uri: subject.to_string(),
                name: name.to_string(),
                location: location_hint(graph, subject),
            })
        })
        .collect()
}

/// Places typed `schema:Place` with a `dbo:city` or `dbo:country` link.
pub fn places(graph: &Graph) -> Vec<Place> {
    graph
        .subjects_of_type(ns::SCHEMA_PLACE)
        .into_iter()
        .filter_map(|subject| {
            let target = graph
                .iri_value(subject, ns::DBO_CITY)
                .or_else(|| graph.iri_value(subject, ns::DBO_COUNTRY))?;
            Some(Place {
                uri: subject.to_string(),
                target: target.to_string(),
            })
        })
        .collect()
}

fn location_hint(graph: &Graph, subject: &str) -> Option<String> {
    if let Some(literal) = graph.value(subject, ns::SCHEMA_LOCATION) {
        return Some(literal.to_string());
    }
    let place = graph.iri_value(subject, ns::SCHEMA_LOCATION)?;
    graph.value(place, ns::RDFS_LABEL).map(str::to_string)
}

/// The resource name encoded in an IRI's final path segment.
pub(crate) fn resource_name(iri: &str) -> Option<String> {
    let segment = iri.rsplit('/').next()?;
    if segment.is_empty() {
        return None;
    }
    Some(decode_resource_name(segment))
}
