//! Resource data-document parsing.
//!
//! The catalog serves a machine-readable description of each resource at a
//! predictable URL (`/data/<name>.json`). The JSON serialization maps each
//! subject URI to its predicates, each predicate to a list of values. Only
//! the `owl:sameAs` values of the requested resource are of interest.

use std::collections::HashMap;

use serde::Deserialize;

use crate::graph::ns;

/// The catalog's JSON graph serialization: subject -> predicate -> values.
pub(crate) type ResourceDocument = HashMap<String, HashMap<String, Vec<DocumentValue>>>;

#[derive(Debug, Deserialize)]
pub(crate) struct DocumentValue {
    #[serde(default)]
    pub value: String,
}

/// First `owl:sameAs` object of `subject` under the given namespace.
pub(crate) fn scan_sameas(
    document: &ResourceDocument,
    subject: &str,
    secondary_namespace: &str,
) -> Option<String> {
    document
        .get(subject)?
        .get(ns::OWL_SAME_AS)?
        .iter()
        .find(|v| v.value.starts_with(secondary_namespace))
        .map(|v| v.value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "http://dbpedia.org/resource/Marie_Curie": {
            "http://www.w3.org/2002/07/owl#sameAs": [
                {"type": "uri", "value": "http://fr.dbpedia.org/resource/Marie_Curie"},
                {"type": "uri", "value": "http://www.wikidata.org/entity/Q7186"}
            ],
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [
                {"type": "uri", "value": "http://xmlns.com/foaf/0.1/Person"}
            ]
        },
        "http://dbpedia.org/resource/Pierre_Curie": {
            "http://www.w3.org/2002/07/owl#sameAs": [
                {"type": "uri", "value": "http://www.wikidata.org/entity/Q37463"}
            ]
        }
    }"#;

    #[test]
    fn test_scan_picks_namespaced_object_of_subject() {
        let document: ResourceDocument = serde_json::from_str(SAMPLE).unwrap();
        let found = scan_sameas(
            &document,
            "http://dbpedia.org/resource/Marie_Curie",
            "http://www.wikidata.org/entity/",
        );
        assert_eq!(found.as_deref(), Some("http://www.wikidata.org/entity/Q7186"));
    }

    #[test]
    fn test_scan_ignores_other_subjects() {
        let document: ResourceDocument = serde_json::from_str(SAMPLE).unwrap();
        let found = scan_sameas(
            &document,
            "http://dbpedia.org/resource/Irene_Joliot-Curie",
            "http://www.wikidata.org/entity/",
        );
        assert_eq!(found, None);
    }
}
