//! SPARQL query construction and result parsing.

use std::collections::HashMap;

use serde::Deserialize;

/// Build the equivalence-lookup query for a resource: any `owl:sameAs`
/// object whose URI falls under the secondary-store namespace.
pub(crate) fn sameas_query(resource_uri: &str, secondary_namespace: &str) -> String {
    format!(
        "PREFIX owl: <http://www.w3.org/2002/07/owl#>\n\
         SELECT ?wd WHERE {{\n\
         \x20   <{resource_uri}> owl:sameAs ?wd .\n\
         \x20   FILTER(STRSTARTS(STR(?wd), \"{secondary_namespace}\"))\n\
         }}\n\
         LIMIT 1"
    )
}

/// SPARQL JSON results, reduced to what the lookup needs.
#[derive(Debug, Deserialize)]
pub(crate) struct SelectResponse {
    pub results: SelectResults,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SelectResults {
    #[serde(default)]
    pub bindings: Vec<HashMap<String, BoundValue>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BoundValue {
    pub value: String,
}

/// The first binding of a variable, if any.
pub(crate) fn first_binding(response: SelectResponse, variable: &str) -> Option<String> {
    response
        .results
        .bindings
        .into_iter()
        .next()
        .and_then(|mut binding| binding.remove(variable))
        .map(|bound| bound.value)
}
