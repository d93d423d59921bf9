//! Default values for lodlink configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

use std::collections::BTreeMap;

// ============================================================================
// Catalog Defaults
// ============================================================================

/// Default base URL of the primary catalog (DBpedia).
pub const DEFAULT_CATALOG_BASE_URL: &str = "http://dbpedia.org";

/// Default SPARQL endpoint of the primary catalog.
pub const DEFAULT_SPARQL_ENDPOINT: &str = "https://dbpedia.org/sparql";

/// Namespace prefix of secondary-store identifiers (Wikidata items).
pub const DEFAULT_SECONDARY_NAMESPACE: &str = "http://www.wikidata.org/entity/";

/// Timeout for existence probes (HEAD requests), in seconds.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Timeout for SPARQL queries, in seconds.
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 15;

/// Timeout for resource data-document fetches, in seconds.
pub const DEFAULT_DOCUMENT_TIMEOUT_SECS: u64 = 15;

// ============================================================================
// Politeness Defaults
// ============================================================================

/// Delay applied after each processed entity, in milliseconds.
pub const DEFAULT_ENTITY_DELAY_MS: u64 = 300;

/// Delay applied after each secondary-store lookup, in milliseconds.
pub const DEFAULT_LOOKUP_DELAY_MS: u64 = 800;

// ============================================================================
// Variant Defaults
// ============================================================================

/// Built-in institutional abbreviations and their catalog resource names.
///
/// Keys are organization names with all whitespace removed; values are the
/// canonical and alternate full names tried against the catalog.
pub fn default_abbreviations() -> BTreeMap<String, Vec<String>> {
    let mut map = BTreeMap::new();
    map.insert(
        "MIT".to_string(),
        vec![
            "MIT".to_string(),
            "Massachusetts_Institute_of_Technology".to_string(),
        ],
    );
    map.insert(
        "CalTech".to_string(),
        vec![
            "California_Institute_of_Technology".to_string(),
            "Caltech".to_string(),
        ],
    );
    map.insert(
        "UCLA".to_string(),
        vec![
            "UCLA".to_string(),
            "University_of_California,_Los_Angeles".to_string(),
        ],
    );
    map.insert(
        "NYU".to_string(),
        vec!["NYU".to_string(), "New_York_University".to_string()],
    );
    map
}
