//! lodlink-core links locally-minted RDF entities (persons, organizations
//! and places) to their canonical DBpedia resources and, through them, to
//! Wikidata items, by merging `owl:sameAs` equivalence edges into the graph.

pub mod catalog;
pub mod config;
pub mod graph;
pub mod resolver;
pub mod validate;
pub mod variants;

pub use catalog::{Catalog, CatalogError, DbpediaClient};
pub use config::Config;
pub use graph::{Graph, Term, Triple};
pub use resolver::{Outcome, ResolutionResult, Resolver, RunStats};
pub use variants::VariantGenerator;
