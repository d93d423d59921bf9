//! Vocabulary terms used by the resolution pipeline.

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const OWL_SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";

pub const FOAF_PERSON: &str = "http://xmlns.com/foaf/0.1/Person";
pub const FOAF_NAME: &str = "http://xmlns.com/foaf/0.1/name";
pub const FOAF_GIVEN_NAME: &str = "http://xmlns.com/foaf/0.1/givenName";
pub const FOAF_FAMILY_NAME: &str = "http://xmlns.com/foaf/0.1/familyName";

pub const SCHEMA_ORGANIZATION: &str = "http://schema.org/Organization";
pub const SCHEMA_PLACE: &str = "http://schema.org/Place";
pub const SCHEMA_NAME: &str = "http://schema.org/name";
pub const SCHEMA_LOCATION: &str = "http://schema.org/location";

pub const DBO_CITY: &str = "http://dbpedia.org/ontology/city";
pub const DBO_COUNTRY: &str = "http://dbpedia.org/ontology/country";
