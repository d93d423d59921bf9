use httpmock::MockServer;
use lodlink_core::catalog::{Catalog, CatalogError};
use lodlink_core::DbpediaClient;

const WIKIDATA_NS: &str = "http://www.wikidata.org/entity/";

fn client_for(server: &MockServer) -> DbpediaClient {
    DbpediaClient::new(server.base_url())
        .with_sparql_endpoint(format!("{}/sparql", server.base_url()))
}

fn sparql_body(uri: &str) -> String {
    format!(
        r#"{{"head":{{"vars":["wd"]}},"results":{{"bindings":[{{"wd":{{"type":"uri","value":"{uri}"}}}}]}}}}"#
    )
}

const EMPTY_SPARQL: &str = r#"{"head":{"vars":["wd"]},"results":{"bindings":[]}}"#;

fn document_body(server: &MockServer, name: &str, sameas: &[&str]) -> String {
    let objects: Vec<String> = sameas
        .iter()
        .map(|uri| format!(r#"{{"type":"uri","value":"{uri}"}}"#))
        .collect();
    format!(
        r#"{{"{}/resource/{}":{{"http://www.w3.org/2002/07/owl#sameAs":[{}]}}}}"#,
        server.base_url(),
        name,
        objects.join(",")
    )
}

#[tokio::test]
async fn test_probe_resource_found() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("HEAD").path("/resource/Marie_Curie");
        then.status(200);
    });

    let client = client_for(&server);
    let found = client.probe_resource("Marie_Curie").await.unwrap();

    mock.assert();
    assert_eq!(
        found,
        Some(format!("{}/resource/Marie_Curie", server.base_url()))
    );
}

#[tokio::test]
async fn test_probe_resource_missing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("HEAD").path("/resource/No_Such_Page");
        then.status(404);
    });

    let client = client_for(&server);
    let found = client.probe_resource("No_Such_Page").await.unwrap();
    assert_eq!(found, None);
}

#[tokio::test]
async fn test_probe_percent_encodes_name() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("HEAD").path("/resource/D%27Artagnan");
        then.status(200);
    });

    let client = client_for(&server);
    let found = client.probe_resource("D'Artagnan").await.unwrap();

    mock.assert();
    assert!(found.is_some());
}

#[tokio::test]
async fn test_probe_transport_failure_is_typed() {
    // Nothing listens on port 9; the connection is refused.
    let client = DbpediaClient::new("http://127.0.0.1:9");
    let err = client.probe_resource("Marie_Curie").await.unwrap_err();
    assert!(matches!(err, CatalogError::Transport(_)));
}

#[tokio::test]
async fn test_cross_reference_query_strategy_wins() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/sparql").query_param("format", "json");
        then.status(200)
            .header("content-type", "application/sparql-results+json")
            .body(sparql_body("http://www.wikidata.org/entity/Q7186"));
    });
    let document = server.mock(|when, then| {
        when.method("GET").path("/data/Marie_Curie.json");
        then.status(200)
            .body(document_body(&server, "Marie_Curie", &[
                "http://www.wikidata.org/entity/Q999",
            ]));
    });

    let client = client_for(&server);
    let found = client.cross_reference("Marie_Curie").await.unwrap();

    // First strategy succeeded; the fallback must not run.
    assert_eq!(found.as_deref(), Some("http://www.wikidata.org/entity/Q7186"));
    document.assert_hits(0);
}

#[tokio::test]
async fn test_cross_reference_falls_back_on_empty_query() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/sparql");
        then.status(200)
            .header("content-type", "application/sparql-results+json")
            .body(EMPTY_SPARQL);
    });
    let document = server.mock(|when, then| {
        when.method("GET").path("/data/Marie_Curie.json");
        then.status(200)
            .body(document_body(&server, "Marie_Curie", &[
                "http://fr.dbpedia.org/resource/Marie_Curie",
                "http://www.wikidata.org/entity/Q7186",
            ]));
    });

    let client = client_for(&server);
    let found = client.cross_reference("Marie_Curie").await.unwrap();

    document.assert();
    assert_eq!(found.as_deref(), Some("http://www.wikidata.org/entity/Q7186"));
}

#[tokio::test]
async fn test_cross_reference_falls_back_on_degraded_endpoint() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/sparql");
        then.status(503);
    });
    server.mock(|when, then| {
        when.method("GET").path("/data/Marie_Curie.json");
        then.status(200)
            .body(document_body(&server, "Marie_Curie", &[
                "http://www.wikidata.org/entity/Q7186",
            ]));
    });

    let client = client_for(&server);
    let found = client.cross_reference("Marie_Curie").await.unwrap();
    assert_eq!(found.as_deref(), Some("http://www.wikidata.org/entity/Q7186"));
}

#[tokio::test]
async fn test_cross_reference_falls_back_on_malformed_results() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/sparql");
        then.status(200).body("<html>maintenance page</html>");
    });
    server.mock(|when, then| {
        when.method("GET").path("/data/Marie_Curie.json");
        then.status(200)
            .body(document_body(&server, "Marie_Curie", &[
                "http://www.wikidata.org/entity/Q7186",
            ]));
    });

    let client = client_for(&server);
    let found = client.cross_reference("Marie_Curie").await.unwrap();
    assert_eq!(found.as_deref(), Some("http://www.wikidata.org/entity/Q7186"));
}

#[tokio::test]
async fn test_cross_reference_none_when_both_strategies_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/sparql");
        then.status(200)
            .header("content-type", "application/sparql-results+json")
            .body(EMPTY_SPARQL);
    });
    server.mock(|when, then| {
        when.method("GET").path("/data/Obscure_Topic.json");
        then.status(404);
    });

    let client = client_for(&server);
    let found = client.cross_reference("Obscure_Topic").await.unwrap();
    assert_eq!(found, None);
}

#[tokio::test]
async fn test_document_ignores_other_namespaces() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/sparql");
        then.status(200)
            .header("content-type", "application/sparql-results+json")
            .body(EMPTY_SPARQL);
    });
    server.mock(|when, then| {
        when.method("GET").path("/data/Marie_Curie.json");
        then.status(200)
            .body(document_body(&server, "Marie_Curie", &[
                "http://fr.dbpedia.org/resource/Marie_Curie",
                "http://de.dbpedia.org/resource/Marie_Curie",
            ]));
    });

    let client = client_for(&server);
    let found = client.cross_reference("Marie_Curie").await.unwrap();
    assert_eq!(found, None);
}

#[tokio::test]
async fn test_sparql_query_carries_resource_and_filter() {
    let server = MockServer::start();
    let sparql = server.mock(|when, then| {
        when.method("GET")
            .path("/sparql")
            .query_param_exists("query");
        then.status(200)
            .header("content-type", "application/sparql-results+json")
            .body(sparql_body("http://www.wikidata.org/entity/Q7186"));
    });

    let client = client_for(&server);
    let found = client.secondary_via_query("Marie_Curie").await.unwrap();

    sparql.assert();
    assert_eq!(found.as_deref(), Some("http://www.wikidata.org/entity/Q7186"));
    assert!(found.unwrap().starts_with(WIKIDATA_NS));
}
