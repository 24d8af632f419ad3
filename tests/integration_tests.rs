use birthmap::{LeafletRenderer, LocalStorage, MapEngine, QuerySpec, SparqlFetcher};
use httpmock::prelude::*;
use tempfile::TempDir;

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

fn engine_for(server_url: String, output_path: &str) -> MapEngine<LeafletRenderer<LocalStorage>> {
    let storage = LocalStorage::new(output_path.to_string());
    let renderer = LeafletRenderer::new(storage, output_path.to_string(), TILE_URL.to_string());
    let fetcher = SparqlFetcher::new(server_url);
    MapEngine::new(QuerySpec::default(), fetcher, renderer)
}

fn read_map(output_path: &str) -> String {
    let full_path = std::path::Path::new(output_path).join("map.html");
    assert!(full_path.exists(), "map.html should exist");
    std::fs::read_to_string(full_path).unwrap()
}

#[tokio::test]
async fn test_end_to_end_fetch_parse_render() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let mock_body = serde_json::json!({
        "head": {"vars": ["person", "personLabel", "birthPlace", "birthPlaceLabel", "coord"]},
        "results": {"bindings": [
            {
                "person": {"type": "uri", "value": "http://www.wikidata.org/entity/Q937"},
                "personLabel": {"xml:lang": "en", "type": "literal", "value": "Albert Einstein"},
                "birthPlace": {"type": "uri", "value": "http://www.wikidata.org/entity/Q3012"},
                "birthPlaceLabel": {"xml:lang": "en", "type": "literal", "value": "Ulm"},
                "coord": {"type": "literal", "value": "Point(34.7818 32.0853)"}
            },
            {
                "person": {"type": "uri", "value": "http://www.wikidata.org/entity/Q1"},
                "personLabel": {"xml:lang": "en", "type": "literal", "value": "Broken Person"},
                "birthPlace": {"type": "uri", "value": "http://www.wikidata.org/entity/Q2"},
                "birthPlaceLabel": {"xml:lang": "en", "type": "literal", "value": "Nowhere"},
                "coord": {"type": "literal", "value": "Point(bad data)"}
            }
        ]}
    });

    let sparql_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/sparql")
            .query_param("format", "json")
            .query_param_exists("query");
        then.status(200)
            .header("Content-Type", "application/sparql-results+json")
            .json_body(mock_body);
    });

    let engine = engine_for(server.url("/sparql"), &output_path);
    let result = engine.run().await;

    assert!(result.is_ok());
    sparql_mock.assert();

    let output_file_path = result.unwrap();
    assert!(output_file_path.contains("map.html"));

    // The one valid binding survived; the malformed one was dropped.
    let snapshot = engine.store().current();
    assert_eq!(snapshot.records.len(), 1);
    assert_eq!(snapshot.records[0].person_name, "Albert Einstein");
    assert_eq!(snapshot.records[0].birth_place_name, "Ulm");
    assert_eq!(snapshot.records[0].latitude, 32.0853);
    assert_eq!(snapshot.records[0].longitude, 34.7818);

    let page = read_map(&output_path);
    assert!(page.contains("Albert Einstein"));
    assert!(page.contains("Ulm"));
    assert!(!page.contains("Broken Person"));
    assert!(page.contains(TILE_URL));

    // Footer carries the snapshot's fetch time.
    let expected_stamp = snapshot.fetched_at.format("%Y-%m-%d %H:%M:%S UTC").to_string();
    assert!(page.contains(&format!("Fetched {}", expected_stamp)));
}

#[tokio::test]
async fn test_query_text_reaches_endpoint_intact() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let expected_query = QuerySpec::default().to_sparql();

    let sparql_mock = server.mock(move |when, then| {
        when.method(GET)
            .path("/sparql")
            .query_param("query", expected_query.clone())
            .query_param("format", "json");
        then.status(200)
            .json_body(serde_json::json!({"results": {"bindings": []}}));
    });

    let engine = engine_for(server.url("/sparql"), &output_path);
    engine.run().await.unwrap();

    sparql_mock.assert();
}

#[tokio::test]
async fn test_end_to_end_with_server_error_still_renders() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let sparql_mock = server.mock(|when, then| {
        when.method(GET).path("/sparql");
        then.status(500);
    });

    let engine = engine_for(server.url("/sparql"), &output_path);
    let result = engine.run().await;

    // The fetch failure is recovered: no crash, store untouched, empty map.
    assert!(result.is_ok());
    sparql_mock.assert();
    assert!(engine.store().current().records.is_empty());

    let page = read_map(&output_path);
    assert!(page.contains("const markers = [];"));
}

#[tokio::test]
async fn test_end_to_end_with_malformed_body_still_renders() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let sparql_mock = server.mock(|when, then| {
        when.method(GET).path("/sparql");
        then.status(200)
            .json_body(serde_json::json!({"message": "no results key here"}));
    });

    let engine = engine_for(server.url("/sparql"), &output_path);
    let result = engine.run().await;

    assert!(result.is_ok());
    sparql_mock.assert();
    assert!(engine.store().current().records.is_empty());

    let page = read_map(&output_path);
    assert!(page.contains("const markers = [];"));
}

#[tokio::test]
async fn test_end_to_end_with_empty_bindings() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let sparql_mock = server.mock(|when, then| {
        when.method(GET).path("/sparql");
        then.status(200)
            .json_body(serde_json::json!({"results": {"bindings": []}}));
    });

    let engine = engine_for(server.url("/sparql"), &output_path);
    let result = engine.run().await;

    // An empty result set is a valid response, not an error.
    assert!(result.is_ok());
    sparql_mock.assert();
    assert!(engine.store().current().records.is_empty());

    let page = read_map(&output_path);
    assert!(page.contains("const markers = [];"));
}
