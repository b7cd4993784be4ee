//! End-to-end tests for `SearchService` over an in-memory SPARQL endpoint.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use prasasti_core::{
    Binding, MatchField, SearchField, SearchService, SparqlEndpoint, StoreError,
};

/// Scripted endpoint: pops one canned response per `select` call and records
/// every query it was asked to run.
struct FakeStore {
    responses: Mutex<VecDeque<Result<Vec<Binding>, StoreError>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FakeStore {
    fn new(responses: Vec<Result<Vec<Binding>, StoreError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle onto the query log, usable after the store is boxed.
    fn query_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.queries)
    }
}

#[async_trait]
impl SparqlEndpoint for FakeStore {
    async fn select(&self, query: &str) -> Result<Vec<Binding>, StoreError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

fn line_binding(uri: &str, translit: &str, translation: &str, script: Option<&str>) -> Binding {
    let mut binding = Binding::new();
    binding.insert("line".to_string(), uri.to_string());
    binding.insert("transliteration".to_string(), translit.to_string());
    binding.insert("translation".to_string(), translation.to_string());
    if let Some(s) = script {
        binding.insert("script".to_string(), s.to_string());
    }
    binding
}

fn count_binding(var: &str, value: &str) -> Binding {
    let mut binding = Binding::new();
    binding.insert(var.to_string(), value.to_string());
    binding
}

fn endpoint_error() -> StoreError {
    StoreError::Endpoint {
        status: 500,
        body: "Internal Server Error".to_string(),
    }
}

// Scenario: case-insensitive hit on the transliteration field.
#[tokio::test]
async fn test_search_all_classifies_case_insensitive_hit() {
    let store = FakeStore::new(vec![Ok(vec![line_binding(
        "http://contoh.org/KawaliI/line3",
        "di Kawali pun",
        "di Kawali ini",
        None,
    )])]);
    let service = SearchService::new(Box::new(store));

    let results = service.search("kawali", SearchField::All).await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].match_field, MatchField::Transliteration);
    assert_eq!(results[0].manuscript_id, "KawaliI");
    assert_eq!(results[0].line_id, "line3");
}

#[tokio::test]
async fn test_field_scoped_search_tags_every_record() {
    let rows = vec![
        line_binding("http://contoh.org/KW1/l1", "a", "b", None),
        line_binding("http://contoh.org/KW1/l2", "c", "d", Some("ᮊ")),
    ];
    let store = FakeStore::new(vec![Ok(rows)]);
    let service = SearchService::new(Box::new(store));

    let results = service.search("x", SearchField::Translation).await;

    assert_eq!(results.len(), 2);
    assert!(results
        .iter()
        .all(|r| r.match_field == MatchField::Translation));
}

// Scenario: empty terms never reach the network.
#[tokio::test]
async fn test_empty_term_short_circuits_without_a_query() {
    let store = FakeStore::new(vec![]);
    let query_log = store.query_log();
    let service = SearchService::new(Box::new(store));

    assert!(service.search("", SearchField::All).await.is_empty());
    assert!(service.search("   \t ", SearchField::All).await.is_empty());

    assert!(query_log.lock().unwrap().is_empty());
}

// Scenario: HTTP 500 degrades to empty results and a failed connection test.
#[tokio::test]
async fn test_endpoint_error_degrades_to_empty() {
    let store = FakeStore::new(vec![Err(endpoint_error()), Err(endpoint_error())]);
    let service = SearchService::new(Box::new(store));

    assert!(service.search("kawali", SearchField::All).await.is_empty());
    assert!(!service.test_connection().await);
}

#[tokio::test]
async fn test_connection_test_requires_a_row() {
    let up = SearchService::new(Box::new(FakeStore::new(vec![Ok(vec![count_binding(
        "total", "12",
    )])])));
    assert!(up.test_connection().await);

    // Reachable but empty-shaped dataset still reads as not connected.
    let empty = SearchService::new(Box::new(FakeStore::new(vec![Ok(Vec::new())])));
    assert!(!empty.test_connection().await);
}

// Round-trip: N stored lines load as exactly N records tagged Other.
#[tokio::test]
async fn test_load_all_round_trip() {
    let rows = vec![
        line_binding("http://contoh.org/KW1/l1", "sang hyang", "yang mulia", Some("ᮞᮀ")),
        line_binding("http://contoh.org/KW1/l2", "di kawali", "di kawali", None),
        line_binding("http://contoh.org/KW2/l1", "raja", "raja", None),
    ];
    let service = SearchService::new(Box::new(FakeStore::new(vec![Ok(rows)])));

    let records = service.load_all().await;

    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.match_field == MatchField::Other));
    assert_eq!(records[2].manuscript_id, "KW2");
}

#[tokio::test]
async fn test_load_all_degrades_to_empty() {
    let service = SearchService::new(Box::new(FakeStore::new(vec![Err(
        StoreError::Connection("connection refused".to_string()),
    )])));
    assert!(service.load_all().await.is_empty());
}
