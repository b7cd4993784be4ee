//! Triple-store access: the [`SparqlEndpoint`] seam, SPARQL 1.1 results
//! envelope parsing, and the reqwest-backed [`FusekiClient`].

mod error;
mod fuseki;

pub use error::StoreError;
pub use fuseki::FusekiClient;

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

/// One result row: query variable name to its matched value. Unbound
/// (optional) variables are simply absent.
pub type Binding = HashMap<String, String>;

/// A SPARQL SELECT endpoint.
///
/// The one production implementation is [`FusekiClient`]; tests substitute
/// in-memory fakes, and any SPARQL 1.1 store can be dropped in behind it.
#[async_trait]
pub trait SparqlEndpoint: Send + Sync {
    /// Execute a SELECT query and return its flattened result rows.
    async fn select(&self, query: &str) -> Result<Vec<Binding>, StoreError>;
}

/// Flattens a SPARQL 1.1 results JSON document
/// (`{"results": {"bindings": [{"var": {"value": "..."}}]}}`)
/// into plain variable→value rows.
///
/// Extra envelope keys (`head`, per-value `type`/`datatype`/`xml:lang`) are
/// ignored; a value object without a `value` key flattens to the empty
/// string.
pub fn parse_results_json(body: &str) -> Result<Vec<Binding>, StoreError> {
    let envelope: ResultsEnvelope =
        serde_json::from_str(body).map_err(|e| StoreError::MalformedResponse(e.to_string()))?;

    Ok(envelope
        .results
        .bindings
        .into_iter()
        .map(|row| row.into_iter().map(|(var, v)| (var, v.value)).collect())
        .collect())
}

#[derive(Debug, Deserialize)]
struct ResultsEnvelope {
    results: ResultsBlock,
}

#[derive(Debug, Deserialize)]
struct ResultsBlock {
    bindings: Vec<HashMap<String, BoundValue>>,
}

#[derive(Debug, Deserialize)]
struct BoundValue {
    #[serde(default)]
    value: String,
}
