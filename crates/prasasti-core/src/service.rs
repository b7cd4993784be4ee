//! The composition root: [`SearchService`] wires query construction, store
//! access, enrichment, and statistics into the four operations the
//! presentation layer consumes.

use tracing::warn;

use crate::config::Config;
use crate::enrich::{self, LineRecord};
use crate::query::{self, SearchField};
use crate::stats::{self, StatsSummary};
use crate::store::{FusekiClient, SparqlEndpoint};

/// The public search engine API.
///
/// Constructed once at process start and shared read-only thereafter; it
/// holds no mutable state, so concurrent requests need no locking. Every
/// operation degrades to an empty/zeroed result on store failure - the
/// diagnostic goes out as a `tracing` warning, never as a panic or error
/// return.
pub struct SearchService {
    store: Box<dyn SparqlEndpoint>,
}

impl SearchService {
    /// Creates a service over any SPARQL endpoint implementation.
    pub fn new(store: Box<dyn SparqlEndpoint>) -> Self {
        Self { store }
    }

    /// Creates a service backed by a [`FusekiClient`] per the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Box::new(FusekiClient::from_config(&config.endpoint)))
    }

    /// Searches for lines whose `field` contains `term`.
    ///
    /// Empty or whitespace-only terms short-circuit to no results without a
    /// network call.
    pub async fn search(&self, term: &str, field: SearchField) -> Vec<LineRecord> {
        if term.trim().is_empty() {
            return Vec::new();
        }

        match self.store.select(&query::build_search(term, field)).await {
            Ok(bindings) => enrich::enrich_search(bindings, term, field),
            Err(error) => {
                warn!(%error, %field, "search query failed, returning no results");
                Vec::new()
            }
        }
    }

    /// Loads every line in the dataset, tagged [`enrich::MatchField::Other`]
    /// since no search term was applied.
    pub async fn load_all(&self) -> Vec<LineRecord> {
        match self.store.select(&query::build_load_all()).await {
            Ok(bindings) => enrich::enrich_load(bindings),
            Err(error) => {
                warn!(%error, "load-all query failed, returning no results");
                Vec::new()
            }
        }
    }

    /// Collects dataset statistics, zeroed when the store is unavailable.
    pub async fn stats(&self) -> StatsSummary {
        match stats::collect(self.store.as_ref()).await {
            Ok(summary) => summary,
            Err(error) => {
                warn!(%error, "statistics unavailable");
                StatsSummary::default()
            }
        }
    }

    /// Verifies the endpoint is reachable and holds data of the expected
    /// shape. Run once at session start; whether a failure halts the caller
    /// is the caller's decision.
    pub async fn test_connection(&self) -> bool {
        match self.store.select(&query::build_connection_test()).await {
            Ok(rows) => !rows.is_empty(),
            Err(error) => {
                warn!(%error, "connection test failed");
                false
            }
        }
    }
}
