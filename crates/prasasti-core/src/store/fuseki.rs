use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{parse_results_json, Binding, SparqlEndpoint, StoreError};
use crate::config::{EndpointConfig, DEFAULT_TIMEOUT_SECS};

/// HTTP client for an Apache Jena Fuseki SPARQL endpoint.
///
/// Queries go out as form-encoded POSTs (`query=<text>&format=json`) with an
/// `Accept: application/json` header, one attempt per call, no caching. Any
/// SPARQL 1.1 compliant store that speaks this protocol works the same way.
pub struct FusekiClient {
    endpoint: String,
    timeout: Duration,
    client: Client,
}

impl FusekiClient {
    /// Creates a client for the given SPARQL query URL
    /// (e.g. "http://localhost:3030/kawali/sparql").
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            client: Client::new(),
        }
    }

    /// Creates a client from endpoint configuration.
    pub fn from_config(config: &EndpointConfig) -> Self {
        Self::new(config.url.clone()).with_timeout(Duration::from_secs(config.timeout_secs))
    }

    /// Sets the per-query timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SparqlEndpoint for FusekiClient {
    async fn select(&self, query: &str) -> Result<Vec<Binding>, StoreError> {
        debug!(endpoint = %self.endpoint, "issuing SPARQL query");

        let response = self
            .client
            .post(&self.endpoint)
            .header("accept", "application/json")
            .form(&[("query", query), ("format", "json")])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        parse_results_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FusekiClient::new("http://localhost:3030/kawali/sparql");
        assert_eq!(client.endpoint(), "http://localhost:3030/kawali/sparql");
        assert_eq!(client.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_client_from_config() {
        let config = EndpointConfig {
            url: "http://fuseki.example.org/kawali/sparql".to_string(),
            timeout_secs: 5,
        };
        let client = FusekiClient::from_config(&config);
        assert_eq!(client.endpoint(), "http://fuseki.example.org/kawali/sparql");
        assert_eq!(client.timeout, Duration::from_secs(5));
    }
}
