use crate::utils::error::{MapError, Result};
use reqwest::Client;

/// Owns the single outbound request of a fetch cycle. One GET, no retries,
/// no caching; timeouts are whatever the transport defaults to.
pub struct SparqlFetcher {
    client: Client,
    endpoint: String,
}

impl SparqlFetcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// `GET <endpoint>?query=<encoded>&format=json`. The query text is
    /// percent-encoded by reqwest's query-pair serializer. Non-success
    /// statuses are surfaced as errors, never panics.
    pub async fn fetch(&self, query: &str) -> Result<serde_json::Value> {
        tracing::debug!("Sending SPARQL request to: {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", query), ("format", "json")])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("SPARQL response status: {}", status);

        if !status.is_success() {
            return Err(MapError::StatusError {
                status: status.as_u16(),
            });
        }

        let body = response.json::<serde_json::Value>().await?;
        Ok(body)
    }
}
