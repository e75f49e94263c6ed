//! HTTP client for the parts catalog search endpoint
//!
//! One GET per call. No retries, no timeout and no cancellation: a request
//! runs until the server or the transport gives up.

use super::models::{ErrorEnvelope, SearchEnvelope};
use crate::modules::search::domain::{
    entities::RawPartRecord, repositories::PartCatalog, value_objects::Query,
};
use crate::shared::errors::SearchError;
use crate::shared::utils::LogContext;
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Instant;

const SEARCH_PATH: &str = "/api/search";

pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for the catalog at `base_url` (no trailing slash)
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create client with custom HTTP client (for testing)
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for a query, with the query percent-encoded
    pub fn search_url(&self, query: &Query) -> String {
        format!(
            "{}{}?q={}",
            self.base_url,
            SEARCH_PATH,
            urlencoding::encode(query.as_str())
        )
    }

    async fn parse_response(response: Response) -> Result<Vec<RawPartRecord>, SearchError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.message().map(str::to_string))
                .unwrap_or_else(|| SearchError::GENERIC_MESSAGE.to_string());

            log::warn!("Catalog: HTTP {} for search: {}", status, message);
            return Err(SearchError::Rejected(message));
        }

        let envelope: SearchEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.results)
    }
}

#[async_trait]
impl PartCatalog for CatalogClient {
    async fn search(&self, query: &Query) -> Result<Vec<RawPartRecord>, SearchError> {
        let url = self.search_url(query);
        let started = Instant::now();

        LogContext::api_call(&url, "GET", None);

        let result = match self.client.get(&url).send().await {
            Ok(response) => Self::parse_response(response).await,
            Err(e) => Err(SearchError::from(e)),
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(records) => LogContext::api_call(
                &url,
                &format!("returned {} records", records.len()),
                Some(elapsed_ms),
            ),
            Err(e) => LogContext::error_with_context(e, &format!("Catalog search '{}'", query)),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query() {
        let client = CatalogClient::new("https://catalog.example.com/");
        let query = Query::parse("6203-2Z bearing & seal").unwrap();

        assert_eq!(client.base_url(), "https://catalog.example.com");
        assert_eq!(
            client.search_url(&query),
            "https://catalog.example.com/api/search?q=6203-2Z%20bearing%20%26%20seal"
        );
    }
}
