/// Test catalogs and service builders
use async_trait::async_trait;
use partfinder::modules::search::{
    PartCatalog, Query, RawPartRecord, SearchOrchestrator, SessionContext,
};
use partfinder::shared::{AppConfig, SearchError, SearchSettings};
use partfinder::PartFinder;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

type CatalogResult = Result<Vec<RawPartRecord>, SearchError>;

/// Catalog that answers every query with the same response and records what it was asked
pub struct StaticCatalog {
    response: CatalogResult,
    queries: Mutex<Vec<String>>,
}

impl StaticCatalog {
    pub fn returning(records: Vec<RawPartRecord>) -> Self {
        Self {
            response: Ok(records),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: SearchError) -> Self {
        Self {
            response: Err(error),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl PartCatalog for StaticCatalog {
    async fn search(&self, query: &Query) -> CatalogResult {
        self.queries.lock().unwrap().push(query.as_str().to_string());
        self.response.clone()
    }
}

/// Catalog whose responses are released by the test, one gate per query
pub struct GatedCatalog {
    gates: Mutex<HashMap<String, oneshot::Receiver<CatalogResult>>>,
}

impl GatedCatalog {
    pub fn new() -> Self {
        Self {
            gates: Mutex::new(HashMap::new()),
        }
    }

    /// Hold searches for `query` until the returned sender fires
    pub fn gate(&self, query: &str) -> oneshot::Sender<CatalogResult> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(query.to_string(), rx);
        tx
    }
}

#[async_trait]
impl PartCatalog for GatedCatalog {
    async fn search(&self, query: &Query) -> CatalogResult {
        let gate = self.gates.lock().unwrap().remove(query.as_str());
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(SearchError::Transport("gate dropped".to_string()))),
            None => Ok(Vec::new()),
        }
    }
}

/// Orchestrator over a fresh session with the given settings
pub fn build_orchestrator(
    catalog: Arc<dyn PartCatalog>,
    settings: SearchSettings,
) -> SearchOrchestrator {
    let session = Arc::new(SessionContext::new(settings.starting_credits));
    SearchOrchestrator::new(session, catalog, settings)
}

/// Fully wired session against a local, never-contacted base URL
pub fn build_finder(catalog: Arc<dyn PartCatalog>) -> PartFinder {
    let config = AppConfig::new("http://127.0.0.1:9").unwrap();
    PartFinder::with_catalog(config, catalog)
}

pub fn build_finder_with(config: AppConfig, catalog: Arc<dyn PartCatalog>) -> PartFinder {
    PartFinder::with_catalog(config, catalog)
}
