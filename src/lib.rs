pub mod modules;
pub mod shared;

use modules::{
    input::{
        ImageInput, QueryCapture, QuickSearch, SimulatedImageRecognizer, SimulatedVoiceCapture,
        TextInput, VoiceInput,
    },
    search::{CatalogClient, PartCatalog, SearchOrchestrator, SessionContext},
};
use shared::{utils::init_logger, AppConfig, AppResult};
use std::sync::Arc;

/// One search session with every input path wired to a single orchestrator
pub struct PartFinder {
    pub config: AppConfig,
    pub session: Arc<SessionContext>,
    pub orchestrator: Arc<SearchOrchestrator>,
    pub text: TextInput,
    pub voice: VoiceInput,
    pub image: ImageInput,
    pub quick: QuickSearch,
}

impl PartFinder {
    /// Initialize logging, read the environment and wire the session
    pub fn bootstrap() -> AppResult<Self> {
        init_logger();
        let config = AppConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Wire a session against the catalog named in `config`
    pub fn new(config: AppConfig) -> Self {
        let catalog: Arc<dyn PartCatalog> = Arc::new(CatalogClient::new(&config.api_base_url));
        Self::with_catalog(config, catalog)
    }

    /// Wire a session against any catalog implementation
    pub fn with_catalog(config: AppConfig, catalog: Arc<dyn PartCatalog>) -> Self {
        if config.is_placeholder_base_url() {
            log::warn!(
                "Catalog base URL '{}' is still a placeholder; set {}",
                config.api_base_url,
                shared::config::API_BASE_URL_ENV
            );
        }

        let session = Arc::new(SessionContext::new(config.search.starting_credits));
        let orchestrator = Arc::new(SearchOrchestrator::new(
            Arc::clone(&session),
            catalog,
            config.search.clone(),
        ));

        // Cast to trait objects so adapters only see the capture interface
        let voice_capture: Arc<dyn QueryCapture> =
            Arc::new(SimulatedVoiceCapture::from_settings(&config.capture));
        let image_capture: Arc<dyn QueryCapture> =
            Arc::new(SimulatedImageRecognizer::from_settings(&config.capture));

        let text = TextInput::new(Arc::clone(&orchestrator));
        let voice = VoiceInput::new(voice_capture, Arc::clone(&orchestrator));
        let image = ImageInput::new(image_capture, Arc::clone(&orchestrator));
        let quick = QuickSearch::new(Arc::clone(&orchestrator));

        log::info!(
            "Session {} ready against {} with {} credits",
            session.id(),
            config.api_base_url,
            session.credits().balance()
        );

        Self {
            config,
            session,
            orchestrator,
            text,
            voice,
            image,
            quick,
        }
    }

    /// Current search snapshot as JSON for the presentation layer
    pub async fn snapshot_json(&self) -> AppResult<String> {
        let snapshot = self.orchestrator.snapshot().await;
        Ok(serde_json::to_string(&snapshot)?)
    }
}
