use std::sync::Arc;

use crate::modules::search::application::{SearchOrchestrator, SubmitOutcome};
use crate::modules::search::domain::value_objects::QueryOrigin;

const SUBMIT_KEY: &str = "Enter";

/// The search text field and its submit control
pub struct TextInput {
    orchestrator: Arc<SearchOrchestrator>,
}

impl TextInput {
    pub fn new(orchestrator: Arc<SearchOrchestrator>) -> Self {
        Self { orchestrator }
    }

    pub async fn text(&self) -> String {
        self.orchestrator.session().query_field().await
    }

    pub async fn set_text(&self, text: &str) {
        self.orchestrator.session().set_query_field(text).await;
    }

    /// The submit control is disabled while searching or once credits run out
    pub async fn submit_enabled(&self) -> bool {
        self.orchestrator.credits().can_search() && !self.orchestrator.is_pending().await
    }

    /// Clicking a disabled control does nothing
    pub async fn click_submit(&self) -> SubmitOutcome {
        if !self.submit_enabled().await {
            return SubmitOutcome::Ignored;
        }
        self.submit().await
    }

    /// Enter submits the field as typed, whether or not the control is enabled
    pub async fn press_key(&self, key: &str) -> SubmitOutcome {
        if key != SUBMIT_KEY {
            return SubmitOutcome::Ignored;
        }
        self.submit().await
    }

    async fn submit(&self) -> SubmitOutcome {
        let text = self.text().await;
        self.orchestrator.submit(&text, QueryOrigin::Text).await
    }
}
