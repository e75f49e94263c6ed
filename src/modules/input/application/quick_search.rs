use std::sync::Arc;

use crate::modules::search::application::{SearchOrchestrator, SubmitOutcome};
use crate::modules::search::domain::value_objects::QueryOrigin;

/// One-click shortcut for a common part family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickSearchPreset {
    pub label: &'static str,
    pub query: &'static str,
}

pub static QUICK_SEARCH_PRESETS: [QuickSearchPreset; 4] = [
    QuickSearchPreset {
        label: "Bearings",
        query: "6203 bearing",
    },
    QuickSearchPreset {
        label: "Gaskets",
        query: "hydraulic gasket",
    },
    QuickSearchPreset {
        label: "Fasteners",
        query: "M8 bolt",
    },
    QuickSearchPreset {
        label: "Seals",
        query: "oil seal",
    },
];

/// Quick-access buttons. Presets search directly and leave the text field alone.
pub struct QuickSearch {
    orchestrator: Arc<SearchOrchestrator>,
}

impl QuickSearch {
    pub fn new(orchestrator: Arc<SearchOrchestrator>) -> Self {
        Self { orchestrator }
    }

    pub fn presets(&self) -> &'static [QuickSearchPreset] {
        &QUICK_SEARCH_PRESETS
    }

    pub fn find(label: &str) -> Option<&'static QuickSearchPreset> {
        QUICK_SEARCH_PRESETS
            .iter()
            .find(|preset| preset.label.eq_ignore_ascii_case(label))
    }

    pub async fn select(&self, label: &str) -> SubmitOutcome {
        match Self::find(label) {
            Some(preset) => {
                self.orchestrator
                    .submit(preset.query, QueryOrigin::QuickAccess)
                    .await
            }
            None => {
                log::debug!("Unknown quick search '{}'", label);
                SubmitOutcome::Ignored
            }
        }
    }
}
