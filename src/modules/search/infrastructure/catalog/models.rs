// Wire envelopes of the catalog search endpoint

use crate::modules::search::domain::entities::RawPartRecord;
use serde::{Deserialize, Serialize};

/// Success body: `{ "results": [ ... ] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEnvelope {
    pub results: Vec<RawPartRecord>,
}

/// Error body: `{ "error": "<message>" }`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorEnvelope {
    /// Server-supplied message, if it sent a non-empty one
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().filter(|m| !m.is_empty())
    }
}
