use super::display_part::DisplayPart;
use crate::modules::search::domain::value_objects::{AttemptId, Query};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Label prepended to every failure message shown to the user
pub const FAILURE_PREFIX: &str = "Search failed";

/// Lifecycle of the session's search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum SearchState {
    Idle,
    Pending,
    Succeeded(Vec<DisplayPart>),
    Empty,
    Failed(String),
}

impl SearchState {
    pub fn failed(message: &str) -> Self {
        SearchState::Failed(format!("{}: {}", FAILURE_PREFIX, message))
    }

    pub fn from_results(results: Vec<DisplayPart>) -> Self {
        if results.is_empty() {
            SearchState::Empty
        } else {
            SearchState::Succeeded(results)
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SearchState::Pending)
    }

    /// Succeeded, Empty and Failed hold until the next attempt
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            SearchState::Succeeded(_) | SearchState::Empty | SearchState::Failed(_)
        )
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SearchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchState::Idle => "idle",
            SearchState::Pending => "pending",
            SearchState::Succeeded(_) => "succeeded",
            SearchState::Empty => "empty",
            SearchState::Failed(_) => "failed",
        }
    }
}

/// Everything the presentation layer reads about the current search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnapshot {
    pub state: SearchState,
    /// Last canonical query that entered Pending
    pub query: Option<Query>,
    pub attempt: Option<AttemptId>,
    /// Results kept on screen while a new attempt is Pending
    pub retained: Vec<DisplayPart>,
    pub updated_at: DateTime<Utc>,
}

impl SearchSnapshot {
    pub fn idle() -> Self {
        Self {
            state: SearchState::Idle,
            query: None,
            attempt: None,
            retained: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Enter Pending for a new attempt; any shown results stay visible
    pub fn begin(&mut self, attempt: AttemptId, query: Query) {
        let retained = match std::mem::replace(&mut self.state, SearchState::Pending) {
            SearchState::Succeeded(results) => results,
            SearchState::Pending => std::mem::take(&mut self.retained),
            _ => Vec::new(),
        };
        self.retained = retained;
        self.query = Some(query);
        self.attempt = Some(attempt);
        self.updated_at = Utc::now();
    }

    /// Apply a settled state, fully replacing previous results
    pub fn settle(&mut self, state: SearchState) {
        self.state = state;
        self.retained.clear();
        self.updated_at = Utc::now();
    }

    pub fn visible_results(&self) -> &[DisplayPart] {
        match &self.state {
            SearchState::Succeeded(results) => results,
            SearchState::Pending => &self.retained,
            _ => &[],
        }
    }

    pub fn no_results_message(&self) -> Option<String> {
        match (&self.state, &self.query) {
            (SearchState::Empty, Some(query)) => Some(format!("No parts found for \"{}\"", query)),
            _ => None,
        }
    }
}

impl Default for SearchSnapshot {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::search::domain::entities::display_part::{PartSpecs, SupplierOffer};

    fn part(id: usize) -> DisplayPart {
        DisplayPart {
            id,
            part_number: format!("P-{}", id),
            name: "Part".to_string(),
            category: "Industrial Parts".to_string(),
            dimensions: "n/a".to_string(),
            specs: PartSpecs {
                supplier: "ACME".to_string(),
                availability: "Available".to_string(),
                last_updated: None,
            },
            suppliers: vec![SupplierOffer {
                name: "ACME".to_string(),
                price: 1.0,
                in_stock: true,
                shipping: "Contact Supplier".to_string(),
                url: "#".to_string(),
            }],
            alternatives: vec![],
            equipment: vec![],
        }
    }

    #[test]
    fn test_failed_message_is_prefixed() {
        assert_eq!(
            SearchState::failed("db down"),
            SearchState::Failed("Search failed: db down".to_string())
        );
    }

    #[test]
    fn test_results_keep_showing_while_pending() {
        let mut snapshot = SearchSnapshot::idle();
        snapshot.begin(AttemptId::new(1), Query::parse("a").unwrap());
        snapshot.settle(SearchState::from_results(vec![part(1)]));

        snapshot.begin(AttemptId::new(2), Query::parse("b").unwrap());
        assert!(snapshot.state.is_pending());
        assert_eq!(snapshot.visible_results().len(), 1);

        snapshot.settle(SearchState::failed("boom"));
        assert!(snapshot.visible_results().is_empty());
        assert!(snapshot.retained.is_empty());
    }

    #[test]
    fn test_no_results_message_only_when_empty() {
        let mut snapshot = SearchSnapshot::idle();
        assert!(snapshot.no_results_message().is_none());

        snapshot.begin(AttemptId::new(1), Query::parse("oil seal").unwrap());
        snapshot.settle(SearchState::from_results(vec![]));
        assert_eq!(
            snapshot.no_results_message().as_deref(),
            Some("No parts found for \"oil seal\"")
        );
    }
}
