use std::sync::Arc;

use super::session::SessionContext;
use crate::{
    modules::search::{
        domain::{
            entities::{SearchSnapshot, SearchState},
            repositories::PartCatalog,
            services::CreditGate,
            value_objects::{AttemptId, Query, QueryOrigin},
        },
        infrastructure::catalog::CatalogMapper,
    },
    shared::{
        config::{CreditPolicy, SearchSettings, StalePolicy},
        utils::LogContext,
    },
};

/// What became of one submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing to search for (empty query, busy capture, no file selected)
    Ignored,
    /// Refused because the credit balance is exhausted under `CreditPolicy::Enforced`
    Denied,
    /// The attempt resolved and its state was applied
    Applied {
        attempt: AttemptId,
        state: SearchState,
    },
    /// The attempt resolved after a newer one was issued and was dropped
    Discarded { attempt: AttemptId },
    /// The capture service failed before producing a query
    CaptureFailed(String),
}

impl SubmitOutcome {
    pub fn applied_state(&self) -> Option<&SearchState> {
        match self {
            SubmitOutcome::Applied { state, .. } => Some(state),
            _ => None,
        }
    }

    /// True when the submission started a catalog call
    pub fn was_attempted(&self) -> bool {
        matches!(
            self,
            SubmitOutcome::Applied { .. } | SubmitOutcome::Discarded { .. }
        )
    }
}

/// Drives each search through Idle → Pending → Succeeded | Empty | Failed.
///
/// Every failure is converted into `SearchState::Failed` here; nothing is
/// propagated to the caller.
pub struct SearchOrchestrator {
    session: Arc<SessionContext>,
    catalog: Arc<dyn PartCatalog>,
    mapper: CatalogMapper,
    settings: SearchSettings,
}

impl SearchOrchestrator {
    pub fn new(
        session: Arc<SessionContext>,
        catalog: Arc<dyn PartCatalog>,
        settings: SearchSettings,
    ) -> Self {
        Self {
            session,
            catalog,
            mapper: CatalogMapper::new(),
            settings,
        }
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    pub fn credits(&self) -> &CreditGate {
        self.session.credits()
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    pub async fn state(&self) -> SearchState {
        self.session.snapshot().await.state
    }

    pub async fn snapshot(&self) -> SearchSnapshot {
        self.session.snapshot().await
    }

    pub async fn is_pending(&self) -> bool {
        self.state().await.is_pending()
    }

    /// Run one search for raw input from any adapter
    pub async fn submit(&self, raw: &str, origin: QueryOrigin) -> SubmitOutcome {
        let Some(query) = Query::parse(raw) else {
            log::debug!("Ignoring empty {} submission", origin);
            return SubmitOutcome::Ignored;
        };

        if !self.charge_credit() {
            log::warn!("Search '{}' via {} denied: no credits left", query, origin);
            return SubmitOutcome::Denied;
        }

        let attempt = self.begin_attempt(&query).await;
        LogContext::search_operation(query.as_str(), Some(origin.as_str()), None);

        let next = match self.catalog.search(&query).await {
            Ok(records) => {
                let parts = self.mapper.map_parts(&records);
                LogContext::search_operation(
                    query.as_str(),
                    Some(origin.as_str()),
                    Some(parts.len()),
                );
                SearchState::from_results(parts)
            }
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    &format!("Search {} for '{}'", attempt, query),
                );
                SearchState::failed(e.message())
            }
        };

        self.resolve(attempt, next).await
    }

    fn charge_credit(&self) -> bool {
        match self.settings.credit_policy {
            CreditPolicy::Advisory => {
                self.credits().consume();
                true
            }
            CreditPolicy::Enforced => self.credits().try_consume(),
        }
    }

    async fn begin_attempt(&self, query: &Query) -> AttemptId {
        // Issue the id under the write lock so snapshot order matches id order
        let mut snapshot = self.session.snapshot_mut().await;
        let attempt = self.session.issue_attempt();
        snapshot.begin(attempt, query.clone());
        log::debug!(
            "Search {} pending for '{}' ({} credits left)",
            attempt,
            query,
            self.credits().balance()
        );
        attempt
    }

    async fn resolve(&self, attempt: AttemptId, next: SearchState) -> SubmitOutcome {
        let mut snapshot = self.session.snapshot_mut().await;

        if self.settings.stale_policy == StalePolicy::LatestAttemptWins
            && self.session.latest_attempt() != Some(attempt)
        {
            log::info!(
                "Discarding {} result of stale search {}",
                next.label(),
                attempt
            );
            return SubmitOutcome::Discarded { attempt };
        }

        snapshot.settle(next.clone());
        log::debug!("Search {} settled as {}", attempt, next.label());

        SubmitOutcome::Applied {
            attempt,
            state: next,
        }
    }
}
