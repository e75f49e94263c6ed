use crate::modules::search::domain::{
    entities::SearchSnapshot, services::CreditGate, value_objects::AttemptId,
};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{RwLock, RwLockWriteGuard};
use uuid::Uuid;

/// Per-session state shared by the orchestrator and the input adapters.
///
/// Created once at bootstrap and dropped with the session; nothing here is
/// persisted. Only the orchestrator writes the search snapshot.
#[derive(Debug)]
pub struct SessionContext {
    id: Uuid,
    started_at: DateTime<Utc>,
    credits: CreditGate,
    snapshot: RwLock<SearchSnapshot>,
    attempts_issued: AtomicU64,
    query_field: RwLock<String>,
}

impl SessionContext {
    pub fn new(starting_credits: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            credits: CreditGate::new(starting_credits),
            snapshot: RwLock::new(SearchSnapshot::idle()),
            attempts_issued: AtomicU64::new(0),
            query_field: RwLock::new(String::new()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn credits(&self) -> &CreditGate {
        &self.credits
    }

    pub async fn snapshot(&self) -> SearchSnapshot {
        self.snapshot.read().await.clone()
    }

    /// Current contents of the search text field
    pub async fn query_field(&self) -> String {
        self.query_field.read().await.clone()
    }

    pub async fn set_query_field(&self, text: &str) {
        *self.query_field.write().await = text.to_string();
    }

    /// Most recently issued attempt, if any search was ever attempted
    pub fn latest_attempt(&self) -> Option<AttemptId> {
        match self.attempts_issued.load(Ordering::SeqCst) {
            0 => None,
            n => Some(AttemptId::new(n)),
        }
    }

    pub fn attempts_issued(&self) -> u64 {
        self.attempts_issued.load(Ordering::SeqCst)
    }

    pub(super) fn issue_attempt(&self) -> AttemptId {
        AttemptId::new(self.attempts_issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub(super) async fn snapshot_mut(&self) -> RwLockWriteGuard<'_, SearchSnapshot> {
        self.snapshot.write().await
    }
}
