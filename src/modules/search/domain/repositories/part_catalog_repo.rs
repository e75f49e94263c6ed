use crate::modules::search::domain::{entities::RawPartRecord, value_objects::Query};
use crate::shared::errors::SearchError;
use async_trait::async_trait;

/// Port to the remote parts catalog
///
/// One call per search attempt. Implementations do not retry and do not
/// cancel; overlapping calls are allowed to race.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PartCatalog: Send + Sync {
    /// Look up parts matching the canonical query
    ///
    /// # Returns
    /// The catalog's records untouched and in catalog order (possibly empty)
    async fn search(&self, query: &Query) -> Result<Vec<RawPartRecord>, SearchError>;
}
