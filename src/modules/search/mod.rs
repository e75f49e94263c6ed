pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{SearchOrchestrator, SessionContext, SubmitOutcome};
pub use domain::{
    AttemptId, CreditGate, DisplayPart, PartCatalog, Query, QueryOrigin, RawPartRecord,
    SearchSnapshot, SearchState,
};
pub use infrastructure::{CatalogClient, CatalogMapper};
