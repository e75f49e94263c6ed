pub mod orchestrator;
pub mod session;

pub use orchestrator::{SearchOrchestrator, SubmitOutcome};
pub use session::SessionContext;
