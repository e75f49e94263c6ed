// Shared kernel used by every module

pub mod config; // Runtime configuration
pub mod errors; // Shared error types
pub mod utils; // Logging helpers

// Re-exports for convenience
pub use config::{AppConfig, CaptureSettings, CreditPolicy, SearchSettings, StalePolicy};
pub use errors::{AppError, AppResult, SearchError};
