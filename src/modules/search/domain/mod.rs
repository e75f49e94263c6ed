pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::{DisplayPart, RawPartRecord, SearchSnapshot, SearchState};
pub use repositories::PartCatalog;
pub use services::CreditGate;
pub use value_objects::{AttemptId, Query, QueryOrigin};
