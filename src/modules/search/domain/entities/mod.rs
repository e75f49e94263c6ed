pub mod display_part;
pub mod raw_part;
pub mod search_state;

pub use display_part::{DisplayPart, PartSpecs, SupplierOffer};
pub use raw_part::RawPartRecord;
pub use search_state::{SearchSnapshot, SearchState, FAILURE_PREFIX};
