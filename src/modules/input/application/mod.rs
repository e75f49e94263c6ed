pub mod capture_input;
pub mod quick_search;
pub mod text_input;

pub use capture_input::{CaptureInput, ImageInput, VoiceInput};
pub use quick_search::{QuickSearch, QuickSearchPreset, QUICK_SEARCH_PRESETS};
pub use text_input::TextInput;
