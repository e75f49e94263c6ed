pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{CaptureInput, ImageInput, QuickSearch, TextInput, VoiceInput};
pub use domain::{CaptureSource, ImageSelection, QueryCapture};
pub use infrastructure::{SimulatedImageRecognizer, SimulatedVoiceCapture};
