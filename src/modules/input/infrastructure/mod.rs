mod busy;
pub mod image;
pub mod voice;

pub use image::SimulatedImageRecognizer;
pub use voice::SimulatedVoiceCapture;
