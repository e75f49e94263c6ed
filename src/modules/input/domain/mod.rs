pub mod capture;

pub use capture::{CaptureSource, ImageSelection, QueryCapture};

#[cfg(test)]
pub use capture::MockQueryCapture;
