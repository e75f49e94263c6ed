use crate::modules::search::domain::value_objects::QueryOrigin;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use std::path::PathBuf;

/// Image chosen by the user. Its content is never inspected or uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSelection {
    pub path: PathBuf,
}

impl ImageSelection {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Input handed to a capture service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureSource {
    Microphone,
    Image(ImageSelection),
}

impl CaptureSource {
    pub fn describe(&self) -> String {
        match self {
            CaptureSource::Microphone => "microphone".to_string(),
            CaptureSource::Image(selection) => format!("image '{}'", selection.file_name()),
        }
    }
}

/// A service that turns captured input into query text
///
/// Captures are one-shot: once started they run to completion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryCapture: Send + Sync {
    /// Input path this capture feeds
    fn origin(&self) -> QueryOrigin;

    /// Produce the recognized query text
    ///
    /// # Errors
    /// `AppError::CaptureInProgress` when a capture is already running and
    /// `AppError::CaptureError` when the source does not fit this service.
    async fn capture(&self, source: &CaptureSource) -> AppResult<String>;
}
