//! Stand-in for an image recognition service
//!
//! The selected file is never opened or sent anywhere; after a fixed delay
//! the service "recognizes" a canned part query.

use super::busy::BusyGuard;
use crate::modules::input::domain::{CaptureSource, QueryCapture};
use crate::modules::search::domain::value_objects::QueryOrigin;
use crate::shared::config::CaptureSettings;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

pub struct SimulatedImageRecognizer {
    delay: Duration,
    recognized: String,
    busy: AtomicBool,
}

impl SimulatedImageRecognizer {
    pub fn new(delay: Duration, recognized: impl Into<String>) -> Self {
        Self {
            delay,
            recognized: recognized.into(),
            busy: AtomicBool::new(false),
        }
    }

    pub fn from_settings(settings: &CaptureSettings) -> Self {
        Self::new(settings.image_delay, settings.image_query.clone())
    }
}

#[async_trait]
impl QueryCapture for SimulatedImageRecognizer {
    fn origin(&self) -> QueryOrigin {
        QueryOrigin::Image
    }

    async fn capture(&self, source: &CaptureSource) -> AppResult<String> {
        let CaptureSource::Image(selection) = source else {
            return Err(AppError::CaptureError(format!(
                "image recognition cannot read from {}",
                source.describe()
            )));
        };

        let _busy = BusyGuard::acquire(&self.busy, "image recognizer")?;
        log::info!(
            "Image: recognizing '{}' ({:?})",
            selection.file_name(),
            self.delay
        );
        tokio::time::sleep(self.delay).await;

        Ok(self.recognized.clone())
    }
}
