//! Stand-in for a speech-to-text service
//!
//! Waits a fixed delay and "hears" a canned transcript.

use super::busy::BusyGuard;
use crate::modules::input::domain::{CaptureSource, QueryCapture};
use crate::modules::search::domain::value_objects::QueryOrigin;
use crate::shared::config::CaptureSettings;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

pub struct SimulatedVoiceCapture {
    delay: Duration,
    transcript: String,
    busy: AtomicBool,
}

impl SimulatedVoiceCapture {
    pub fn new(delay: Duration, transcript: impl Into<String>) -> Self {
        Self {
            delay,
            transcript: transcript.into(),
            busy: AtomicBool::new(false),
        }
    }

    pub fn from_settings(settings: &CaptureSettings) -> Self {
        Self::new(settings.voice_delay, settings.voice_transcript.clone())
    }
}

#[async_trait]
impl QueryCapture for SimulatedVoiceCapture {
    fn origin(&self) -> QueryOrigin {
        QueryOrigin::Voice
    }

    async fn capture(&self, source: &CaptureSource) -> AppResult<String> {
        if *source != CaptureSource::Microphone {
            return Err(AppError::CaptureError(format!(
                "voice capture cannot read from {}",
                source.describe()
            )));
        }

        let _busy = BusyGuard::acquire(&self.busy, "microphone")?;
        log::info!("Voice: listening for {:?}", self.delay);
        tokio::time::sleep(self.delay).await;
        log::debug!("Voice: heard '{}'", self.transcript);

        Ok(self.transcript.clone())
    }
}
