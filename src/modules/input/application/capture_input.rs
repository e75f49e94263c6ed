use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::modules::input::domain::{CaptureSource, ImageSelection, QueryCapture};
use crate::modules::search::application::{SearchOrchestrator, SubmitOutcome};
use crate::modules::search::domain::value_objects::QueryOrigin;
use crate::shared::errors::AppError;
use crate::shared::utils::LogContext;

/// Runs a capture service and hands whatever it recognized to the orchestrator.
///
/// Depends only on the `QueryCapture` interface, so stub and real services
/// plug in the same way.
pub struct CaptureInput {
    capture: Arc<dyn QueryCapture>,
    orchestrator: Arc<SearchOrchestrator>,
}

impl CaptureInput {
    pub fn new(capture: Arc<dyn QueryCapture>, orchestrator: Arc<SearchOrchestrator>) -> Self {
        Self {
            capture,
            orchestrator,
        }
    }

    pub fn origin(&self) -> QueryOrigin {
        self.capture.origin()
    }

    /// Capture, copy the result into the search field, then search
    pub async fn trigger(&self, source: CaptureSource) -> SubmitOutcome {
        match self.recognize(source).await {
            Ok(text) => self.submit(&text).await,
            Err(outcome) => outcome,
        }
    }

    async fn recognize(&self, source: CaptureSource) -> Result<String, SubmitOutcome> {
        let origin = self.origin();

        match self.capture.capture(&source).await {
            Ok(text) => Ok(text),
            Err(AppError::CaptureInProgress(reason)) => {
                log::debug!("Ignoring {} capture: {}", origin, reason);
                Err(SubmitOutcome::Ignored)
            }
            Err(e) => {
                LogContext::error_with_context(&e, &format!("{} capture", origin));
                Err(SubmitOutcome::CaptureFailed(e.to_string()))
            }
        }
    }

    async fn submit(&self, text: &str) -> SubmitOutcome {
        self.orchestrator.session().set_query_field(text).await;
        self.orchestrator.submit(text, self.origin()).await
    }
}

/// Voice search button: NotListening → Listening → NotListening.
///
/// Presses while Listening are ignored; there is no way to abort a capture.
pub struct VoiceInput {
    input: CaptureInput,
    listening: AtomicBool,
}

/// Returns the adapter to NotListening however the capture ends
struct ListeningGuard<'a>(&'a AtomicBool);

impl Drop for ListeningGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl VoiceInput {
    pub fn new(capture: Arc<dyn QueryCapture>, orchestrator: Arc<SearchOrchestrator>) -> Self {
        Self {
            input: CaptureInput::new(capture, orchestrator),
            listening: AtomicBool::new(false),
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    pub async fn press(&self) -> SubmitOutcome {
        if self.listening.swap(true, Ordering::SeqCst) {
            log::debug!("Voice search pressed while listening");
            return SubmitOutcome::Ignored;
        }

        let recognized = {
            let _guard = ListeningGuard(&self.listening);
            self.input.recognize(CaptureSource::Microphone).await
        };

        // Back to NotListening before the search starts
        match recognized {
            Ok(text) => self.input.submit(&text).await,
            Err(outcome) => outcome,
        }
    }
}

/// Photo ID button: one recognition per selected file
pub struct ImageInput {
    input: CaptureInput,
}

impl ImageInput {
    pub fn new(capture: Arc<dyn QueryCapture>, orchestrator: Arc<SearchOrchestrator>) -> Self {
        Self {
            input: CaptureInput::new(capture, orchestrator),
        }
    }

    /// Handle a file-picker result; closing the picker without a file does nothing
    pub async fn select(&self, file: Option<ImageSelection>) -> SubmitOutcome {
        match file {
            Some(selection) => self.input.trigger(CaptureSource::Image(selection)).await,
            None => SubmitOutcome::Ignored,
        }
    }
}
