//! Request orchestrator - turns a validated selection into preview and
//! generate calls against the remote service.
//!
//! Both operations follow the same discipline:
//! 1. Gate on `SelectionState::validate_all` — a non-empty report means no
//!    network call at all.
//! 2. Admit through the per-kind [`OperationGate`] — a same-kind call
//!    while one is pending is ignored, different kinds run concurrently.
//! 3. Issue the request, release the in-flight flag on every path, and
//!    apply the response only if its ticket has not been superseded.
//!
//! On failure the previous successful state (the template list) is
//! preserved; the caller surfaces the error and may retry.

use std::sync::{Arc, Mutex};

use tracing::{debug, info, instrument, warn};

use crate::application::error::ApplicationError;
use crate::application::gate::OperationGate;
use crate::application::ports::{DownloadSink, GenerateRequest, GeneratorApi, PreviewRequest};
use crate::domain::preview::{PreviewResult, Template};
use crate::domain::selection::SelectionState;

/// Result of a preview attempt that did not error.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewOutcome {
    /// The template list was replaced with this response.
    Applied(PreviewResult),
    /// A preview was already pending; this call was ignored.
    AlreadyInFlight,
    /// A newer response was applied first; this one was discarded.
    Superseded,
}

/// Result of a generate attempt that did not error.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    /// The artifact was handed to the download sink.
    Saved {
        filename: String,
        path: std::path::PathBuf,
    },
    /// A generate was already pending; this call was ignored.
    AlreadyInFlight,
    /// A newer response was applied first; this one was discarded.
    Superseded,
}

/// Main request orchestrator.
///
/// Owns the displayed template list and the per-kind gates; talks to the
/// outside world only through the injected ports.
pub struct RequestOrchestrator {
    api: Arc<dyn GeneratorApi>,
    sink: Arc<dyn DownloadSink>,
    preview_gate: OperationGate,
    generate_gate: OperationGate,
    templates: Mutex<Vec<Template>>,
}

impl RequestOrchestrator {
    pub fn new(api: Arc<dyn GeneratorApi>, sink: Arc<dyn DownloadSink>) -> Self {
        Self {
            api,
            sink,
            preview_gate: OperationGate::new(),
            generate_gate: OperationGate::new(),
            templates: Mutex::new(Vec::new()),
        }
    }

    /// The template list as of the most recently applied preview.
    pub fn templates(&self) -> Vec<Template> {
        match self.templates.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Fetch and display the template list for the current selection.
    #[instrument(skip_all, fields(project_type = %state.selection().project_type))]
    pub async fn preview(
        &self,
        state: &mut SelectionState,
    ) -> Result<PreviewOutcome, ApplicationError> {
        let report = state.validate_all();
        if !report.is_empty() {
            debug!(errors = report.len(), "preview blocked by validation");
            return Err(ApplicationError::InvalidSelection(report));
        }

        let Some(ticket) = self.preview_gate.try_acquire() else {
            debug!("preview already in flight, ignoring");
            return Ok(PreviewOutcome::AlreadyInFlight);
        };

        let request = PreviewRequest::from_selection(state.selection());
        let result = self.api.preview(&request).await;
        self.preview_gate.release();

        match result {
            Ok(preview) => {
                if !self.preview_gate.try_apply(ticket) {
                    debug!("preview response superseded, discarding");
                    return Ok(PreviewOutcome::Superseded);
                }
                info!(files = preview.count, "preview applied");
                match self.templates.lock() {
                    Ok(mut guard) => *guard = preview.templates.clone(),
                    Err(poisoned) => *poisoned.into_inner() = preview.templates.clone(),
                }
                Ok(PreviewOutcome::Applied(preview))
            }
            // Previous template list stays untouched.
            Err(e) => {
                warn!(error = %e, "preview failed");
                Err(e)
            }
        }
    }

    /// Request the packaged archive and hand it to the download sink.
    #[instrument(skip_all, fields(project_type = %state.selection().project_type))]
    pub async fn generate(
        &self,
        state: &mut SelectionState,
    ) -> Result<GenerateOutcome, ApplicationError> {
        let report = state.validate_all();
        if !report.is_empty() {
            debug!(errors = report.len(), "generate blocked by validation");
            return Err(ApplicationError::InvalidSelection(report));
        }

        let Some(ticket) = self.generate_gate.try_acquire() else {
            debug!("generate already in flight, ignoring");
            return Ok(GenerateOutcome::AlreadyInFlight);
        };

        let request = GenerateRequest::from_selection(state.selection());
        let filename = state.selection().archive_filename();
        let result = self.api.generate(&request).await;
        self.generate_gate.release();

        match result {
            Ok(bytes) => {
                if !self.generate_gate.try_apply(ticket) {
                    debug!("generate response superseded, discarding");
                    return Ok(GenerateOutcome::Superseded);
                }
                info!(bytes = bytes.len(), filename = %filename, "archive received");
                let path = self.sink.save(&bytes, &filename)?;
                Ok(GenerateOutcome::Saved { filename, path })
            }
            Err(e) => {
                warn!(error = %e, "generate failed");
                Err(e)
            }
        }
    }
}
