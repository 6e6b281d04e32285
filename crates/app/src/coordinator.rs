//! View-state coordinator.
//!
//! [`Coordinator`] owns the front end's state: the selected video, the
//! prompt and the analysis status. It performs no I/O. The session starts
//! work through it (`start_selection`, `begin_analysis`) and hands the
//! completions back (`finish_selection`, `complete_analysis`).
//!
//! Admission control: `begin_analysis` returns `None` without a selected
//! video or while a request is in flight, so at most one analysis is ever
//! outstanding.

use std::sync::Arc;

use clipsight_core::analysis::{AnalysisOutcome, AnalysisStatus};
use clipsight_core::error::UploadError;
use clipsight_core::payload::VideoPayload;
use clipsight_core::prompt::{PromptPreset, DEFAULT_PROMPT};
use clipsight_core::types::{RequestId, SelectionTicket};

/// Everything the analysis client needs for one request.
///
/// Carries a shared handle on the encoded video so a request can outlive
/// the selection it was made from.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub request_id: RequestId,
    pub file_name: String,
    pub encoded: Arc<str>,
    pub media_type: String,
    pub prompt: String,
}

/// Why an analyze trigger was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeBlocked {
    NoVideo,
    AlreadyRunning,
}

#[derive(Debug)]
pub struct Coordinator {
    video: Option<VideoPayload>,
    prompt: String,
    status: AnalysisStatus,
    /// Last upload failure, shown next to the upload control.
    selection_error: Option<UploadError>,
    /// Ticket of the selection currently being read, if any.
    pending_selection: Option<SelectionTicket>,
    next_ticket: SelectionTicket,
    next_request_id: RequestId,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Coordinator {
    pub fn new() -> Self {
        Self {
            video: None,
            prompt: DEFAULT_PROMPT.to_string(),
            status: AnalysisStatus::Idle,
            selection_error: None,
            pending_selection: None,
            next_ticket: 1,
            next_request_id: 1,
        }
    }

    // ---- read-only view ----

    pub fn video(&self) -> Option<&VideoPayload> {
        self.video.as_ref()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn status(&self) -> &AnalysisStatus {
        &self.status
    }

    pub fn selection_error(&self) -> Option<&UploadError> {
        self.selection_error.as_ref()
    }

    pub fn is_selection_pending(&self) -> bool {
        self.pending_selection.is_some()
    }

    /// Upload, clear and prompt controls are disabled while analyzing.
    pub fn controls_locked(&self) -> bool {
        self.status.is_in_flight()
    }

    /// Reason an analyze trigger would be ignored right now, if any.
    pub fn analyze_blocked(&self) -> Option<AnalyzeBlocked> {
        if self.status.is_in_flight() {
            Some(AnalyzeBlocked::AlreadyRunning)
        } else if self.video.is_none() {
            Some(AnalyzeBlocked::NoVideo)
        } else {
            None
        }
    }

    // ---- selection ----

    /// Register a new selection attempt and return its ticket.
    ///
    /// Any earlier pending selection becomes stale and the inline upload
    /// error is cleared.
    pub fn start_selection(&mut self) -> SelectionTicket {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending_selection = Some(ticket);
        self.selection_error = None;
        ticket
    }

    /// Apply the result of the selection identified by `ticket`.
    ///
    /// Results for anything but the latest pending ticket are dropped
    /// (releasing their preview). Returns `true` if the result was applied.
    pub fn finish_selection(
        &mut self,
        ticket: SelectionTicket,
        result: Result<VideoPayload, UploadError>,
    ) -> bool {
        if self.pending_selection != Some(ticket) {
            tracing::debug!(ticket, "Discarding stale selection result");
            return false;
        }
        self.pending_selection = None;

        match result {
            Ok(payload) => self.select_video(payload),
            Err(err) => {
                tracing::info!(ticket, error = %err, "Selection failed");
                self.selection_error = Some(err);
            }
        }
        true
    }

    /// Install a validated payload, replacing (and releasing) any previous one.
    ///
    /// Does not touch the analysis status.
    pub fn select_video(&mut self, payload: VideoPayload) {
        tracing::info!(
            file = %payload.file_name(),
            media_type = %payload.media_type(),
            size_bytes = payload.size_bytes(),
            "Video selected",
        );
        self.selection_error = None;
        let previous = self.video.replace(payload);
        drop(previous);
    }

    /// Drop the selected video and any pending selection.
    ///
    /// Prompt and analysis status are left as they are.
    pub fn clear_video(&mut self) {
        if let Some(payload) = self.video.take() {
            tracing::info!(file = %payload.file_name(), "Video cleared");
        }
        self.pending_selection = None;
        self.selection_error = None;
    }

    // ---- prompt ----

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn apply_preset(&mut self, preset: PromptPreset) {
        self.set_prompt(preset.text());
    }

    // ---- analysis ----

    /// Move to `InFlight` and hand out the request to run.
    ///
    /// Returns `None`, leaving the status untouched, if no video is
    /// selected or a request is already in flight.
    pub fn begin_analysis(&mut self) -> Option<AnalysisRequest> {
        if let Some(blocked) = self.analyze_blocked() {
            tracing::debug!(?blocked, status = self.status.label(), "Analyze trigger ignored");
            return None;
        }
        let video = self.video.as_ref()?;

        let request_id = self.next_request_id;
        self.next_request_id += 1;

        let request = AnalysisRequest {
            request_id,
            file_name: video.file_name().to_string(),
            encoded: Arc::clone(video.encoded()),
            media_type: video.media_type().to_string(),
            prompt: self.prompt.clone(),
        };
        self.status = AnalysisStatus::InFlight { request_id };

        tracing::info!(
            request_id,
            file = %request.file_name,
            media_type = %request.media_type,
            "Analysis started",
        );
        Some(request)
    }

    /// Settle the in-flight request `request_id`.
    ///
    /// Completions for any other id are ignored. Returns `true` if the
    /// status changed.
    pub fn complete_analysis(&mut self, request_id: RequestId, outcome: AnalysisOutcome) -> bool {
        if self.status.in_flight_id() != Some(request_id) {
            tracing::warn!(request_id, status = self.status.label(), "Unexpected analysis completion");
            return false;
        }

        match &outcome {
            Ok(text) => tracing::info!(request_id, result_len = text.len(), "Analysis completed"),
            Err(message) => tracing::warn!(request_id, error = %message, "Analysis failed"),
        }

        self.status = AnalysisStatus::Settled {
            outcome,
            settled_at: chrono::Utc::now(),
        };
        true
    }
}
