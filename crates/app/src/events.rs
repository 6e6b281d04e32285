//! Completions of background work, delivered back to the session loop.

use clipsight_core::analysis::AnalysisOutcome;
use clipsight_core::error::UploadError;
use clipsight_core::payload::VideoPayload;
use clipsight_core::types::{RequestId, SelectionTicket};

/// The single completion of one background task.
#[derive(Debug)]
pub enum AppEvent {
    /// A selected file finished validating, reading and encoding.
    SelectionLoaded {
        ticket: SelectionTicket,
        result: Result<VideoPayload, UploadError>,
    },

    /// The remote analysis call resolved.
    AnalysisSettled {
        request_id: RequestId,
        outcome: AnalysisOutcome,
    },
}
