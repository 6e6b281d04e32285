//! Text views of the coordinator's state.
//!
//! Pure functions: each returns the text for one panel so the session can
//! redraw only what changed.

use clipsight_core::analysis::AnalysisStatus;
use clipsight_core::limits::UploadLimits;

use crate::coordinator::{AnalyzeBlocked, Coordinator};

const RULE: &str = "----------------------------------------";

/// Shown under read failures; rule violations need a different file instead.
pub const READ_FAILURE_HINT: &str = "Check the path and that the file is readable, then try again.";

/// Step 1: the upload control, or the selected video.
pub fn upload_panel(coordinator: &Coordinator, limits: UploadLimits) -> String {
    let mut out = String::from("[1] Upload Video\n");

    match coordinator.video() {
        Some(video) => {
            out.push_str(&format!(
                "  Selected: {} ({})\n  Type: {}\n  Preview: {}\n",
                video.file_name(),
                video.display_size(),
                video.media_type(),
                video.preview().url(),
            ));
        }
        None if coordinator.is_selection_pending() => {
            out.push_str("  Reading file...\n");
        }
        None => {
            out.push_str(&format!(
                "  Use `open <path>` to upload, or drop a file path here.\n  Supports MP4, WebM, MOV (Max {}MB)\n",
                limits.max_upload_mb
            ));
        }
    }

    if let Some(err) = coordinator.selection_error() {
        out.push_str(&format!("  ! {err}\n"));
        if !err.is_validation() {
            out.push_str(&format!("  {READ_FAILURE_HINT}\n"));
        }
    }
    out
}

/// Step 2: the prompt box.
pub fn prompt_panel(coordinator: &Coordinator) -> String {
    let prompt = coordinator.prompt();
    let shown = if prompt.is_empty() {
        "(empty) What would you like to know about this video?"
    } else {
        prompt
    };
    format!(
        "[2] Ask Gemini\n  Prompt: {shown}\n  Presets: `preset visual` (Visual Style), `preset timeline` (Timeline)\n"
    )
}

/// The analyze button and whether it can be pressed.
pub fn analyze_button(coordinator: &Coordinator) -> String {
    match coordinator.analyze_blocked() {
        Some(AnalyzeBlocked::AlreadyRunning) => "  [ Analyzing Video... ]\n".to_string(),
        Some(AnalyzeBlocked::NoVideo) => "  [ Generate Analysis ] (select a video first)\n".to_string(),
        None => "  [ Generate Analysis ] type `analyze`\n".to_string(),
    }
}

/// The results panel for the current status.
pub fn results_panel(status: &AnalysisStatus) -> String {
    let mut out = String::from("Analysis Results\n");
    match status {
        AnalysisStatus::Idle => {
            out.push_str("  Upload a video and start the analysis to see AI insights here.\n");
        }
        AnalysisStatus::InFlight { .. } => {
            out.push_str("  Analyzing Video Frames\n");
            out.push_str("  This may take a minute depending on video length...\n");
        }
        AnalysisStatus::Settled {
            outcome: Ok(text),
            settled_at,
        } => {
            out.push_str(&format!(
                "  Analysis Complete ({})\n\n",
                settled_at.format("%H:%M:%S UTC")
            ));
            out.push_str(text);
            if !text.ends_with('\n') {
                out.push('\n');
            }
        }
        AnalysisStatus::Settled {
            outcome: Err(message),
            ..
        } => {
            out.push_str("  Analysis Failed\n");
            out.push_str(&format!("  {message}\n"));
        }
    }
    out
}

/// Why an analyze trigger did nothing.
pub fn analyze_ignored(blocked: AnalyzeBlocked) -> &'static str {
    match blocked {
        AnalyzeBlocked::NoVideo => "Select a video first.",
        AnalyzeBlocked::AlreadyRunning => "An analysis is already running.",
    }
}

/// Notice shown when an edit is attempted while controls are locked.
pub const CONTROLS_LOCKED: &str = "Controls are disabled while the video is being analyzed.";

/// The whole screen.
pub fn screen(coordinator: &Coordinator, limits: UploadLimits) -> String {
    format!(
        "{RULE}\n{}\n{}{}\n{}{RULE}\n",
        upload_panel(coordinator, limits),
        prompt_panel(coordinator),
        analyze_button(coordinator),
        results_panel(coordinator.status()),
    )
}

/// Startup banner.
pub fn banner() -> String {
    format!(
        "clipsight {}\nUnderstand your videos in seconds: upload a clip and let Gemini describe it.\n",
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use clipsight_core::error::UploadError;

    use super::*;

    #[test]
    fn idle_results_show_hint() {
        let text = results_panel(&AnalysisStatus::Idle);
        assert!(text.contains("Upload a video and start the analysis"));
    }

    #[test]
    fn in_flight_results_show_progress() {
        let text = results_panel(&AnalysisStatus::InFlight { request_id: 1 });
        assert!(text.contains("Analyzing Video Frames"));
    }

    #[test]
    fn settled_results_show_text_or_error() {
        let ok = AnalysisStatus::Settled {
            outcome: Ok("A cat chases a laser.".into()),
            settled_at: chrono::Utc::now(),
        };
        let text = results_panel(&ok);
        assert!(text.contains("Analysis Complete"));
        assert!(text.contains("A cat chases a laser.\n"));

        let err = AnalysisStatus::Settled {
            outcome: Err("quota exceeded".into()),
            settled_at: chrono::Utc::now(),
        };
        let text = results_panel(&err);
        assert!(text.contains("Analysis Failed"));
        assert!(text.contains("quota exceeded"));
    }

    #[test]
    fn empty_upload_panel_mentions_limit() {
        let coordinator = Coordinator::new();
        let text = upload_panel(&coordinator, UploadLimits::new(35));
        assert!(text.contains("Max 35MB"));
    }

    fn with_selection_error(err: UploadError) -> Coordinator {
        let mut coordinator = Coordinator::new();
        let ticket = coordinator.start_selection();
        coordinator.finish_selection(ticket, Err(err));
        coordinator
    }

    #[test]
    fn read_failure_shows_retry_hint() {
        let coordinator = with_selection_error(UploadError::ReadFailure("permission denied".into()));
        let text = upload_panel(&coordinator, UploadLimits::default());
        assert!(text.contains("! Failed to read file: permission denied"));
        assert!(text.contains(READ_FAILURE_HINT));
    }

    #[test]
    fn rule_violation_has_no_retry_hint() {
        let coordinator = with_selection_error(UploadError::FileTooLarge {
            size_bytes: 30 * 1024 * 1024,
            limit_mb: 20,
        });
        let text = upload_panel(&coordinator, UploadLimits::default());
        assert!(text.contains("! File is too large. Please use videos under 20MB."));
        assert!(!text.contains(READ_FAILURE_HINT));
    }

    #[test]
    fn button_requires_a_video() {
        let coordinator = Coordinator::new();
        assert!(analyze_button(&coordinator).contains("select a video first"));
    }

    #[test]
    fn empty_prompt_shows_placeholder() {
        let mut coordinator = Coordinator::new();
        coordinator.set_prompt("");
        assert!(prompt_panel(&coordinator).contains("(empty)"));
    }

    #[test]
    fn screen_contains_every_panel() {
        let coordinator = Coordinator::new();
        let text = screen(&coordinator, UploadLimits::default());
        assert!(text.contains("[1] Upload Video"));
        assert!(text.contains("[2] Ask Gemini"));
        assert!(text.contains("Generate Analysis"));
        assert!(text.contains("Analysis Results"));
    }
}
