//! The front end's event loop.
//!
//! A single loop owns the [`Coordinator`] and reacts to three sources:
//! input lines, completions of background tasks, and cancellation. File
//! reads and remote calls run as spawned tasks that each produce exactly
//! one [`AppEvent`]; only the loop applies them to the state.
//!
//! When input ends the loop keeps running until every outstanding task has
//! completed, then returns the final coordinator.

use std::path::PathBuf;
use std::sync::Arc;

use clipsight_core::file::{FileHandle, LocalFile};
use clipsight_core::limits::UploadLimits;
use clipsight_core::preview::PreviewRegistry;
use clipsight_core::upload::encode_selection;
use clipsight_gemini::backend::AnalysisBackend;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::commands::{parse_command, Command, HELP_TEXT};
use crate::coordinator::{AnalysisRequest, Coordinator};
use crate::error::SessionResult;
use crate::events::AppEvent;
use crate::render;

const PROMPT_MARKER: &str = "clipsight> ";

/// Whether the loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One interactive front-end session.
pub struct Session {
    coordinator: Coordinator,
    backend: Arc<dyn AnalysisBackend>,
    previews: Arc<PreviewRegistry>,
    limits: UploadLimits,
}

impl Session {
    pub fn new(
        backend: Arc<dyn AnalysisBackend>,
        previews: Arc<PreviewRegistry>,
        limits: UploadLimits,
    ) -> Self {
        Self {
            coordinator: Coordinator::new(),
            backend,
            previews,
            limits,
        }
    }

    /// Run until `quit`, cancellation, or end of input (after draining).
    pub async fn run<R, W>(
        mut self,
        input: R,
        mut output: W,
        cancel: CancellationToken,
    ) -> SessionResult<Coordinator>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let mut tasks: JoinSet<AppEvent> = JoinSet::new();
        let mut input_open = true;

        write_out(&mut output, &render::banner()).await?;
        write_out(&mut output, &render::screen(&self.coordinator, self.limits)).await?;
        write_out(&mut output, PROMPT_MARKER).await?;

        loop {
            if !input_open && tasks.is_empty() {
                break;
            }

            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Session cancelled");
                    break;
                }
                line = lines.next_line(), if input_open => {
                    match line? {
                        Some(line) => {
                            let flow = self.handle_line(&line, &mut tasks, &mut output).await?;
                            if flow == Flow::Quit {
                                break;
                            }
                            write_out(&mut output, PROMPT_MARKER).await?;
                        }
                        None => {
                            tracing::debug!(outstanding = tasks.len(), "Input closed");
                            input_open = false;
                        }
                    }
                }
                Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                    match joined {
                        Ok(event) => self.handle_event(event, &mut output).await?,
                        Err(e) => tracing::error!(error = %e, "Background task failed"),
                    }
                }
            }
        }

        // Outstanding work is abandoned on quit or cancellation.
        tasks.abort_all();
        write_out(&mut output, "\nBye.\n").await?;
        Ok(self.coordinator)
    }

    async fn handle_line<W>(
        &mut self,
        line: &str,
        tasks: &mut JoinSet<AppEvent>,
        output: &mut W,
    ) -> SessionResult<Flow>
    where
        W: AsyncWrite + Unpin,
    {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                write_out(output, &format!("{e}\n")).await?;
                return Ok(Flow::Continue);
            }
        };

        let text = match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => format!("{HELP_TEXT}\n"),
            Command::Show => render::screen(&self.coordinator, self.limits),
            Command::Open { path, media_type } => {
                if self.coordinator.controls_locked() {
                    format!("{}\n", render::CONTROLS_LOCKED)
                } else {
                    self.spawn_selection(path, media_type, tasks);
                    render::upload_panel(&self.coordinator, self.limits)
                }
            }
            Command::Clear => {
                if self.coordinator.controls_locked() {
                    format!("{}\n", render::CONTROLS_LOCKED)
                } else {
                    self.coordinator.clear_video();
                    render::upload_panel(&self.coordinator, self.limits)
                }
            }
            Command::Prompt(prompt) => {
                if self.coordinator.controls_locked() {
                    format!("{}\n", render::CONTROLS_LOCKED)
                } else {
                    self.coordinator.set_prompt(prompt);
                    render::prompt_panel(&self.coordinator)
                }
            }
            Command::Preset(preset) => {
                if self.coordinator.controls_locked() {
                    format!("{}\n", render::CONTROLS_LOCKED)
                } else {
                    self.coordinator.apply_preset(preset);
                    render::prompt_panel(&self.coordinator)
                }
            }
            Command::Analyze => {
                let blocked = self.coordinator.analyze_blocked();
                match self.coordinator.begin_analysis() {
                    Some(request) => {
                        self.spawn_analysis(request, tasks);
                        render::results_panel(self.coordinator.status())
                    }
                    None => {
                        let reason = blocked.map(render::analyze_ignored).unwrap_or_default();
                        format!("{reason}\n")
                    }
                }
            }
        };

        write_out(output, &text).await?;
        Ok(Flow::Continue)
    }

    async fn handle_event<W>(&mut self, event: AppEvent, output: &mut W) -> SessionResult<()>
    where
        W: AsyncWrite + Unpin,
    {
        match event {
            AppEvent::SelectionLoaded { ticket, result } => {
                if self.coordinator.finish_selection(ticket, result) {
                    let text = format!(
                        "\n{}{}",
                        render::upload_panel(&self.coordinator, self.limits),
                        render::analyze_button(&self.coordinator),
                    );
                    write_out(output, &text).await?;
                    write_out(output, PROMPT_MARKER).await?;
                }
            }
            AppEvent::AnalysisSettled {
                request_id,
                outcome,
            } => {
                if self.coordinator.complete_analysis(request_id, outcome) {
                    let text = format!("\n{}", render::results_panel(self.coordinator.status()));
                    write_out(output, &text).await?;
                    write_out(output, PROMPT_MARKER).await?;
                }
            }
        }
        Ok(())
    }

    fn spawn_selection(
        &mut self,
        path: PathBuf,
        media_type: Option<String>,
        tasks: &mut JoinSet<AppEvent>,
    ) {
        let ticket = self.coordinator.start_selection();
        let limits = self.limits;
        let previews = Arc::clone(&self.previews);

        tracing::debug!(ticket, path = %path.display(), "Selection started");

        tasks.spawn(async move {
            let result = match LocalFile::open(&path, media_type).await {
                Ok(file) => {
                    let file: Arc<dyn FileHandle> = Arc::new(file);
                    encode_selection(file, limits, &previews).await
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Cannot open selection");
                    Err(e.into())
                }
            };
            AppEvent::SelectionLoaded { ticket, result }
        });
    }

    fn spawn_analysis(&self, request: AnalysisRequest, tasks: &mut JoinSet<AppEvent>) {
        let backend = Arc::clone(&self.backend);

        tasks.spawn(async move {
            let outcome = backend
                .analyze(&request.encoded, &request.media_type, &request.prompt)
                .await
                .map_err(|e| e.user_message());
            AppEvent::AnalysisSettled {
                request_id: request.request_id,
                outcome,
            }
        });
    }
}

async fn write_out<W>(output: &mut W, text: &str) -> SessionResult<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
