//! `clipsight` -- ask Gemini about a short video clip.
//!
//! Interactive terminal front end: select a clip, edit the prompt, run the
//! analysis and read the result. Logs go to stderr so they never mix with
//! the screen.
//!
//! # Environment variables
//!
//! | Variable         | Required | Default                 | Description                        |
//! |------------------|----------|-------------------------|------------------------------------|
//! | `API_KEY`        | yes*     | --                      | Gemini API key (`GEMINI_API_KEY` also accepted) |
//! | `MAX_UPLOAD_MB`  | no       | `20`                    | Largest clip accepted, in MiB      |
//! | `GEMINI_MODEL`   | no       | `gemini-3-pro-preview`  | Model identifier                   |
//! | `GEMINI_API_URL` | no       | Generative Language API | Base URL of the REST API           |
//! | `RUST_LOG`       | no       | `clipsight=info`        | Log filter                         |
//!
//! \* Without a key the front end still starts; the first analysis reports
//! the missing key.

use std::sync::Arc;

use clipsight_app::config::AppConfig;
use clipsight_app::session::Session;
use clipsight_core::preview::PreviewRegistry;
use clipsight_gemini::api::GeminiApi;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clipsight=info,clipsight_app=info,clipsight_core=info,clipsight_gemini=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // --- Configuration ---
    let config = AppConfig::from_env()?;
    tracing::info!(
        max_upload_mb = config.limits.max_upload_mb,
        model = %config.gemini.model,
        has_api_key = config.gemini.has_api_key(),
        "Loaded configuration",
    );
    if !config.gemini.has_api_key() {
        tracing::warn!("API_KEY is not set; analyses will fail until it is configured");
    }

    // --- Collaborators ---
    let backend = Arc::new(GeminiApi::new(config.gemini.clone()));
    let previews = PreviewRegistry::new();

    // --- Shutdown on Ctrl+C ---
    let cancel = CancellationToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_cancel.cancel();
        }
    });

    // --- Run ---
    let session = Session::new(backend, Arc::clone(&previews), config.limits);
    let coordinator = session
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), cancel)
        .await?;

    // Teardown releases the held preview reference.
    drop(coordinator);
    tracing::info!(
        released = previews.released_count(),
        active = previews.active_count(),
        "Session ended",
    );

    Ok(())
}
