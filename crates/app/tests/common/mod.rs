//! Shared helpers for the front-end integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use clipsight_core::file::InMemoryFile;
use clipsight_core::limits::UploadLimits;
use clipsight_core::payload::VideoPayload;
use clipsight_core::preview::PreviewRegistry;
use clipsight_core::upload::encode_selection;
use clipsight_gemini::api::GeminiError;
use clipsight_gemini::backend::AnalysisBackend;
use tokio::sync::Semaphore;

/// A backend that records calls and answers with a canned outcome.
///
/// When gated, each call waits for one permit from [`StubBackend::release`]
/// before answering, which keeps a request in flight as long as a test
/// needs.
pub struct StubBackend {
    outcome: Result<String, String>,
    gate: Option<Semaphore>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubBackend {
    pub fn succeeding(text: &str) -> Arc<Self> {
        Arc::new(Self::new(Ok(text.to_string()), false))
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self::new(Err(message.to_string()), false))
    }

    pub fn gated(text: &str) -> Arc<Self> {
        Arc::new(Self::new(Ok(text.to_string()), true))
    }

    fn new(outcome: Result<String, String>, gated: bool) -> Self {
        Self {
            outcome,
            gate: gated.then(|| Semaphore::new(0)),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Let one gated call complete.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisBackend for StubBackend {
    async fn analyze(
        &self,
        _encoded: &str,
        _media_type: &str,
        prompt: &str,
    ) -> Result<String, GeminiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }

        self.outcome.clone().map_err(|message| GeminiError::Api {
            status: 500,
            message,
        })
    }
}

/// Encode an in-memory clip into a payload tracked by `previews`.
pub async fn payload(previews: &Arc<PreviewRegistry>, name: &str, bytes: &[u8]) -> VideoPayload {
    let file = Arc::new(InMemoryFile::new(name, "video/mp4", bytes.to_vec()));
    encode_selection(file, UploadLimits::default(), previews)
        .await
        .expect("clip should encode")
}
