//! The seam between the front end and the model.

use async_trait::async_trait;

use crate::api::{GeminiApi, GeminiError};

/// Anything that can turn an inline video plus a prompt into text.
///
/// One call is one atomic request: it either returns the generated text
/// (or the fallback text) or fails with a displayable error.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn analyze(
        &self,
        encoded: &str,
        media_type: &str,
        prompt: &str,
    ) -> Result<String, GeminiError>;
}

#[async_trait]
impl AnalysisBackend for GeminiApi {
    async fn analyze(
        &self,
        encoded: &str,
        media_type: &str,
        prompt: &str,
    ) -> Result<String, GeminiError> {
        self.analyze_video(encoded, media_type, prompt).await
    }
}
