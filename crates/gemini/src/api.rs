//! REST client for the Gemini `generateContent` endpoint.
//!
//! Wraps one model endpoint using [`reqwest`]. Each analysis is a single
//! request: no retries, no timeout, no streaming.

use crate::config::GeminiConfig;
use crate::messages::{parse_error_message, GenerateContentRequest, GenerateContentResponse};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Returned in place of an analysis when the model produced no text.
pub const NO_ANALYSIS_FALLBACK: &str = "No analysis generated.";

/// Used when a failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze video.";

/// HTTP client for one Gemini model.
pub struct GeminiApi {
    client: reqwest::Client,
    config: GeminiConfig,
}

/// Errors from the Gemini REST layer.
///
/// The display string of every variant is suitable to show to the user.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// No credential was configured at startup.
    #[error("API key is not configured. Set API_KEY in the environment.")]
    MissingApiKey,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The API's `error.message`, or a generic fallback.
        message: String,
    },

    /// A 2xx response body could not be decoded.
    #[error("Failed to decode model response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GeminiError {
    /// Message to show the user; never empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl GeminiApi {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Analyze an inline video with a prompt.
    ///
    /// Returns the generated text, or [`NO_ANALYSIS_FALLBACK`] when the
    /// response carries none.
    pub async fn analyze_video(
        &self,
        encoded: &str,
        media_type: &str,
        prompt: &str,
    ) -> Result<String, GeminiError> {
        let request = GenerateContentRequest::video_with_prompt(encoded, media_type, prompt);

        tracing::info!(
            model = %self.config.model,
            media_type,
            payload_len = encoded.len(),
            prompt_len = prompt.len(),
            "Submitting video analysis",
        );

        match self.generate_content(&request).await {
            Ok(response) => {
                let text = response.text();
                tracing::info!(
                    model = %self.config.model,
                    has_text = text.is_some(),
                    "Video analysis completed",
                );
                Ok(text.unwrap_or_else(|| NO_ANALYSIS_FALLBACK.to_string()))
            }
            Err(e) => {
                tracing::error!(model = %self.config.model, error = %e, "Gemini API error");
                Err(e)
            }
        }
    }

    /// Send a `generateContent` request.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest<'_>,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(GeminiError::MissingApiKey)?;

        let response = self
            .client
            .post(self.config.generate_url())
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. On failure the
    /// API's `error.message` becomes the error message.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, GeminiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message =
                parse_error_message(&body).unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        // Unroutable URL: a network attempt would surface as `Request`.
        let mut config = GeminiConfig::new(None);
        config.api_url = "http://127.0.0.1:1/v1beta".into();
        let api = GeminiApi::new(config);

        let result = api.analyze_video("AAAA", "video/mp4", "hi").await;

        assert_matches!(result, Err(GeminiError::MissingApiKey));
    }

    #[test]
    fn api_error_displays_its_message() {
        let err = GeminiError::Api {
            status: 403,
            message: "Permission denied".into(),
        };
        assert_eq!(err.user_message(), "Permission denied");
    }

    #[test]
    fn empty_message_falls_back() {
        let err = GeminiError::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }
}
