//! Client configuration for the Gemini endpoint.

/// Model used for every analysis unless overridden.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Base URL of the Generative Language REST API.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables checked for the credential, in order.
pub const API_KEY_VARS: &[&str] = &["API_KEY", "GEMINI_API_KEY"];

/// Connection settings for one Gemini client.
///
/// The credential is read once at startup and never changes afterwards.
/// A missing key is not an error here; the client reports it on first use.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key sent in the `x-goog-api-key` header.
    pub api_key: Option<String>,
    /// Model identifier, e.g. `gemini-3-pro-preview`.
    pub model: String,
    /// Base URL without trailing slash, e.g. `https://host/v1beta`.
    pub api_url: String,
}

impl GeminiConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default                                            |
    /// |------------------|----------------------------------------------------|
    /// | `API_KEY`        | falls back to `GEMINI_API_KEY`, else unset         |
    /// | `GEMINI_MODEL`   | `gemini-3-pro-preview`                             |
    /// | `GEMINI_API_URL` | `https://generativelanguage.googleapis.com/v1beta` |
    pub fn from_env() -> Self {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty());

        let model = std::env::var("GEMINI_MODEL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.into());

        let api_url = std::env::var("GEMINI_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());

        Self {
            api_key,
            model,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// `true` when a non-blank credential is present.
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Full `generateContent` URL for the configured model.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .finish()
    }
}
