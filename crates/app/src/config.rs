use clipsight_core::limits::{UploadLimits, DEFAULT_MAX_UPLOAD_MB};
use clipsight_gemini::config::GeminiConfig;

/// Front-end configuration loaded from environment variables.
///
/// Read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Client-side upload size limit.
    pub limits: UploadLimits,
    /// Credential and endpoint for the analysis client.
    pub gemini: GeminiConfig,
}

/// Invalid configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("MAX_UPLOAD_MB must be a positive whole number, got '{0}'")]
    InvalidUploadLimit(String),
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default                                            |
    /// |------------------|----------------------------------------------------|
    /// | `MAX_UPLOAD_MB`  | `20`                                               |
    /// | `API_KEY`        | falls back to `GEMINI_API_KEY`, else unset         |
    /// | `GEMINI_MODEL`   | `gemini-3-pro-preview`                             |
    /// | `GEMINI_API_URL` | `https://generativelanguage.googleapis.com/v1beta` |
    ///
    /// A missing API key is not an error here; it is reported on the
    /// first analysis.
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_upload_mb = match std::env::var("MAX_UPLOAD_MB") {
            Ok(raw) => parse_upload_limit(&raw)?,
            Err(_) => DEFAULT_MAX_UPLOAD_MB,
        };

        Ok(Self {
            limits: UploadLimits::new(max_upload_mb),
            gemini: GeminiConfig::from_env(),
        })
    }
}

fn parse_upload_limit(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(mb) if mb > 0 => Ok(mb),
        _ => Err(ConfigError::InvalidUploadLimit(raw.to_string())),
    }
}
