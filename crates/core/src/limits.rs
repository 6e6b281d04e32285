//! Upload size limits.
//!
//! Inline payloads travel base64-encoded inside a single JSON request, so
//! the clip size is capped on the client before anything is read.

/// Default maximum upload size in MiB.
pub const DEFAULT_MAX_UPLOAD_MB: u64 = 20;

/// Bytes per MiB.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Size limit applied by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    /// Maximum accepted size in MiB.
    pub max_upload_mb: u64,
}

impl UploadLimits {
    pub fn new(max_upload_mb: u64) -> Self {
        Self { max_upload_mb }
    }

    /// Maximum accepted size in bytes. A file of exactly this size passes.
    pub fn max_bytes(&self) -> u64 {
        self.max_upload_mb.saturating_mul(BYTES_PER_MB)
    }
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_MB)
    }
}

/// Format a byte count as MiB with two decimals, e.g. `"3.50 MB"`.
pub fn format_size_mb(size_bytes: u64) -> String {
    format!("{:.2} MB", size_bytes as f64 / BYTES_PER_MB as f64)
}
