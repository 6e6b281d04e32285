/// Errors raised while turning a user-selected file into a video payload.
///
/// The display strings are shown verbatim next to the upload control.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Please upload a valid video file.")]
    UnsupportedType { media_type: String },

    #[error("File is too large. Please use videos under {limit_mb}MB.")]
    FileTooLarge { size_bytes: u64, limit_mb: u64 },

    #[error("Failed to read file: {0}")]
    ReadFailure(String),
}

impl UploadError {
    /// `true` for the two rule violations checked before any bytes are read.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedType { .. } | Self::FileTooLarge { .. }
        )
    }
}

impl From<std::io::Error> for UploadError {
    fn from(err: std::io::Error) -> Self {
        Self::ReadFailure(err.to_string())
    }
}
