//! Upload validation and encoding.
//!
//! Turns a selected [`FileHandle`] into a [`VideoPayload`]:
//!
//! 1. the declared type must start with `video/`,
//! 2. the declared size must not exceed the configured limit,
//! 3. the content is read once and base64-encoded,
//! 4. a fresh preview reference is allocated.
//!
//! Rules 1 and 2 run before any byte is read. A read failure, or a read
//! that yields no bytes, is reported as [`UploadError::ReadFailure`] and
//! allocates nothing.

use std::sync::Arc;

use crate::error::UploadError;
use crate::file::FileHandle;
use crate::limits::UploadLimits;
use crate::media_type::is_video_type;
use crate::payload::VideoPayload;
use crate::preview::PreviewRegistry;

const EMPTY_FILE_REASON: &str = "file is empty";

/// Check the declared type and size of a selection, in that order.
pub fn validate_selection(file: &dyn FileHandle, limits: UploadLimits) -> Result<(), UploadError> {
    if !is_video_type(file.media_type()) {
        return Err(UploadError::UnsupportedType {
            media_type: file.media_type().to_string(),
        });
    }
    check_size(file.size(), limits)
}

/// Validate, read and encode a selection.
pub async fn encode_selection(
    file: Arc<dyn FileHandle>,
    limits: UploadLimits,
    previews: &Arc<PreviewRegistry>,
) -> Result<VideoPayload, UploadError> {
    if let Err(err) = validate_selection(file.as_ref(), limits) {
        tracing::info!(
            file = %file.name(),
            media_type = %file.media_type(),
            size_bytes = file.size(),
            error = %err,
            "Selection rejected",
        );
        return Err(err);
    }

    let bytes = file.read_all().await.map_err(|e| {
        tracing::warn!(file = %file.name(), error = %e, "Failed to read selection");
        UploadError::from(e)
    })?;

    // The file may have changed between inspection and read.
    check_size(bytes.len() as u64, limits)?;
    if bytes.is_empty() {
        tracing::info!(file = %file.name(), "Selection is empty");
        return Err(UploadError::ReadFailure(EMPTY_FILE_REASON.to_string()));
    }

    let preview = previews.acquire(file.preview_target());
    let payload = VideoPayload::from_bytes(file, preview, &bytes);

    tracing::info!(
        file = %payload.file_name(),
        media_type = %payload.media_type(),
        size_bytes = payload.size_bytes(),
        preview = %payload.preview().url(),
        "Selection encoded",
    );

    Ok(payload)
}

fn check_size(size_bytes: u64, limits: UploadLimits) -> Result<(), UploadError> {
    if size_bytes > limits.max_bytes() {
        return Err(UploadError::FileTooLarge {
            size_bytes,
            limit_mb: limits.max_upload_mb,
        });
    }
    Ok(())
}
