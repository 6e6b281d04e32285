//! A selected, validated video ready for transmission.

use std::fmt;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::file::FileHandle;
use crate::limits::format_size_mb;
use crate::preview::PreviewLease;

/// One selected video, encoded and holding a live preview reference.
///
/// Only [`crate::upload::encode_selection`] builds these, which keeps the
/// encoded text a pure re-encoding of the bytes read from `source`.
/// Dropping the payload releases its preview reference.
pub struct VideoPayload {
    source: Arc<dyn FileHandle>,
    preview: PreviewLease,
    encoded: Arc<str>,
    media_type: String,
    size_bytes: u64,
}

impl VideoPayload {
    pub(crate) fn from_bytes(
        source: Arc<dyn FileHandle>,
        preview: PreviewLease,
        bytes: &[u8],
    ) -> Self {
        let media_type = source.media_type().to_string();
        Self {
            source,
            preview,
            encoded: Arc::from(STANDARD.encode(bytes)),
            media_type,
            size_bytes: bytes.len() as u64,
        }
    }

    pub fn file_name(&self) -> &str {
        self.source.name()
    }

    pub fn preview(&self) -> &PreviewLease {
        &self.preview
    }

    /// Base64 content, no `data:` prefix. Cheap to clone into a request.
    pub fn encoded(&self) -> &Arc<str> {
        &self.encoded
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Size for display, e.g. `"3.50 MB"`.
    pub fn display_size(&self) -> String {
        format_size_mb(self.size_bytes)
    }

    /// Decode the payload back into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(self.encoded.as_bytes())
    }
}

impl fmt::Debug for VideoPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VideoPayload")
            .field("file_name", &self.file_name())
            .field("media_type", &self.media_type)
            .field("size_bytes", &self.size_bytes)
            .field("preview", &self.preview)
            .field("encoded_len", &self.encoded.len())
            .finish()
    }
}
