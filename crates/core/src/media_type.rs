//! Declared MIME types for local files.
//!
//! A browser file picker declares a content type from the file extension
//! without sniffing the bytes. Local files get the same treatment here so
//! validation sees exactly what a picker would report.

/// Prefix every accepted upload type must start with.
pub const VIDEO_TYPE_PREFIX: &str = "video/";

/// Type declared for files whose extension is not recognised.
pub const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Extension (lowercase, without the dot) to declared MIME type.
const EXTENSION_TYPES: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("webm", "video/webm"),
    ("mov", "video/quicktime"),
    ("qt", "video/quicktime"),
    ("mkv", "video/x-matroska"),
    ("avi", "video/x-msvideo"),
    ("wmv", "video/x-ms-wmv"),
    ("flv", "video/x-flv"),
    ("mpeg", "video/mpeg"),
    ("mpg", "video/mpeg"),
    ("ogv", "video/ogg"),
    ("3gp", "video/3gpp"),
    ("3g2", "video/3gpp2"),
    ("ts", "video/mp2t"),
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("txt", "text/plain"),
    ("pdf", "application/pdf"),
];

/// Returns `true` if `media_type` declares video content.
pub fn is_video_type(media_type: &str) -> bool {
    media_type.starts_with(VIDEO_TYPE_PREFIX)
}

/// Declared MIME type for a file name, based on its extension.
pub fn media_type_for_name(name: &str) -> &'static str {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return UNKNOWN_MEDIA_TYPE;
    };
    let ext = ext.to_ascii_lowercase();
    EXTENSION_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, media_type)| *media_type)
        .unwrap_or(UNKNOWN_MEDIA_TYPE)
}
