//! File handles for user-selected content.
//!
//! [`FileHandle`] is the platform-side view of a selected file: a declared
//! type and size that can be inspected without touching the content, plus
//! a one-shot asynchronous read of the whole thing.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::media_type::media_type_for_name;

/// A selected file whose content has not been read yet.
#[async_trait]
pub trait FileHandle: Send + Sync + fmt::Debug {
    /// Display name (no directory components).
    fn name(&self) -> &str;

    /// Declared MIME type.
    fn media_type(&self) -> &str;

    /// Declared size in bytes.
    fn size(&self) -> u64;

    /// What a preview reference for this file should point at.
    fn preview_target(&self) -> String {
        self.name().to_string()
    }

    /// Read the entire content.
    async fn read_all(&self) -> io::Result<Vec<u8>>;
}

// ---------------------------------------------------------------------------
// Local files
// ---------------------------------------------------------------------------

/// A file on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
    media_type: String,
    size: u64,
}

impl LocalFile {
    /// Inspect `path` and declare its type from the extension.
    ///
    /// `media_type` overrides the declared type when given. Fails if the
    /// path does not exist or is not a regular file.
    pub async fn open(path: impl AsRef<Path>, media_type: Option<String>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let metadata = tokio::fs::metadata(&path).await?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            ));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let media_type = media_type.unwrap_or_else(|| media_type_for_name(&name).to_string());

        Ok(Self {
            path,
            name,
            media_type,
            size: metadata.len(),
        })
    }
}

#[async_trait]
impl FileHandle for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn preview_target(&self) -> String {
        self.path.display().to_string()
    }

    async fn read_all(&self) -> io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }
}

// ---------------------------------------------------------------------------
// In-memory content
// ---------------------------------------------------------------------------

/// Content that is already in memory, e.g. dropped from another source.
#[derive(Clone)]
pub struct InMemoryFile {
    name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl InMemoryFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }
}

impl fmt::Debug for InMemoryFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[async_trait]
impl FileHandle for InMemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn preview_target(&self) -> String {
        format!("memory:{}", self.name)
    }

    async fn read_all(&self) -> io::Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn local_file_declares_type_from_extension() {
        let mut file = tempfile::Builder::new()
            .suffix(".mp4")
            .tempfile()
            .expect("create temp file");
        file.write_all(b"not really a video").unwrap();

        let local = LocalFile::open(file.path(), None).await.unwrap();

        assert_eq!(local.media_type(), "video/mp4");
        assert_eq!(local.size(), 18);
        assert!(local.name().ends_with(".mp4"));
        assert_eq!(local.read_all().await.unwrap(), b"not really a video");
    }

    #[tokio::test]
    async fn explicit_type_overrides_extension() {
        let file = tempfile::Builder::new()
            .suffix(".bin")
            .tempfile()
            .unwrap();

        let local = LocalFile::open(file.path(), Some("video/webm".into()))
            .await
            .unwrap();

        assert_eq!(local.media_type(), "video/webm");
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFile::open(dir.path().join("gone.mp4"), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFile::open(dir.path(), None).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn in_memory_file_reports_its_bytes() {
        let file = InMemoryFile::new("drop.webm", "video/webm", vec![1, 2, 3]);
        assert_eq!(file.size(), 3);
        assert_eq!(file.preview_target(), "memory:drop.webm");
        assert_eq!(file.read_all().await.unwrap(), vec![1, 2, 3]);
    }
}
