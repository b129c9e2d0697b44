use std::path::Path;
use std::sync::Arc;

use crate::error::{DetectError, Result};
use crate::validate::MAX_FILE_SIZE;

/// An image chosen by the user, awaiting validation and upload
///
/// Content is reference counted so the session, the upload task and a
/// preview can share it without copying. Files opened from disk over
/// [`MAX_FILE_SIZE`] carry their size but no content.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    name: String,
    media_type: Option<String>,
    size: u64,
    content: Arc<[u8]>,
}

impl CandidateFile {
    /// Create a file with no declared media type
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<Arc<[u8]>>) -> Self {
        let content = content.into();
        Self {
            name: name.into(),
            media_type: None,
            size: content.len() as u64,
            content,
        }
    }

    /// Set the declared media type
    #[must_use]
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Read a file from disk, declaring a media type inferred from its extension.
    ///
    /// Files larger than [`MAX_FILE_SIZE`] are not read; only their size is
    /// recorded, which is all validation needs to reject them.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let io_error = |source: std::io::Error| DetectError::Io {
            path: path.to_path_buf(),
            source,
        };

        let len = tokio::fs::metadata(path).await.map_err(io_error)?.len();
        let (size, content): (u64, Arc<[u8]>) = if len > MAX_FILE_SIZE {
            (len, Arc::from(Vec::new()))
        } else {
            let bytes = tokio::fs::read(path).await.map_err(io_error)?;
            (bytes.len() as u64, bytes.into())
        };

        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        Ok(Self {
            name,
            media_type: media_type_for_path(path).map(String::from),
            size,
            content,
        })
    }

    /// File name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared media type, if any
    #[must_use]
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Size in bytes
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns true if the content was read; false for files skipped as oversized
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.content.len() as u64 == self.size
    }

    /// Shared handle to the file content
    #[must_use]
    pub fn content(&self) -> &Arc<[u8]> {
        &self.content
    }
}

/// Guess a media type from a file extension
#[must_use]
pub fn media_type_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}
