//! Scoped display handle for the selected file.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;
use veriframe_core::CandidateFile;

static NEXT_PREVIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Handle on the bytes of the selected file, for rendering a preview.
///
/// The session holds at most one; it is released on drop when the file is
/// replaced or cleared.
#[derive(Debug)]
pub struct PreviewHandle {
    id: u64,
    name: String,
    media_type: Option<String>,
    content: Arc<[u8]>,
}

impl PreviewHandle {
    pub(crate) fn acquire(file: &CandidateFile) -> Self {
        let id = NEXT_PREVIEW_ID.fetch_add(1, Ordering::Relaxed);
        debug!(id, name = file.name(), "preview acquired");
        Self {
            id,
            name: file.name().to_string(),
            media_type: file.media_type().map(String::from),
            content: Arc::clone(file.content()),
        }
    }

    /// Unique id of this handle
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Name of the previewed file
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw image bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    /// `data:` URL suitable for an image element
    #[must_use]
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.media_type.as_deref().unwrap_or("application/octet-stream"),
            STANDARD.encode(&self.content)
        )
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        debug!(id = self.id, "preview released");
    }
}
