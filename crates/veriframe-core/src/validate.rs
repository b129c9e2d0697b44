//! Pre-upload file checks.

use crate::error::ValidationError;
use crate::types::CandidateFile;

/// Media types the inference service accepts, matched case-sensitively
pub const ACCEPTED_MEDIA_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Largest accepted upload, in bytes (10 MiB, inclusive)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Verdict of [`validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The file may be submitted
    Accepted,
    /// The file must be replaced before submitting
    Rejected(ValidationError),
}

impl ValidationOutcome {
    /// Returns true if the file was accepted
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Convert into a `Result`
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            Self::Accepted => Ok(()),
            Self::Rejected(reason) => Err(reason),
        }
    }
}

/// Classify a candidate file using only its metadata.
///
/// Size is checked before type, so an oversized file is always `TooLarge`.
#[must_use]
pub fn validate(file: &CandidateFile) -> ValidationOutcome {
    let size = file.size();
    if size > MAX_FILE_SIZE {
        return ValidationOutcome::Rejected(ValidationError::TooLarge {
            size,
            limit: MAX_FILE_SIZE,
        });
    }

    match file.media_type() {
        Some(media_type) if ACCEPTED_MEDIA_TYPES.contains(&media_type) => ValidationOutcome::Accepted,
        other => ValidationOutcome::Rejected(ValidationError::UnsupportedType {
            media_type: other.map(String::from),
        }),
    }
}
