use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VimeoError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("unauthorized {0}: {1}")]
    Unauthorized(u16, serde_json::Value),

    #[error("vimeo error {0}: {1}")]
    Vimeo(u16, serde_json::Value),

    #[error("upload rejected with status {0}")]
    UploadRejected(u16),

    #[error("upload link missing from picture response: {0}")]
    MissingUploadLink(serde_json::Value),

    #[error("invalid folder selection: {0:?}")]
    InvalidSelection(String),

    #[error("thumbnail name must stay inside the thumbnails directory: {0:?}")]
    ThumbnailOutsideDir(String),

    #[error("thumbnail not found: {}", .0.display())]
    ThumbnailNotFound(PathBuf),

    #[error("unexpected response: {0}")]
    UnExpected(serde_json::Value),
}

impl VimeoError {
    /// Whether the error came from a missing or rejected credential.
    pub fn is_authorization(&self) -> bool {
        matches!(self, VimeoError::Unauthorized(..))
    }
}
