//! Error type shared by the generator and the verifier.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IconError>;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("Failed to load image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode PNG for {directory}: {source}")]
    Encode {
        directory: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IconError {
    /// Path of the file the failure is about, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            IconError::Decode { path, .. } | IconError::Write { path, .. } => Some(path),
            IconError::Encode { .. } => None,
        }
    }
}
