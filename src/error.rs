use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("No such path: {0}")]
    PathNotFound(PathBuf),
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[cfg(feature = "images")]
    #[error("Image error on {path}: {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Predicate failed: {0}")]
    Predicate(String),
}
impl FinderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FinderError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl ToString) -> Self {
        FinderError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
    #[cfg(feature = "images")]
    pub(crate) fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        FinderError::Image {
            path: path.into(),
            source,
        }
    }
}
