//! Error conditions that callers may want to tell apart.
//!
//! They are returned inside [anyhow::Error] and can be recovered with
//! `downcast_ref::<DataError>()`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("annotation file '{}' does not exist", path.display())]
    AnnotationFileNotFound { path: PathBuf },

    #[error("malformed annotation line: {reason}")]
    MalformedLine { reason: String },

    #[error("invalid number '{token}' in annotation line")]
    InvalidNumber { token: String },

    #[error("degenerate face rectangle {rect:?}, width and height must be positive")]
    DegenerateRect { rect: [i64; 4] },

    #[error("index {index} is out of range for dataset of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
