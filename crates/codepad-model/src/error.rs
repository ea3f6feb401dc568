use thiserror::Error;

use crate::source::FileId;

#[derive(Debug, Error)]
pub enum CodepadError {
    /// Deleting the last remaining file is refused; the buffer set never
    /// drops to zero files.
    #[error("at least one file is required")]
    MinimumFileCount,
    /// An operation named a file id that is not in the buffer set.
    #[error("unknown file id: {0}")]
    UnknownFile(FileId),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodepadError>;
