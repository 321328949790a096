use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReaderError>;

/// errors surfaced by the readers
///
/// everything except `Io` is detected eagerly, at binding time or when a
/// read operation is called, and is never retried
#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("no storage disk has been selected for this reader")]
    StorageNotConfigured,

    #[error("disk [{0}] is not configured")]
    UnknownDisk(String),

    #[error("no log file has been bound to this reader")]
    FileNotBound,

    #[error("'{0}' is not a daily log file name")]
    InvalidLogFilename(String),

    #[error("log file '{0}' not found")]
    FileNotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid record pattern: {0}")]
    InvalidPattern(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
