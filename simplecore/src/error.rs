use std::path::PathBuf;
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    /// The program could not be started at all, so there is no exit
    /// status to report.
    #[error("unable to launch `{program}`: {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },
}

#[non_exhaustive]
#[derive(Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("field `{0}` must be a string")]
    NotAString(&'static str),
    #[error("field `{0}` must be an array of strings")]
    NotAnArray(&'static str),
    #[error("element {1} of field `{0}` must be a string")]
    ElementNotAString(&'static str, usize),
    #[error("record is not an object: {0}")]
    NotARecord(String),
    #[error("record does not have the shape of {expected}: {record}")]
    ShapeMismatch {
        expected: &'static str,
        record: String,
    },
    #[error("record matches no known parameter shape: {0}")]
    UnknownShape(String),
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("unable to read task file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed task file {path:?}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("unable to encode task for {path:?}: {source}")]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("task file path {0:?} has no parent directory")]
    NoRoot(PathBuf),
}
