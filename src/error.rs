use std::path::PathBuf;

use arrow::error::ArrowError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("No file selected. Exiting...")]
    InputSelectionCancelled,

    #[error("input file {0} does not exist")]
    InputNotFound(PathBuf),

    #[error("unsupported input file {0}: expected a .txt or .csv file")]
    UnsupportedInputType(PathBuf),

    #[error("reference file {path} unusable: {reason}")]
    MissingReferenceFile { path: PathBuf, reason: String },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("cannot write {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("table assembly failed: {0}")]
    Arrow(#[from] ArrowError),
}

pub type Result<T> = std::result::Result<T, CleanError>;
