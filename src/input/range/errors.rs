use crate::core::data::viewport::ViewportError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RangeError {
    #[error("unrecognised range format: {input}")]
    Syntax { input: String },
    #[error("invalid range {input}: {source}")]
    Bounds {
        input: String,
        #[source]
        source: ViewportError,
    },
}

impl RangeError {
    /// The range text as it was given, surrounding whitespace removed.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::Syntax { input } | Self::Bounds { input, .. } => input,
        }
    }
}

#[derive(Debug, Error)]
pub enum RangeFileError {
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("{path} has no first line")]
    Empty { path: String },
    #[error(transparent)]
    Range(#[from] RangeError),
}
