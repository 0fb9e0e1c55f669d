use clap::error::{ContextKind, ContextValue, ErrorKind};
use thiserror::Error;

use crate::input::range::errors::RangeFileError;

/// Exit code when the terminal itself fails mid-run.
pub const TERMINAL_FAILURE_EXIT_CODE: u8 = 5;

/// Fatal command-line problems; each maps to its own exit code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Unknown argument {0}")]
    UnknownArgument(String),
    #[error("Missing parameter to {0} argument")]
    MissingParameter(String),
    #[error("Incorrect range: {0}")]
    InvalidRange(String),
    #[error("Incorrect file name: {0}")]
    InvalidFile(String),
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownArgument(_) => 1,
            Self::MissingParameter(_) => 2,
            Self::InvalidRange(_) => 3,
            Self::InvalidFile(_) => 4,
        }
    }

    pub(crate) fn from_clap(err: &clap::Error) -> Self {
        // clap reports options as `--range <RANGE>`; keep only the flag
        let token = match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(arg)) => arg
                .split_whitespace()
                .next()
                .unwrap_or(arg.as_str())
                .to_string(),
            _ => err
                .to_string()
                .lines()
                .next()
                .unwrap_or_default()
                .to_string(),
        };

        match err.kind() {
            ErrorKind::InvalidValue
            | ErrorKind::NoEquals
            | ErrorKind::TooFewValues
            | ErrorKind::WrongNumberOfValues
            | ErrorKind::MissingRequiredArgument => Self::MissingParameter(token),
            _ => Self::UnknownArgument(token),
        }
    }

    pub(crate) fn from_range_file(path: &str, err: RangeFileError) -> Self {
        match err {
            RangeFileError::Range(range) => Self::InvalidRange(range.input().to_string()),
            RangeFileError::Unreadable { .. } | RangeFileError::Empty { .. } => {
                Self::InvalidFile(path.to_string())
            }
        }
    }
}
