//! File-backed logging. The terminal belongs to the renderer, so log
//! records never go to stdout or stderr.

use std::env;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

pub const LOG_FILE_ENV: &str = "BRAILLEBROT_LOG_FILE";
const DEFAULT_LOG_FILE_NAME: &str = "braillebrot.log";

/// `$BRAILLEBROT_LOG_FILE`, or `braillebrot.log` in the system temp dir.
#[must_use]
pub fn log_file_path() -> PathBuf {
    env::var_os(LOG_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join(DEFAULT_LOG_FILE_NAME))
}

/// Installs `env_logger` writing to [`log_file_path`], filter `info` unless
/// `RUST_LOG` says otherwise.
pub fn init() -> io::Result<PathBuf> {
    let path = log_file_path();
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()
        .map_err(io::Error::other)?;

    Ok(path)
}
