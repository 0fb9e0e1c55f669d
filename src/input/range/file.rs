use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::data::viewport::Viewport;
use crate::input::range::errors::RangeFileError;
use crate::input::range::parse::parse_range;

/// Reads the first line of `path` as a range. Open/read failures and an
/// empty file are file errors; a line that does not parse is a range error.
pub fn read_range_file(path: &Path) -> Result<Viewport, RangeFileError> {
    let unreadable = |source| RangeFileError::Unreadable {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    let mut line = String::new();
    let read = BufReader::new(file)
        .read_line(&mut line)
        .map_err(unreadable)?;

    if read == 0 {
        return Err(RangeFileError::Empty {
            path: path.display().to_string(),
        });
    }

    Ok(parse_range(&line)?)
}
