//! Line-oriented text dump and load.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, instrument};

use crate::errors::{LinesError, LinesResult};

/// Writes each entry as one line, replacing whatever `path` held before.
#[instrument(level = "debug", skip(lines))]
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> LinesResult<()> {
    let file = File::create(path).map_err(|e| LinesError::from_io(path, e))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(|e| LinesError::from_io(path, e))?;
    }
    writer.flush().map_err(|e| LinesError::from_io(path, e))?;
    debug!("wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}

/// Reads `path` back as a list of lines without their terminators.
///
/// A missing file is reported as `LinesError::FileNotFound`, anything else as
/// `LinesError::Io`.
#[instrument(level = "debug")]
pub fn read_lines(path: &Path) -> LinesResult<Vec<String>> {
    let file = File::open(path).map_err(|e| LinesError::from_io(path, e))?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| LinesError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
    debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}
