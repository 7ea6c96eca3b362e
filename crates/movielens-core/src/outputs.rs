use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::timestamps::TIMESTAMP_FORMAT;

/// Writes `df` as comma separated text with a header row and no index column.
///
/// The frame is written to a temporary file beside `path` and renamed over it
/// once complete, so a failed write never leaves a partial file at `path`.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = tempfile::Builder::new()
        .prefix(".cleaned-")
        .suffix(".csv.tmp")
        .tempfile_in(dir)?;

    CsvWriter::new(staged.as_file_mut())
        .include_header(true)
        .with_separator(b',')
        .with_datetime_format(Some(TIMESTAMP_FORMAT.to_string()))
        .finish(df)?;
    staged.as_file().sync_all()?;

    debug!(staged = %staged.path().display(), target = %path.display(), "moving output into place");
    staged.persist(path).map_err(|err| PipelineError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;

    Ok(())
}
