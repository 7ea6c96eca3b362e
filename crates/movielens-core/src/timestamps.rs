use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;

use crate::error::{PipelineError, Result};

/// Rendering used for the `timestamp` column of the output file.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Converts epoch seconds to the wall-clock time observed in `tz`.
pub fn epoch_to_wall_clock(seconds: i64, tz: Tz) -> Result<NaiveDateTime> {
    let utc = DateTime::from_timestamp(seconds, 0).ok_or(PipelineError::Timestamp { seconds })?;
    Ok(utc.with_timezone(&tz).naive_local())
}
