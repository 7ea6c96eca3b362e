use std::path::PathBuf;

use chrono_tz::Tz;
use movielens_parser::{load_movies, load_ratings, MovieTable, RatingsTable};
use polars::prelude::DataFrame;
use tracing::info;

use crate::config::{DuplicatePolicy, PipelineConfig};
use crate::error::{PipelineError, Result};
use crate::frame::build_merged_frame;
use crate::join::inner_join;
use crate::outputs::write_csv;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    pub ratings_read: usize,
    pub movies_read: usize,
    pub rows_written: usize,
    pub dropped_ratings: usize,
    pub output_path: PathBuf,
}

#[derive(Debug)]
pub struct MergeResult {
    pub frame: DataFrame,
    pub dropped_ratings: usize,
}

/// Joins the two tables and normalizes timestamps without touching the
/// filesystem. An empty join is an error.
pub fn merge_tables(
    ratings: &RatingsTable,
    movies: &MovieTable,
    policy: DuplicatePolicy,
    tz: Tz,
) -> Result<MergeResult> {
    let joined = inner_join(ratings, movies, policy)?;
    if joined.rows.is_empty() {
        return Err(PipelineError::EmptyJoin {
            ratings: ratings.len(),
        });
    }

    let frame = build_merged_frame(&joined.rows, tz)?;
    Ok(MergeResult {
        frame,
        dropped_ratings: joined.dropped_ratings,
    })
}

/// Load, join, normalize, write. The first failing stage aborts the run
/// before the output path is touched.
pub fn run(config: &PipelineConfig) -> Result<PipelineSummary> {
    info!(
        ratings = %config.ratings_path.display(),
        movies = %config.movies_path.display(),
        encoding = %config.encoding,
        "loading input tables"
    );
    let ratings = load_ratings(&config.ratings_path, config.encoding)?;
    let movies = load_movies(&config.movies_path, config.encoding)?;

    let MergeResult {
        mut frame,
        dropped_ratings,
    } = merge_tables(&ratings, &movies, config.duplicate_movies, config.timezone)?;

    write_csv(&mut frame, &config.output_path)?;

    let summary = PipelineSummary {
        ratings_read: ratings.len(),
        movies_read: movies.len(),
        rows_written: frame.height(),
        dropped_ratings,
        output_path: config.output_path.clone(),
    };
    info!(
        ratings_read = summary.ratings_read,
        movies_read = summary.movies_read,
        rows_written = summary.rows_written,
        dropped_ratings = summary.dropped_ratings,
        output = %summary.output_path.display(),
        timezone = %config.timezone,
        "merged ratings written"
    );

    Ok(summary)
}
