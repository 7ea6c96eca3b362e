use chrono_tz::Tz;
use movielens_parser::formats::schema::{movie_columns, MOVIE_INFO_COLUMNS, RATING_COLUMNS};
use movielens_parser::Genre;
use polars::prelude::*;

use crate::error::Result;
use crate::join::JoinedRow;
use crate::timestamps::epoch_to_wall_clock;

/// Column order of the merged frame: rating fields, then every movie field
/// except the shared `movie_id`.
pub fn merged_columns() -> Vec<&'static str> {
    RATING_COLUMNS
        .iter()
        .copied()
        .chain(movie_columns().into_iter().skip(1))
        .collect()
}

/// Builds the merged frame. `timestamp` becomes a naive `Datetime` holding
/// the wall-clock time in `tz`.
pub fn build_merged_frame(rows: &[JoinedRow<'_>], tz: Tz) -> Result<DataFrame> {
    let height = rows.len();

    let mut user_ids = Vec::with_capacity(height);
    let mut movie_ids = Vec::with_capacity(height);
    let mut scores = Vec::with_capacity(height);
    let mut timestamps = Vec::with_capacity(height);
    let mut titles = Vec::with_capacity(height);
    let mut release_dates = Vec::with_capacity(height);
    let mut video_release_dates = Vec::with_capacity(height);
    let mut imdb_urls = Vec::with_capacity(height);
    let mut genre_flags: Vec<Vec<i32>> = Genre::ALL
        .iter()
        .map(|_| Vec::with_capacity(height))
        .collect();

    for row in rows {
        let rating = row.rating;
        let movie = row.movie;

        user_ids.push(i64::from(rating.user_id));
        movie_ids.push(i64::from(rating.movie_id));
        scores.push(i64::from(rating.rating));
        let wall_clock = epoch_to_wall_clock(rating.timestamp, tz)?;
        timestamps.push(wall_clock.and_utc().timestamp_millis());

        titles.push(movie.title.as_str());
        release_dates.push(movie.release_date.as_deref());
        video_release_dates.push(movie.video_release_date.as_deref());
        imdb_urls.push(movie.imdb_url.as_deref());
        for (flags, genre) in genre_flags.iter_mut().zip(Genre::ALL.iter()) {
            flags.push(i32::from(movie.has_genre(*genre)));
        }
    }

    let timestamp = Series::new(RATING_COLUMNS[3].into(), timestamps)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;

    let mut columns: Vec<Column> = Vec::with_capacity(merged_columns().len());
    columns.push(Series::new(RATING_COLUMNS[0].into(), user_ids).into());
    columns.push(Series::new(RATING_COLUMNS[1].into(), movie_ids).into());
    columns.push(Series::new(RATING_COLUMNS[2].into(), scores).into());
    columns.push(timestamp.into());
    columns.push(Series::new(MOVIE_INFO_COLUMNS[1].into(), titles).into());
    columns.push(Series::new(MOVIE_INFO_COLUMNS[2].into(), release_dates).into());
    columns.push(Series::new(MOVIE_INFO_COLUMNS[3].into(), video_release_dates).into());
    columns.push(Series::new(MOVIE_INFO_COLUMNS[4].into(), imdb_urls).into());
    for (genre, flags) in Genre::ALL.iter().zip(genre_flags) {
        columns.push(Series::new(genre.canonical_name().into(), flags).into());
    }

    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use movielens_parser::{Movie, Rating};

    use super::*;

    #[test]
    fn merged_columns_drop_duplicate_key() {
        let columns = merged_columns();
        assert_eq!(columns.len(), 27);
        assert_eq!(
            &columns[..8],
            &[
                "user_id",
                "movie_id",
                "rating",
                "timestamp",
                "title",
                "release_date",
                "video_release_date",
                "IMDb_URL"
            ]
        );
        assert_eq!(columns.iter().filter(|name| **name == "movie_id").count(), 1);
    }

    #[test]
    fn frame_has_typed_timestamp_and_flags() {
        let rating = Rating {
            user_id: 1,
            movie_id: 2,
            rating: 5,
            timestamp: 0,
        };
        let mut genres = [false; 19];
        genres[5] = true;
        let movie = Movie {
            movie_id: 2,
            title: "Toy Story".to_string(),
            release_date: Some("01-Jan-1995".to_string()),
            video_release_date: None,
            imdb_url: None,
            genres,
        };
        let rows = [JoinedRow {
            rating: &rating,
            movie: &movie,
        }];

        let df = build_merged_frame(&rows, Tz::UTC).expect("frame");

        assert_eq!(df.height(), 1);
        let names: Vec<&str> = df.get_column_names().iter().map(|name| name.as_str()).collect();
        assert_eq!(names, merged_columns());
        assert_eq!(
            df.column("timestamp").unwrap().dtype(),
            &DataType::Datetime(TimeUnit::Milliseconds, None)
        );
        assert_eq!(df.column("Comedy").unwrap().i32().unwrap().get(0), Some(1));
        assert_eq!(df.column("Drama").unwrap().i32().unwrap().get(0), Some(0));
        assert_eq!(df.column("video_release_date").unwrap().null_count(), 1);
    }
}
