use crate::model::Genre;

pub const RATING_COLUMNS: [&str; 4] = ["user_id", "movie_id", "rating", "timestamp"];

pub const MOVIE_INFO_COLUMNS: [&str; 5] = [
    "movie_id",
    "title",
    "release_date",
    "video_release_date",
    "IMDb_URL",
];

/// Number of leading fields consumed from each movie line.
pub const MOVIE_FIELD_COUNT: usize = MOVIE_INFO_COLUMNS.len() + Genre::ALL.len();

pub fn movie_columns() -> Vec<&'static str> {
    MOVIE_INFO_COLUMNS
        .iter()
        .copied()
        .chain(Genre::ALL.iter().map(Genre::canonical_name))
        .collect()
}
