use csv::StringRecord;

use crate::errors::ParserError;
use crate::model::{Genre, Movie};
use crate::registry::TableParser;

use super::schema::{MOVIE_FIELD_COUNT, MOVIE_INFO_COLUMNS};
use super::{clean_optional, parse_flag, parse_required, require_field};

/// Pipe separated movie metadata. Only the first 24 fields of a line are read;
/// anything after the `Western` flag is ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct MoviesParser;

impl MoviesParser {
    pub const NAME: &'static str = "MOVIES";
}

impl TableParser for MoviesParser {
    type Record = Movie;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn delimiter(&self) -> u8 {
        b'|'
    }

    fn parse_record(&self, record: &StringRecord, line: u64) -> Result<Movie, ParserError> {
        if record.len() < MOVIE_FIELD_COUNT {
            return Err(ParserError::FieldCount {
                parser: Self::NAME,
                line,
                expected: MOVIE_FIELD_COUNT,
                found: record.len(),
            });
        }

        let field = |index: usize| require_field(Self::NAME, record, index, line);

        let mut genres = [false; 19];
        for (offset, genre) in Genre::ALL.iter().enumerate() {
            let index = MOVIE_INFO_COLUMNS.len() + offset;
            genres[offset] = parse_flag(Self::NAME, field(index)?, line, genre.canonical_name())?;
        }

        Ok(Movie {
            movie_id: parse_required(Self::NAME, field(0)?, line, MOVIE_INFO_COLUMNS[0])?,
            title: field(1)?.to_string(),
            release_date: clean_optional(field(2)?),
            video_release_date: clean_optional(field(3)?),
            imdb_url: clean_optional(field(4)?),
            genres,
        })
    }
}
