use csv::StringRecord;

use crate::errors::ParserError;
use crate::model::Rating;
use crate::registry::TableParser;

use super::schema::RATING_COLUMNS;
use super::{parse_required, require_field};

/// Tab separated `user_id, movie_id, rating, timestamp`, no header row.
#[derive(Debug, Default, Clone, Copy)]
pub struct RatingsParser;

impl RatingsParser {
    pub const NAME: &'static str = "RATINGS";
}

impl TableParser for RatingsParser {
    type Record = Rating;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn delimiter(&self) -> u8 {
        b'\t'
    }

    fn parse_record(&self, record: &StringRecord, line: u64) -> Result<Rating, ParserError> {
        if record.len() != RATING_COLUMNS.len() {
            return Err(ParserError::FieldCount {
                parser: Self::NAME,
                line,
                expected: RATING_COLUMNS.len(),
                found: record.len(),
            });
        }

        let field = |index: usize| require_field(Self::NAME, record, index, line);

        Ok(Rating {
            user_id: parse_required(Self::NAME, field(0)?, line, RATING_COLUMNS[0])?,
            movie_id: parse_required(Self::NAME, field(1)?, line, RATING_COLUMNS[1])?,
            rating: parse_required(Self::NAME, field(2)?, line, RATING_COLUMNS[2])?,
            timestamp: parse_required(Self::NAME, field(3)?, line, RATING_COLUMNS[3])?,
        })
    }
}
