use std::fs;
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use crate::encoding::InputEncoding;
use crate::errors::ParserError;
use crate::formats::{MoviesParser, RatingsParser};
use crate::model::{MovieTable, RatingsTable};

/// A headerless, positionally typed delimited format.
pub trait TableParser {
    type Record;

    fn name(&self) -> &'static str;
    fn delimiter(&self) -> u8;
    fn parse_record(&self, record: &StringRecord, line: u64)
        -> Result<Self::Record, ParserError>;
}

pub fn read_table<P: TableParser>(
    parser: &P,
    content: &str,
) -> Result<Vec<P::Record>, ParserError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(parser.delimiter())
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    let mut record = StringRecord::new();
    loop {
        let more = reader
            .read_record(&mut record)
            .map_err(|source| ParserError::Csv {
                parser: parser.name(),
                source,
            })?;
        if !more {
            break;
        }
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(records.len() as u64 + 1);
        records.push(parser.parse_record(&record, line)?);
    }

    if records.is_empty() {
        return Err(ParserError::EmptyData {
            parser: parser.name(),
        });
    }

    Ok(records)
}

pub fn parse_ratings(content: &str) -> Result<RatingsTable, ParserError> {
    let records = read_table(&RatingsParser, content)?;
    Ok(RatingsTable { records })
}

pub fn parse_movies(content: &str) -> Result<MovieTable, ParserError> {
    let records = read_table(&MoviesParser, content)?;
    Ok(MovieTable { records })
}

pub fn load_ratings(path: &Path, encoding: InputEncoding) -> Result<RatingsTable, ParserError> {
    let content = read_decoded(RatingsParser::NAME, path, encoding)?;
    let table = parse_ratings(&content)?;
    debug!(path = %path.display(), rows = table.len(), "loaded ratings");
    Ok(table)
}

pub fn load_movies(path: &Path, encoding: InputEncoding) -> Result<MovieTable, ParserError> {
    let content = read_decoded(MoviesParser::NAME, path, encoding)?;
    let table = parse_movies(&content)?;
    debug!(path = %path.display(), rows = table.len(), "loaded movies");
    Ok(table)
}

fn read_decoded(
    parser: &'static str,
    path: &Path,
    encoding: InputEncoding,
) -> Result<String, ParserError> {
    let bytes = fs::read(path).map_err(|source| ParserError::Io {
        parser,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(encoding.decode(parser, &bytes)?.into_owned())
}
