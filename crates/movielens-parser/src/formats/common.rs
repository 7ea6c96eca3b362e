use std::fmt::Display;
use std::str::FromStr;

use csv::StringRecord;

use crate::errors::ParserError;

pub(crate) fn require_field<'r>(
    parser: &'static str,
    record: &'r StringRecord,
    index: usize,
    line: u64,
) -> Result<&'r str, ParserError> {
    record.get(index).ok_or_else(|| ParserError::FieldCount {
        parser,
        line,
        expected: index + 1,
        found: record.len(),
    })
}

pub(crate) fn parse_required<T>(
    parser: &'static str,
    value: &str,
    line: u64,
    column: &str,
) -> Result<T, ParserError>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|err| ParserError::DataRow {
            parser,
            line,
            message: format!("failed to parse column '{column}' from '{}': {err}", value.trim()),
        })
}

pub(crate) fn parse_flag(
    parser: &'static str,
    value: &str,
    line: u64,
    column: &str,
) -> Result<bool, ParserError> {
    match value.trim() {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(ParserError::DataRow {
            parser,
            line,
            message: format!("column '{column}' must be 0 or 1, found '{other}'"),
        }),
    }
}

pub(crate) fn clean_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
