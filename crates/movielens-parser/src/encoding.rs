use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::ParserError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Character encoding applied to the raw input bytes before field splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum InputEncoding {
    /// ISO-8859-1. Every byte maps to a code point, so decoding never fails.
    #[default]
    Latin1,
    Windows1252,
    Utf8,
}

impl InputEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEncoding::Latin1 => "latin-1",
            InputEncoding::Windows1252 => "windows-1252",
            InputEncoding::Utf8 => "utf-8",
        }
    }

    pub fn decode<'a>(
        &self,
        parser: &'static str,
        bytes: &'a [u8],
    ) -> Result<Cow<'a, str>, ParserError> {
        match self {
            InputEncoding::Latin1 => Ok(encoding_rs::mem::decode_latin1(bytes)),
            InputEncoding::Windows1252 => {
                let (text, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes);
                Ok(text)
            }
            InputEncoding::Utf8 => {
                let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                std::str::from_utf8(bytes)
                    .map(Cow::Borrowed)
                    .map_err(|err| ParserError::Decode {
                        parser,
                        encoding: self.as_str(),
                        message: err.to_string(),
                    })
            }
        }
    }
}

impl fmt::Display for InputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for InputEncoding {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Ok(InputEncoding::Latin1),
            "windows-1252" | "cp1252" => Ok(InputEncoding::Windows1252),
            "utf-8" | "utf8" => Ok(InputEncoding::Utf8),
            other => Err(format!("unsupported encoding '{other}'")),
        }
    }
}

impl TryFrom<String> for InputEncoding {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        InputEncoding::try_from(value.as_str())
    }
}

impl FromStr for InputEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputEncoding::try_from(s)
    }
}
