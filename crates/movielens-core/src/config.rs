use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono_tz::Tz;
use movielens_parser::InputEncoding;
use serde::Deserialize;

use crate::error::{PipelineError, Result};

pub const DEFAULT_RATINGS_PATH: &str = "data/movielens/ml-100k/u.data";
pub const DEFAULT_MOVIES_PATH: &str = "data/movielens/ml-100k/u.item";
pub const DEFAULT_OUTPUT_PATH: &str = "data/movielens/cleaned_ratings.csv";

/// What to do when the movie table repeats a `movie_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Fail the run before anything is written.
    #[default]
    Reject,
    /// Emit one merged row per matching movie row.
    FanOut,
}

impl DuplicatePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicatePolicy::Reject => "reject",
            DuplicatePolicy::FanOut => "fan-out",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(DuplicatePolicy::Reject),
            "fan-out" | "fanout" => Ok(DuplicatePolicy::FanOut),
            other => Err(format!("unknown duplicate policy '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub ratings_path: PathBuf,
    pub movies_path: PathBuf,
    pub output_path: PathBuf,
    pub encoding: InputEncoding,
    pub timezone: Tz,
    pub duplicate_movies: DuplicatePolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            ratings_path: PathBuf::from(DEFAULT_RATINGS_PATH),
            movies_path: PathBuf::from(DEFAULT_MOVIES_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            encoding: InputEncoding::default(),
            timezone: Tz::UTC,
            duplicate_movies: DuplicatePolicy::default(),
        }
    }
}

/// Optional TOML overrides. Unset keys keep the current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub ratings_path: Option<PathBuf>,
    pub movies_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub encoding: Option<InputEncoding>,
    pub timezone: Option<String>,
    pub duplicate_movies: Option<DuplicatePolicy>,
}

impl ConfigFile {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn apply(self, config: &mut PipelineConfig) -> Result<()> {
        if let Some(path) = self.ratings_path {
            config.ratings_path = path;
        }
        if let Some(path) = self.movies_path {
            config.movies_path = path;
        }
        if let Some(path) = self.output_path {
            config.output_path = path;
        }
        if let Some(encoding) = self.encoding {
            config.encoding = encoding;
        }
        if let Some(name) = self.timezone {
            config.timezone = parse_timezone(&name)?;
        }
        if let Some(policy) = self.duplicate_movies {
            config.duplicate_movies = policy;
        }
        Ok(())
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|err| PipelineError::Config(format!("invalid timezone '{name}': {err}")))
}
