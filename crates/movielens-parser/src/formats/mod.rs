mod common;
mod movies;
mod ratings;
pub mod schema;

pub use movies::MoviesParser;
pub use ratings::RatingsParser;

pub(crate) use common::{clean_optional, parse_flag, parse_required, require_field};
