pub mod encoding;
pub mod errors;
pub mod formats;
pub mod model;
mod registry;

pub use encoding::InputEncoding;
pub use errors::ParserError;
pub use model::{DuplicateMovie, Genre, Movie, MovieTable, Rating, RatingsTable};
pub use registry::{load_movies, load_ratings, parse_movies, parse_ratings, read_table, TableParser};
