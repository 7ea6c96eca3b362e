use movielens_parser::{Movie, MovieTable, Rating, RatingsTable};
use tracing::warn;

use crate::config::DuplicatePolicy;
use crate::error::{PipelineError, Result};

#[derive(Debug, Clone, Copy)]
pub struct JoinedRow<'a> {
    pub rating: &'a Rating,
    pub movie: &'a Movie,
}

#[derive(Debug)]
pub struct JoinOutcome<'a> {
    pub rows: Vec<JoinedRow<'a>>,
    /// Ratings whose movie_id has no row in the movie table.
    pub dropped_ratings: usize,
}

/// Inner join on `movie_id`. Output follows ratings order; under
/// [`DuplicatePolicy::FanOut`] repeated movie rows follow movie file order.
pub fn inner_join<'a>(
    ratings: &'a RatingsTable,
    movies: &'a MovieTable,
    policy: DuplicatePolicy,
) -> Result<JoinOutcome<'a>> {
    if policy == DuplicatePolicy::Reject {
        if let Some(dup) = movies.first_duplicate() {
            return Err(PipelineError::DuplicateMovie {
                movie_id: dup.movie_id,
                first_row: dup.first_row,
                row: dup.row,
            });
        }
    }

    let index = movies.index_by_id();
    let mut rows = Vec::with_capacity(ratings.len());
    let mut dropped_ratings = 0;

    for rating in &ratings.records {
        match index.get(&rating.movie_id) {
            Some(positions) => {
                for position in positions {
                    rows.push(JoinedRow {
                        rating,
                        movie: &movies.records[*position],
                    });
                }
            }
            None => dropped_ratings += 1,
        }
    }

    if dropped_ratings > 0 {
        warn!(
            dropped_ratings,
            total_ratings = ratings.len(),
            "ratings without a matching movie were dropped"
        );
    }

    Ok(JoinOutcome {
        rows,
        dropped_ratings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(user_id: u32, movie_id: u32) -> Rating {
        Rating {
            user_id,
            movie_id,
            rating: 4,
            timestamp: 0,
        }
    }

    fn movie(movie_id: u32, title: &str) -> Movie {
        Movie {
            movie_id,
            title: title.to_string(),
            release_date: None,
            video_release_date: None,
            imdb_url: None,
            genres: [false; 19],
        }
    }

    #[test]
    fn keeps_ratings_order_and_drops_unknown_movies() {
        let ratings = RatingsTable {
            records: vec![rating(1, 20), rating(2, 10), rating(3, 99), rating(4, 20)],
        };
        let movies = MovieTable {
            records: vec![movie(10, "Ten"), movie(20, "Twenty")],
        };

        let outcome = inner_join(&ratings, &movies, DuplicatePolicy::Reject).unwrap();

        let users: Vec<u32> = outcome.rows.iter().map(|row| row.rating.user_id).collect();
        let titles: Vec<&str> = outcome.rows.iter().map(|row| row.movie.title.as_str()).collect();
        assert_eq!(users, vec![1, 2, 4]);
        assert_eq!(titles, vec!["Twenty", "Ten", "Twenty"]);
        assert_eq!(outcome.dropped_ratings, 1);
    }

    #[test]
    fn reject_policy_fails_on_duplicate_movies() {
        let ratings = RatingsTable {
            records: vec![rating(1, 10)],
        };
        let movies = MovieTable {
            records: vec![movie(10, "Ten"), movie(11, "Eleven"), movie(10, "Ten again")],
        };

        let err = inner_join(&ratings, &movies, DuplicatePolicy::Reject).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::DuplicateMovie {
                movie_id: 10,
                first_row: 1,
                row: 3,
            }
        ));
    }

    #[test]
    fn fan_out_policy_emits_one_row_per_movie_row() {
        let ratings = RatingsTable {
            records: vec![rating(1, 10), rating(2, 11)],
        };
        let movies = MovieTable {
            records: vec![movie(10, "Ten"), movie(11, "Eleven"), movie(10, "Ten again")],
        };

        let outcome = inner_join(&ratings, &movies, DuplicatePolicy::FanOut).unwrap();

        let titles: Vec<&str> = outcome.rows.iter().map(|row| row.movie.title.as_str()).collect();
        assert_eq!(titles, vec!["Ten", "Ten again", "Eleven"]);
        assert_eq!(outcome.dropped_ratings, 0);
    }
}
