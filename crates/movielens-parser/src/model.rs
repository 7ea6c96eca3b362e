use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Unknown,
    Action,
    Adventure,
    Animation,
    Children,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Fantasy,
    FilmNoir,
    Horror,
    Musical,
    Mystery,
    Romance,
    SciFi,
    Thriller,
    War,
    Western,
}

impl Genre {
    /// Genre flags in the order they appear in the movie file.
    pub const ALL: [Genre; 19] = [
        Genre::Unknown,
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Children,
        Genre::Comedy,
        Genre::Crime,
        Genre::Documentary,
        Genre::Drama,
        Genre::Fantasy,
        Genre::FilmNoir,
        Genre::Horror,
        Genre::Musical,
        Genre::Mystery,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
        Genre::War,
        Genre::Western,
    ];

    pub fn canonical_name(&self) -> &'static str {
        match self {
            Genre::Unknown => "unknown",
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Children => "Children's",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Documentary => "Documentary",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::FilmNoir => "Film-Noir",
            Genre::Horror => "Horror",
            Genre::Musical => "Musical",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
            Genre::War => "War",
            Genre::Western => "Western",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    pub user_id: u32,
    pub movie_id: u32,
    pub rating: u8,
    /// Seconds since 1970-01-01T00:00:00 UTC.
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub movie_id: u32,
    pub title: String,
    pub release_date: Option<String>,
    pub video_release_date: Option<String>,
    pub imdb_url: Option<String>,
    pub genres: [bool; 19],
}

impl Movie {
    pub fn has_genre(&self, genre: Genre) -> bool {
        self.genres[genre.index()]
    }
}

#[derive(Debug, Clone, Default)]
pub struct RatingsTable {
    pub records: Vec<Rating>,
}

impl RatingsTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A movie id seen on more than one row of the movie table. Rows are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateMovie {
    pub movie_id: u32,
    pub first_row: usize,
    pub row: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MovieTable {
    pub records: Vec<Movie>,
}

impl MovieTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row positions of every movie, keyed by movie id, in file order.
    pub fn index_by_id(&self) -> HashMap<u32, Vec<usize>> {
        let mut index: HashMap<u32, Vec<usize>> = HashMap::with_capacity(self.records.len());
        for (position, movie) in self.records.iter().enumerate() {
            index.entry(movie.movie_id).or_default().push(position);
        }
        index
    }

    pub fn first_duplicate(&self) -> Option<DuplicateMovie> {
        let mut seen: HashMap<u32, usize> = HashMap::with_capacity(self.records.len());
        for (position, movie) in self.records.iter().enumerate() {
            if let Some(first) = seen.insert(movie.movie_id, position) {
                return Some(DuplicateMovie {
                    movie_id: movie.movie_id,
                    first_row: first + 1,
                    row: position + 1,
                });
            }
        }
        None
    }
}
