use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// All registered users keyed by username. Passed explicitly to every
/// operation that needs it; key order makes iteration deterministic.
pub type Population = BTreeMap<String, User>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("rating must be between 1 and 10, got {0}")]
pub struct RatingError(pub u8);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub rating: Option<u8>,
    pub genre: Option<String>,
}

impl Movie {
    pub fn new<S: Into<String>>(title: S) -> Movie {
        Movie {
            title: title.into(),
            rating: None,
            genre: None,
        }
    }

    /// Accepts 1..=10; anything else is rejected and the prior rating is
    /// left untouched.
    pub fn set_rating(&mut self, rating: u8) -> Result<(), RatingError> {
        if (1..=10).contains(&rating) {
            self.rating = Some(rating);
            Ok(())
        } else {
            Err(RatingError(rating))
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.rating {
            Some(rating) => write!(f, "{}: {}", self.title, rating),
            None => write!(f, "{}: No rating", self.title),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub movies: BTreeMap<String, Movie>,
    pub preferences: Vec<String>,
}

impl User {
    pub fn new<S: Into<String>>(username: S) -> User {
        User {
            username: username.into(),
            movies: BTreeMap::new(),
            preferences: Vec::new(),
        }
    }

    /// Idempotent: a known title keeps its rating and genre. Empty titles
    /// are ignored.
    pub fn add_movie(&mut self, title: &str) {
        if title.is_empty() {
            return;
        }
        if !self.movies.contains_key(title) {
            self.movies.insert(title.to_owned(), Movie::new(title));
        }
    }

    /// Unknown titles are a no-op, never auto-created. A known title takes
    /// the rating through `Movie::set_rating` and its validation.
    pub fn rate_movie(&mut self, title: &str, rating: u8) -> Result<(), RatingError> {
        match self.movies.get_mut(title) {
            Some(movie) => movie.set_rating(rating),
            None => Ok(()),
        }
    }

    /// Unknown titles are a no-op; otherwise the genre is overwritten.
    pub fn set_genre(&mut self, title: &str, genre: &str) {
        if let Some(movie) = self.movies.get_mut(title) {
            movie.genre = Some(genre.to_owned());
        }
    }

    /// Replaces the preference list with the trimmed, non-empty subset of
    /// the input, in input order.
    pub fn set_preferences<I>(&mut self, genres: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.preferences = genres
            .into_iter()
            .map(|genre| genre.trim().to_owned())
            .filter(|genre| !genre.is_empty())
            .collect();
    }

    /// Owned movies with a rating, in title order.
    pub fn rated_movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values().filter(|movie| movie.rating.is_some())
    }
}
