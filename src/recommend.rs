use crate::model::{Movie, Population, User};
use log::debug;

const MAX_SIMILARITY_PICKS: usize = 5;
const RATING_TOLERANCE: u8 = 2;

/// The closed set of recommendation strategies. Callers pick one per call;
/// both read the population, neither mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommender {
    /// The user's own rated movies whose genre matches a preference.
    Genre,
    /// Rated movies of the most similar other user.
    SimilarUsers,
}

impl Recommender {
    pub fn recommend(self, user: &User, population: &Population) -> Vec<Movie> {
        match self {
            Recommender::Genre => by_preferred_genres(user),
            Recommender::SimilarUsers => by_closest_user(user, population),
        }
    }
}

fn by_preferred_genres(user: &User) -> Vec<Movie> {
    let mut picks: Vec<Movie> = user
        .rated_movies()
        .filter(|movie| match &movie.genre {
            Some(genre) => user.preferences.iter().any(|preference| preference == genre),
            None => false,
        })
        .cloned()
        .collect();
    // Stable sort: equal ratings keep their title order.
    picks.sort_by(|a, b| b.rating.cmp(&a.rating));
    picks
}

/// Titles rated by both sides whose ratings differ by at most
/// `RATING_TOLERANCE`.
fn similarity(user: &User, other: &User) -> usize {
    user.movies
        .iter()
        .filter(|(title, movie)| {
            match (movie.rating, other.movies.get(*title).and_then(|m| m.rating)) {
                (Some(own), Some(theirs)) => own.abs_diff(theirs) <= RATING_TOLERANCE,
                _ => false,
            }
        })
        .count()
}

fn by_closest_user(user: &User, population: &Population) -> Vec<Movie> {
    let mut best: Option<(&User, usize)> = None;
    for other in population.values() {
        if other.username == user.username {
            continue;
        }
        let score = similarity(user, other);
        // Only a strictly higher score replaces the current best, so ties
        // go to the first user in population order.
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((other, score)),
        }
    }
    let (neighbor, score) = match best {
        Some(found) => found,
        None => return Vec::new(),
    };
    debug!(
        "closest user to {} is {} (score {})",
        user.username, neighbor.username, score
    );
    // A candidate must carry a rating; titles the user has already rated
    // are excluded, while unknown or unrated-by-the-user titles qualify.
    let mut picks: Vec<Movie> = neighbor
        .movies
        .values()
        .filter(|movie| movie.rating.is_some())
        .filter(|movie| match user.movies.get(&movie.title) {
            None => true,
            Some(own) => own.rating.is_none(),
        })
        .cloned()
        .collect();
    picks.sort_by(|a, b| b.rating.cmp(&a.rating));
    picks.truncate(MAX_SIMILARITY_PICKS);
    picks
}
