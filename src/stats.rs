use crate::model::{Movie, User};

/// Mean of the rated subset, or `None` when nothing is rated.
pub fn average_rating(user: &User) -> Option<f64> {
    let mut sum = 0u32;
    let mut count = 0u32;
    for movie in user.rated_movies() {
        if let Some(rating) = movie.rating {
            sum += u32::from(rating);
            count += 1;
        }
    }
    if count == 0 {
        None
    } else {
        Some(f64::from(sum) / f64::from(count))
    }
}

/// Best-rated movie; ties go to the first in title order.
pub fn highest_rated(user: &User) -> Option<&Movie> {
    let mut best: Option<&Movie> = None;
    for movie in user.rated_movies() {
        match best {
            Some(top) if movie.rating <= top.rating => {}
            _ => best = Some(movie),
        }
    }
    best
}

/// Worst-rated movie; ties go to the first in title order.
pub fn lowest_rated(user: &User) -> Option<&Movie> {
    let mut worst: Option<&Movie> = None;
    for movie in user.rated_movies() {
        match worst {
            Some(bottom) if movie.rating >= bottom.rating => {}
            _ => worst = Some(movie),
        }
    }
    worst
}
