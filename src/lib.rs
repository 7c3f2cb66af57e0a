mod model;
mod recommend;
mod stats;
mod store;

pub use model::{Movie, Population, RatingError, User};
pub use recommend::Recommender;
pub use stats::{average_rating, highest_rated, lowest_rated};
pub use store::{PopulationStore, StoreError};
