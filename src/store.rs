use crate::model::{Movie, Population, User};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

const USERS: &[u8] = b"users";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sled::Error),
    #[error("malformed user record: {0}")]
    Record(#[from] serde_json::Error),
    #[error("username key is not valid utf-8: {0}")]
    Key(#[from] std::string::FromUtf8Error),
}

/// One user's persisted value. The username is the tree key and the title
/// is the movie-map key, so neither is embedded in the value.
#[derive(Serialize, Deserialize)]
struct UserRecord {
    movies: BTreeMap<String, MovieRecord>,
    preferences: Vec<String>,
}

#[derive(Serialize, Deserialize)]
struct MovieRecord {
    #[serde(default)]
    rating: Option<u8>,
    #[serde(default)]
    genre: Option<String>,
}

impl UserRecord {
    fn from_user(user: &User) -> UserRecord {
        UserRecord {
            movies: user
                .movies
                .iter()
                .map(|(title, movie)| {
                    let record = MovieRecord {
                        rating: movie.rating,
                        genre: movie.genre.clone(),
                    };
                    (title.clone(), record)
                })
                .collect(),
            preferences: user.preferences.clone(),
        }
    }

    fn into_user(self, username: String) -> User {
        let mut user = User::new(username);
        user.movies = self
            .movies
            .into_iter()
            .map(|(title, record)| {
                let movie = Movie {
                    title: title.clone(),
                    rating: record.rating,
                    genre: record.genre,
                };
                (title, movie)
            })
            .collect();
        user.preferences = self.preferences;
        user
    }
}

pub trait PopulationStore {
    type Error;
    fn save_population(&self, population: &Population) -> Result<(), Self::Error>;
    fn load_population(&self) -> Result<Population, Self::Error>;
}

impl PopulationStore for sled::Db {
    type Error = StoreError;

    /// Writes the whole population, replacing whatever was stored before.
    fn save_population(&self, population: &Population) -> Result<(), StoreError> {
        let users = self.open_tree(USERS)?;
        users.clear()?;
        for (username, user) in population {
            let value = serde_json::to_vec(&UserRecord::from_user(user))?;
            users.insert(username.as_bytes(), value)?;
        }
        users.flush()?;
        debug!("saved {} users", population.len());
        Ok(())
    }

    /// A fresh target yields an empty population, not an error.
    fn load_population(&self) -> Result<Population, StoreError> {
        let users = self.open_tree(USERS)?;
        let mut population = Population::new();
        for entry in users.iter() {
            let (key, value) = entry?;
            let username = String::from_utf8(key.to_vec())?;
            let record: UserRecord = serde_json::from_slice(&value)?;
            population.insert(username.clone(), record.into_user(username));
        }
        debug!("loaded {} users", population.len());
        Ok(population)
    }
}
