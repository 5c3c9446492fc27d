use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::models::Movie;

/// Owns the in-memory movie collection.
///
/// Order is insertion order. The lock makes each call atomic on its own;
/// nothing orders calls coming from different requests.
pub struct MovieService {
    movies: RwLock<Vec<Movie>>,
}

impl MovieService {
    pub fn new(seed: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(seed),
        }
    }

    pub async fn list(&self) -> Vec<Movie> {
        self.movies.read().await.clone()
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Movie> {
        self.movies
            .read()
            .await
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    /// Appends `movie` as given; ids are client-assigned and not checked for
    /// duplicates.
    pub async fn create(&self, movie: Movie) -> Movie {
        let mut movies = self.movies.write().await;
        movies.push(movie.clone());
        tracing::info!(id = movie.id, total = movies.len(), "Movie added");
        movie
    }

    /// Removes the first record with `id` and returns it.
    pub async fn delete(&self, id: i64) -> Result<Movie> {
        let mut movies = self.movies.write().await;
        let position = movies
            .iter()
            .position(|movie| movie.id == id)
            .ok_or(Error::NotFound)?;
        let removed = movies.remove(position);
        tracing::info!(id, total = movies.len(), "Movie deleted");
        Ok(removed)
    }

    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}
