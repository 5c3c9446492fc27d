//! Test helpers for building stores and fixtures

use crate::models::Movie;
use crate::services::MovieService;

/// A store seeded with the three fixture movies (ids 1, 8, 16)
pub fn create_test_service() -> MovieService {
    MovieService::new(fixtures::seed())
}

/// Test fixtures for common test data
pub mod fixtures {
    use super::Movie;

    pub fn shawshank() -> Movie {
        Movie::new(1, "The Shawshank Redemption", 1994).with_imdb_id("tt0111161")
    }

    pub fn interstellar() -> Movie {
        Movie::new(8, "Interstellar", 2014).with_imdb_id("tt0816692")
    }

    pub fn monkey_man() -> Movie {
        Movie::new(16, "Monkey Man", 2024).with_imdb_id("tt9214772")
    }

    pub fn seed() -> Vec<Movie> {
        vec![shawshank(), interstellar(), monkey_man()]
    }

    pub fn new_movie() -> Movie {
        let mut movie = Movie::new(13, "Mission: Impossible - The Final Reckoning", 2025)
            .with_imdb_id("tt9603208");
        movie.runtime = Some("2:52:54".to_string());
        movie.rating = Some("PG-13".to_string());
        movie.genres = Some(vec![
            "Action".to_string(),
            "Adventure".to_string(),
            "Thriller".to_string(),
        ]);
        movie
    }
}
