//! Seed data loaded into the collection at process start

use std::path::Path;

use crate::error::{Error, Result};
use crate::models::Movie;

const BUILTIN_SEED: &str = include_str!("movies.json");

/// The movie list shipped with the crate
pub fn builtin() -> Result<Vec<Movie>> {
    parse(BUILTIN_SEED).map_err(|e| Error::Seed(format!("built-in seed: {}", e)))
}

/// Reads a JSON array of movies from `path`
pub fn from_file(path: &Path) -> Result<Vec<Movie>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| Error::Seed(format!("{}: {}", path.display(), e)))?;
    parse(&raw).map_err(|e| Error::Seed(format!("{}: {}", path.display(), e)))
}

/// Uses `path` when given, the built-in list otherwise
pub fn load(path: Option<&Path>) -> Result<Vec<Movie>> {
    let movies = match path {
        Some(path) => from_file(path)?,
        None => builtin()?,
    };
    tracing::debug!("Loaded {} seed movies", movies.len());
    Ok(movies)
}

fn parse(raw: &str) -> std::result::Result<Vec<Movie>, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_seed_parses() {
        let movies = builtin().unwrap();
        assert_eq!(movies.len(), 15);

        let monkey_man = movies.iter().find(|m| m.id == 16).unwrap();
        assert_eq!(monkey_man.title.as_deref(), Some("Monkey Man"));
        assert_eq!(monkey_man.imdb_id.as_deref(), Some("tt9214772"));
        assert_eq!(monkey_man.year, Some(2024));

        assert!(movies.iter().any(|m| m.id == 8));
        assert!(movies.iter().all(|m| m.id != 13));
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let movies = builtin().unwrap();
        let mut ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), movies.len());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "title": "Alien", "year": 1979, "imdb_id": "tt0078748"}}]"#
        )
        .unwrap();

        let movies = load(Some(file.path())).unwrap();
        assert_eq!(movies, vec![Movie::new(1, "Alien", 1979).with_imdb_id("tt0078748")]);
    }

    #[test]
    fn test_records_with_only_an_id_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 1, "imdb_id": "tt1"}}, {{"id": 2}}]"#).unwrap();

        let movies = load(Some(file.path())).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].imdb_id.as_deref(), Some("tt1"));
        assert!(movies[0].title.is_none());
        assert!(movies[1].year.is_none());
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(Some(dir.path().join("nope.json").as_path()));
        match result {
            Err(Error::Seed(msg)) => assert!(msg.contains("nope.json")),
            other => panic!("Expected Seed error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id": 1}}"#).unwrap();
        assert!(matches!(load(Some(file.path())), Err(Error::Seed(_))));
    }
}
