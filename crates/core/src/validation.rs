//! Shape rules applied to route parameters and request bodies before a
//! handler sees them.

use chrono::Datelike;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::models::Movie;

/// First year a motion picture could plausibly carry
pub const MIN_YEAR: i64 = 1888;

/// How far past the current year an announced release may be dated
pub const MAX_YEARS_AHEAD: i64 = 10;

const OPTIONAL_STRING_FIELDS: [&str; 4] = ["imdb_id", "runtime", "rating", "poster"];

/// Parses a raw `:id` path segment into a positive integer
pub fn validate_id(raw: &str) -> Result<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::InvalidId(raw.to_string())),
    }
}

/// Checks a create body against the creation invariant and returns the
/// typed record, leaving every field the client sent in place.
pub fn validate_movie_body(body: Value) -> Result<Movie> {
    let object = match body.as_object() {
        Some(object) => object,
        None => {
            return Err(Error::MalformedBody(
                "request body must be a JSON object".to_string(),
            ));
        }
    };

    check_id(object)?;
    check_title(object)?;
    check_year(object)?;

    for field in OPTIONAL_STRING_FIELDS {
        if let Some(value) = object.get(field)
            && !value.is_string()
        {
            return Err(Error::validation(
                field,
                format!("{} must be a string", field),
                value.clone(),
            ));
        }
    }

    if let Some(genres) = object.get("genres") {
        let all_strings = genres
            .as_array()
            .is_some_and(|items| items.iter().all(Value::is_string));
        if !all_strings {
            return Err(Error::validation(
                "genres",
                "genres must be an array of strings",
                genres.clone(),
            ));
        }
    }

    serde_json::from_value(body).map_err(|e| Error::MalformedBody(e.to_string()))
}

fn field_value(object: &Map<String, Value>, field: &str) -> Value {
    object.get(field).cloned().unwrap_or(Value::Null)
}

fn check_id(object: &Map<String, Value>) -> Result<()> {
    match object.get("id").and_then(Value::as_i64) {
        Some(id) if id > 0 => Ok(()),
        _ => Err(Error::validation(
            "id",
            "id must be a positive integer",
            field_value(object, "id"),
        )),
    }
}

fn check_title(object: &Map<String, Value>) -> Result<()> {
    match object.get("title").and_then(Value::as_str) {
        Some(title) if !title.trim().is_empty() => Ok(()),
        _ => Err(Error::validation(
            "title",
            "title must be a non-empty string",
            field_value(object, "title"),
        )),
    }
}

fn check_year(object: &Map<String, Value>) -> Result<()> {
    let max_year = i64::from(chrono::Utc::now().year()) + MAX_YEARS_AHEAD;

    match object.get("year").and_then(Value::as_i64) {
        Some(year) if (MIN_YEAR..=max_year).contains(&year) => Ok(()),
        _ => Err(Error::validation(
            "year",
            format!("year must be an integer between {} and {}", MIN_YEAR, max_year),
            field_value(object, "year"),
        )),
    }
}
