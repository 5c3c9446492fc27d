use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A movie record as held in the in-memory collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,

    // Only required on create; seeded records may lack them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    // Descriptive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>, // "h:mm:ss"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>, // MPAA
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,

    /// Fields the client sent that the model does not name, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Movie {
    pub fn new(id: i64, title: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            imdb_id: None,
            title: Some(title.into()),
            year: Some(year),
            runtime: None,
            rating: None,
            poster: None,
            genres: None,
            extra: Map::new(),
        }
    }

    pub fn with_imdb_id(mut self, imdb_id: impl Into<String>) -> Self {
        self.imdb_id = Some(imdb_id.into());
        self
    }
}
