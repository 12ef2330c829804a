use serde::{Deserialize, Serialize};

/// Body of `GET /search-recommendations/suggest`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SuggestionsPayload {
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Body of `POST /search-recommendations/record`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordPayload<'a> {
    pub term: &'a str,
}
