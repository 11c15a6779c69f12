use serde_json::{Map, Value};

/// One user review collected from the upstream reviews endpoint.
///
/// `text` is always the tag-stripped, whitespace-collapsed form of the
/// source `reviewText`, and is never empty. Source-side defaults
/// (`helpful = 0`, `verified = false`) are applied when the review is built,
/// so `None` here means the upstream sent an explicit `null` or a value of the
/// wrong type.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub text: String,
    pub rating: Option<f64>,
    /// Submission date exactly as the upstream formats it; never parsed.
    pub date: Option<String>,
    pub author: Option<String>,
    pub helpful: Option<i64>,
    pub verified: Option<bool>,
    /// The untouched upstream item, kept for traceability.
    pub raw: Map<String, Value>,
}

impl Review {
    /// Builds a review carrying only its text, with source defaults applied.
    #[cfg(test)]
    pub(crate) fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rating: None,
            date: None,
            author: None,
            helpful: Some(0),
            verified: Some(false),
            raw: Map::new(),
        }
    }
}
