//! Candidate records and response parsing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AutocompleteError, Result};

/// One selectable autocomplete result.
///
/// A candidate is an opaque map of field names to JSON values. The controller
/// reads at most two fields from it, the primary and secondary labels, and only
/// when the built-in row renderer is in use.
///
/// ```
/// use horizon_autocomplete::Candidate;
///
/// let city = Candidate::new()
///     .with("title", "London")
///     .with("subtitle", "United Kingdom")
///     .with("population", 8_982_000);
///
/// assert_eq!(city.text("title").as_deref(), Some("London"));
/// assert_eq!(city.text("population").as_deref(), Some("8982000"));
/// assert_eq!(city.text("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate {
    fields: Map<String, Value>,
}

impl Candidate {
    /// Create an empty candidate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a candidate from a JSON object.
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Builder-style field setter.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Set a field.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// The raw value of a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// A field rendered as display text.
    ///
    /// Strings are returned as-is, numbers and booleans are formatted. Null,
    /// missing, array and object values have no text.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.fields.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// All fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for Candidate {
    fn from(fields: Map<String, Value>) -> Self {
        Self::from_map(fields)
    }
}

/// Decode a response body as a JSON array of candidate objects.
///
/// A `null` body decodes to no candidates.
pub fn try_parse_candidates(body: &str) -> Result<Vec<Candidate>> {
    let parsed: Option<Vec<Candidate>> =
        serde_json::from_str(body).map_err(|e| AutocompleteError::Parse(e.to_string()))?;
    Ok(parsed.unwrap_or_default())
}

/// Decode a response body as a JSON array of candidate objects, treating any
/// failure as an empty result set.
///
/// ```
/// use horizon_autocomplete::parse_candidates;
///
/// assert_eq!(parse_candidates(r#"[{"title":"Lyon"}]"#).len(), 1);
/// assert!(parse_candidates("null").is_empty());
/// assert!(parse_candidates("<html>").is_empty());
/// ```
pub fn parse_candidates(body: &str) -> Vec<Candidate> {
    try_parse_candidates(body).unwrap_or_default()
}
