//! JSON pretty-printing helper for test fixtures

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Invalid JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for FixtureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Re-indent a JSON document with four-space indentation.
///
/// The input must be a complete JSON document; anything else fails with
/// [`FixtureError::Json`].
pub fn pretty_print_json(input: &str) -> Result<String, FixtureError> {
    let value: serde_json::Value = serde_json::from_str(input)?;

    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(out).map_err(|e| FixtureError::Json(e.to_string()))
}
