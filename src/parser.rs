//! Document parser — raw text to [`Document`].

use crate::error::ParseError;
use crate::model::Document;
use serde::Deserialize;
use serde_json::Value;

/// Parse raw text into a Document.
///
/// Any syntactically valid JSON is accepted; nothing is validated against
/// the OpenAPI schema. A root that is not an object yields an empty Document.
pub fn parse(text: &str) -> Result<Document, ParseError> {
    let raw: Value = serde_json::from_str(text).map_err(|err| {
        let err = ParseError::from(err);
        tracing::debug!(line = err.line, column = err.column, "input is not valid JSON");
        err
    })?;

    let mut doc = match Document::deserialize(&raw) {
        Ok(doc) => doc,
        Err(err) => {
            tracing::debug!(%err, "document root is not an object");
            Document::default()
        }
    };
    doc.raw = raw;

    tracing::debug!(
        paths = doc.paths.as_ref().map_or(0, |p| p.len()),
        schemas = doc.schemas().map_or(0, |s| s.len()),
        "parsed document"
    );
    Ok(doc)
}
