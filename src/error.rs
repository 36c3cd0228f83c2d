//! Error types.

use thiserror::Error;

/// Input text is not syntactically valid JSON.
///
/// The only failure the viewer ever surfaces to the user. `message` is the
/// underlying parser's description of the syntax problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid JSON format: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Library-level errors outside the viewer itself.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("unknown format: {0}. Use text, html, markdown, or json")]
    UnknownFormat(String),

    #[error("failed to serialize view: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
