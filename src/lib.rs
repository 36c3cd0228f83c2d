//! apiview — render OpenAPI JSON descriptions as a collapsible tree.
//!
//! The pipeline is:
//!
//! 1. [`parser::parse`] turns raw text into a [`model::Document`]
//! 2. [`viewer::Viewer`] holds the document, the parse error and the
//!    expand/collapse state, and applies [`viewer::Event`]s
//! 3. [`tree`] walks the document into a [`view::View`]
//! 4. a [`render::Renderer`] turns the view into text, HTML, Markdown or JSON

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod session;
pub mod state;
pub mod tree;
pub mod view;
pub mod viewer;

pub use error::{Error, ParseError, Result};
pub use viewer::{Event, ViewMode, Viewer};
