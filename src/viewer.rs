//! View orchestrator — owns all mutable state and applies user events.

use crate::error::ParseError;
use crate::model::Document;
use crate::parser;
use crate::state::ExpandState;
use crate::tree::{self, Screen};
use crate::view::View;
use std::fmt;

/// Which tree the page shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ViewMode {
    #[default]
    Endpoints,
    Models,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Endpoints => "Endpoints",
            ViewMode::Models => "Models",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A discrete user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The raw text in the input control changed
    InputChanged(String),
    TogglePath(String),
    ToggleSchema(String),
    SelectMode(ViewMode),
}

/// Top-level viewer state.
///
/// The document is replaced wholesale on every successful parse and cleared
/// on every failed one. Expand state survives both and mode switches.
#[derive(Debug, Default)]
pub struct Viewer {
    input: String,
    document: Option<Document>,
    error: Option<ParseError>,
    mode: ViewMode,
    paths: ExpandState,
    schemas: ExpandState,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, event: Event) {
        tracing::debug!(?event, "dispatch");
        match event {
            Event::InputChanged(text) => {
                match parser::parse(&text) {
                    Ok(doc) => {
                        self.document = Some(doc);
                        self.error = None;
                    }
                    Err(err) => {
                        self.document = None;
                        self.error = Some(err);
                    }
                }
                self.input = text;
            }
            Event::TogglePath(path) => {
                let expanded = self.paths.toggle(&path);
                tracing::trace!(%path, expanded, "toggled path");
            }
            Event::ToggleSchema(name) => {
                let expanded = self.schemas.toggle(&name);
                tracing::trace!(%name, expanded, "toggled schema");
            }
            Event::SelectMode(mode) => self.mode = mode,
        }
    }

    /// Expand every node of both trees that is currently collapsed.
    pub fn expand_all(&mut self) {
        let Some(doc) = self.document.as_ref() else {
            return;
        };
        let paths: Vec<String> = doc
            .paths
            .iter()
            .flatten()
            .map(|(path, _)| path.clone())
            .filter(|path| !self.paths.is_expanded(path))
            .collect();
        let schemas: Vec<String> = doc
            .schemas()
            .into_iter()
            .flatten()
            .map(|(name, _)| name.clone())
            .filter(|name| !self.schemas.is_expanded(name))
            .collect();

        for path in paths {
            self.dispatch(Event::TogglePath(path));
        }
        for name in schemas {
            self.dispatch(Event::ToggleSchema(name));
        }
    }

    pub fn render(&self) -> View {
        tree::page(&Screen {
            input: &self.input,
            document: self.document.as_ref(),
            error: self.error.as_ref(),
            mode: self.mode,
            paths: &self.paths,
            schemas: &self.schemas,
        })
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn paths(&self) -> &ExpandState {
        &self.paths
    }

    pub fn schemas(&self) -> &ExpandState {
        &self.schemas
    }
}
