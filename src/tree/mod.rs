//! Document traversal — builds the page [`View`] from viewer state.
//!
//! Everything here is a pure function of its inputs; the viewer owns the
//! state and calls [`page`] after every event.

pub mod endpoints;
pub mod models;
pub mod sections;

use crate::error::ParseError;
use crate::model::{Document, Info};
use crate::state::ExpandState;
use crate::view::{Node, Tab, TextStyle, View};
use crate::viewer::ViewMode;

pub const TITLE: &str = "OpenAPI Analyzer";
pub const PLACEHOLDER: &str = "Paste your OpenAPI JSON specification here...";

/// Borrowed snapshot of everything the page depends on.
#[derive(Debug, Clone, Copy)]
pub struct Screen<'a> {
    pub input: &'a str,
    pub document: Option<&'a Document>,
    pub error: Option<&'a ParseError>,
    pub mode: ViewMode,
    pub paths: &'a ExpandState,
    pub schemas: &'a ExpandState,
}

pub fn page(screen: &Screen) -> View {
    let mut nodes = vec![
        Node::heading(1, TITLE),
        Node::Input {
            placeholder: PLACEHOLDER.to_string(),
            value: screen.input.to_string(),
        },
    ];

    if let Some(err) = screen.error {
        nodes.push(Node::Alert {
            message: err.to_string(),
        });
    }

    if let Some(doc) = screen.document {
        nodes.push(Node::heading(2, "API Information"));
        nodes.push(info(doc.info.as_ref()));
        nodes.push(tabs(screen.mode));
        match screen.mode {
            ViewMode::Endpoints => nodes.extend(endpoints::render(doc, screen.paths)),
            ViewMode::Models => nodes.extend(models::render(doc, screen.schemas)),
        }
    }

    View { nodes }
}

fn info(info: Option<&Info>) -> Node {
    let mut children = Vec::new();
    if let Some(info) = info {
        if let Some(ref title) = info.title {
            children.push(Node::heading(3, title));
        }
        if let Some(ref desc) = info.description {
            children.push(Node::text(desc, TextStyle::Muted));
        }
        if let Some(ref version) = info.version {
            children.push(Node::text(format!("Version: {}", version), TextStyle::Muted));
        }
    }
    Node::Group {
        label: None,
        children,
    }
}

fn tabs(active: ViewMode) -> Node {
    let tabs = [ViewMode::Endpoints, ViewMode::Models]
        .into_iter()
        .map(|mode| Tab {
            label: mode.label().to_string(),
            active: mode == active,
        })
        .collect();
    Node::Tabs { tabs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn screen<'a>(
        doc: Option<&'a Document>,
        error: Option<&'a ParseError>,
        state: &'a ExpandState,
    ) -> Screen<'a> {
        Screen {
            input: "",
            document: doc,
            error,
            mode: ViewMode::Endpoints,
            paths: state,
            schemas: state,
        }
    }

    #[test]
    fn empty_page_has_title_and_input() {
        let state = ExpandState::new();
        let view = page(&screen(None, None, &state));
        assert_eq!(view.nodes.len(), 2);
        assert_eq!(view.nodes[0], Node::heading(1, TITLE));
        assert!(matches!(view.nodes[1], Node::Input { .. }));
    }

    #[test]
    fn error_renders_alert_without_document() {
        let state = ExpandState::new();
        let err = parse("{").unwrap_err();
        let view = page(&screen(None, Some(&err), &state));
        let alert = view.nodes.iter().find_map(|n| match n {
            Node::Alert { message } => Some(message.clone()),
            _ => None,
        });
        assert!(alert.unwrap().starts_with("Invalid JSON format: "));
        assert!(!view.text().contains("API Information"));
    }

    #[test]
    fn info_fields_are_each_optional() {
        let state = ExpandState::new();
        let doc = parse(r#"{"info": {"title": "Pets", "version": "2.1"}}"#).unwrap();
        let text = page(&screen(Some(&doc), None, &state)).text();
        assert!(text.contains("API Information\nPets\nVersion: 2.1"));

        let bare = parse("{}").unwrap();
        let text = page(&screen(Some(&bare), None, &state)).text();
        assert!(text.contains("API Information\nEndpoints"));
        assert!(!text.contains("Version:"));
    }

    #[test]
    fn tabs_mark_active_mode() {
        let state = ExpandState::new();
        let doc = parse("{}").unwrap();
        let mut s = screen(Some(&doc), None, &state);
        s.mode = ViewMode::Models;
        let view = page(&s);
        let tabs = view
            .nodes
            .iter()
            .find_map(|n| match n {
                Node::Tabs { tabs } => Some(tabs.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(
            tabs,
            [
                Tab {
                    label: "Endpoints".to_string(),
                    active: false
                },
                Tab {
                    label: "Models".to_string(),
                    active: true
                },
            ]
        );
        assert_eq!(view.nodes.last(), Some(&Node::heading(2, "Models")));
    }
}
