//! Terminal renderer — indented tree with optional ANSI colors.

use crate::error::Result;
use crate::render::Renderer;
use crate::view::*;
use colored::{ColoredString, Colorize};

const INDENT: usize = 2;
const TREE_INDENT: usize = 4;

pub struct TextRenderer {
    pub color: bool,
}

impl Renderer for TextRenderer {
    fn render(&self, view: &View) -> Result<String> {
        let mut writer = Writer {
            out: String::new(),
            color: self.color,
        };
        for node in &view.nodes {
            writer.node(node, 0);
        }
        Ok(writer.out)
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}

struct Writer {
    out: String,
    color: bool,
}

impl Writer {
    fn paint(&self, text: &str, style: fn(ColoredString) -> ColoredString) -> String {
        if self.color {
            style(text.normal()).to_string()
        } else {
            text.to_string()
        }
    }

    fn line(&mut self, indent: usize, text: &str) {
        self.out.push_str(&" ".repeat(indent));
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn node(&mut self, node: &Node, indent: usize) {
        match node {
            Node::Heading { level, text } => self.heading(*level, text, indent),
            Node::Input { placeholder, value } => {
                let text = if value.is_empty() {
                    self.paint(placeholder, |s| s.dimmed())
                } else {
                    format!(
                        "[input: {} lines, {} bytes]",
                        value.lines().count(),
                        value.len()
                    )
                };
                self.line(indent, &text);
            }
            Node::Alert { message } => {
                let text = self.paint(&format!("! {}", message), |s| s.red().bold());
                self.line(indent, &text);
            }
            Node::Tabs { tabs } => {
                let labels: Vec<String> = tabs
                    .iter()
                    .map(|tab| {
                        if tab.active {
                            self.paint(&format!("[{}]", tab.label), |s| s.blue().bold())
                        } else {
                            self.paint(&tab.label, |s| s.dimmed())
                        }
                    })
                    .collect();
                self.out.push('\n');
                self.line(indent, &labels.join("  "));
            }
            Node::Row { children } => {
                let parts: Vec<String> = children.iter().map(|c| self.inline(c)).collect();
                self.line(indent, &parts.join(" "));
            }
            Node::Entry { children } => {
                if let Some((head, details)) = children.split_first() {
                    self.node(head, indent);
                    for detail in details {
                        self.node(detail, indent + INDENT);
                    }
                }
            }
            Node::Group { label, children } => {
                let inner = match label {
                    Some(label) => {
                        let text = self.paint(label, |s| s.bold());
                        self.line(indent, &text);
                        indent + INDENT
                    }
                    None => indent,
                };
                for child in children {
                    self.node(child, inner);
                }
            }
            Node::Collapsible {
                label,
                expanded,
                children,
                ..
            } => {
                let marker = if *expanded { "▾" } else { "▸" };
                let text = format!("{} {}", marker, self.paint(label, |s| s.bold()));
                self.line(indent, &text);
                for child in children {
                    self.node(child, indent + TREE_INDENT);
                }
            }
            Node::Banner { text } => {
                let text = self.paint(&format!("! {}", text), |s| s.yellow());
                self.line(indent, &text);
            }
            leaf => {
                let text = self.inline(leaf);
                self.line(indent, &text);
            }
        }
    }

    fn heading(&mut self, level: u8, text: &str, indent: usize) {
        match level {
            1 | 2 => {
                if !self.out.is_empty() {
                    self.out.push('\n');
                }
                let underline = if level == 1 { "=" } else { "-" };
                let title = self.paint(text, |s| s.bold());
                self.line(indent, &title);
                self.line(indent, &underline.repeat(text.chars().count()));
            }
            _ => {
                let title = self.paint(text, |s| s.bold());
                self.line(indent, &title);
            }
        }
    }

    /// Single-line form of a leaf node.
    fn inline(&self, node: &Node) -> String {
        match node {
            Node::Text { text, style } => match style {
                TextStyle::Strong => self.paint(text, |s| s.bold()),
                TextStyle::Muted => self.paint(text, |s| s.dimmed()),
                TextStyle::Reference => self.paint(text, |s| s.blue()),
            },
            Node::Badge { label, color } => {
                let text = format!("[{}]", label);
                match color {
                    BadgeColor::Blue => self.paint(&text, |s| s.blue().bold()),
                    BadgeColor::Green => self.paint(&text, |s| s.green().bold()),
                    BadgeColor::Yellow => self.paint(&text, |s| s.yellow().bold()),
                    BadgeColor::Red => self.paint(&text, |s| s.red().bold()),
                    BadgeColor::Purple => self.paint(&text, |s| s.magenta().bold()),
                    BadgeColor::Gray => self.paint(&text, |s| s.bright_black().bold()),
                }
            }
            Node::Lock { locked: true, .. } => self.paint("(locked)", |s| s.yellow()),
            Node::Lock { locked: false, .. } => self.paint("(unlocked)", |s| s.green()),
            Node::Marker { label } => self.paint(label, |s| s.red()),
            other => other.label().unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::{Event, ViewMode, Viewer};
    use pretty_assertions::assert_eq;

    fn plain(view: &View) -> String {
        TextRenderer { color: false }.render(view).unwrap()
    }

    const DOC: &str = r##"{
        "info": {"title": "Users API", "description": "Manage users", "version": "1.0.0"},
        "paths": {
            "/users": {
                "get": {
                    "summary": "List users",
                    "security": [{"bearerAuth": []}],
                    "parameters": [{"name": "limit", "in": "query", "description": "Max items"}],
                    "responses": {"200": {"description": "OK"}}
                },
                "post": {
                    "summary": "Create user",
                    "requestBody": {"content": {"application/json": {"schema": {"$ref": "#/components/schemas/User"}}}}
                }
            },
            "/health": {"get": {"summary": "Health"}}
        },
        "components": {"schemas": {"User": {"properties": {"id": {"type": "string"}}, "required": ["id"]}}}
    }"##;

    #[test]
    fn endpoints_page() {
        let mut viewer = Viewer::new();
        viewer.dispatch(Event::InputChanged(DOC.to_string()));
        viewer.dispatch(Event::TogglePath("/users".to_string()));

        let expected = "\
OpenAPI Analyzer
================
[input: ...]

API Information
---------------
Users API
Manage users
Version: 1.0.0

[Endpoints]  Models

Endpoints
---------
▾ /users
    [GET] List users (locked)
    ! Authentication Required: bearerAuth
    Parameters:
      limit (query)
        Max items
    Responses:
      200 - OK
    [POST] Create user (unlocked)
    Request Body:
      application/json
        User
▸ /health
";
        let out = plain(&viewer.render());
        let (head, rest) = out.split_once('\n').unwrap();
        let (_, rest) = rest.split_once('\n').unwrap();
        let (input, rest) = rest.split_once('\n').unwrap();
        assert_eq!(head, "OpenAPI Analyzer");
        assert_eq!(
            input,
            format!("[input: {} lines, {} bytes]", DOC.lines().count(), DOC.len())
        );
        let expected_rest = expected.splitn(4, '\n').nth(3).unwrap();
        assert_eq!(rest, expected_rest);
    }

    #[test]
    fn models_page() {
        let mut viewer = Viewer::new();
        viewer.dispatch(Event::InputChanged(DOC.to_string()));
        viewer.dispatch(Event::SelectMode(ViewMode::Models));
        viewer.dispatch(Event::ToggleSchema("User".to_string()));
        let out = plain(&viewer.render());
        assert!(out.contains("\nEndpoints  [Models]\n"));
        assert!(out.ends_with("Models\n------\n▾ User\n    id (string) required\n"));
    }

    #[test]
    fn empty_viewer_shows_placeholder() {
        let out = plain(&Viewer::new().render());
        assert_eq!(
            out,
            "OpenAPI Analyzer\n================\nPaste your OpenAPI JSON specification here...\n"
        );
    }

    #[test]
    fn error_alert() {
        let mut viewer = Viewer::new();
        viewer.dispatch(Event::InputChanged("{oops".to_string()));
        let out = plain(&viewer.render());
        assert!(out.contains("\n! Invalid JSON format: "));
        assert!(!out.contains("API Information"));
    }

    #[test]
    fn colors_only_when_enabled() {
        colored::control::set_override(true);
        let view = View {
            nodes: vec![Node::Badge {
                label: "GET".to_string(),
                color: BadgeColor::Blue,
            }],
        };
        let colored_out = TextRenderer { color: true }.render(&view).unwrap();
        assert!(colored_out.contains("\u{1b}["));
        assert!(colored_out.contains("[GET]"));
        assert_eq!(plain(&view), "[GET]\n");
    }
}
