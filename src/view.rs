//! Framework-independent view tree.
//!
//! The tree renderers in [`crate::tree`] produce a [`View`]; output backends
//! in [`crate::render`] turn it into bytes. Collapsed nodes carry no children.

use serde::Serialize;

/// A rendered page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct View {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Heading {
        level: u8,
        text: String,
    },
    Text {
        text: String,
        style: TextStyle,
    },
    /// HTTP method pill
    Badge {
        label: String,
        color: BadgeColor,
    },
    /// Lock/unlock icon next to an operation summary
    Lock {
        locked: bool,
        title: String,
    },
    /// Short emphasized tag such as `required`
    Marker {
        label: String,
    },
    /// Highlighted notice inside an operation
    Banner {
        text: String,
    },
    /// Destructive notification (parse errors)
    Alert {
        message: String,
    },
    /// Raw-text input control
    Input {
        placeholder: String,
        value: String,
    },
    Tabs {
        tabs: Vec<Tab>,
    },
    /// Children laid out on one line
    Row {
        children: Vec<Node>,
    },
    /// List entry: the first child is the headline, the rest are details
    Entry {
        children: Vec<Node>,
    },
    /// Labeled block of children, e.g. "Parameters:"
    Group {
        label: Option<String>,
        children: Vec<Node>,
    },
    Collapsible {
        /// Identity used with the tree's expand state
        key: String,
        tree: TreeKind,
        label: String,
        expanded: bool,
        children: Vec<Node>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Strong,
    Muted,
    /// Name of a referenced schema
    Reference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeColor {
    Blue,
    Green,
    Yellow,
    Red,
    Purple,
    Gray,
}

/// Which tree a collapsible node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeKind {
    Endpoint,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub label: String,
    pub active: bool,
}

impl Node {
    pub fn heading(level: u8, text: impl Into<String>) -> Node {
        Node::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>, style: TextStyle) -> Node {
        Node::Text {
            text: text.into(),
            style,
        }
    }

    pub fn marker(label: impl Into<String>) -> Node {
        Node::Marker {
            label: label.into(),
        }
    }

    pub fn group(label: impl Into<String>, children: Vec<Node>) -> Node {
        Node::Group {
            label: Some(label.into()),
            children,
        }
    }

    pub fn row(children: Vec<Node>) -> Node {
        Node::Row { children }
    }

    pub fn entry(children: Vec<Node>) -> Node {
        Node::Entry { children }
    }

    /// Direct children, empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Row { children }
            | Node::Entry { children }
            | Node::Group { children, .. }
            | Node::Collapsible { children, .. } => children,
            _ => &[],
        }
    }

    /// Visible text carried by this node itself, not its children.
    pub fn label(&self) -> Option<&str> {
        match self {
            Node::Heading { text, .. } | Node::Text { text, .. } | Node::Banner { text } => {
                Some(text)
            }
            Node::Badge { label, .. } | Node::Marker { label } => Some(label),
            Node::Group { label, .. } => label.as_deref(),
            Node::Collapsible { label, .. } => Some(label),
            Node::Alert { message } => Some(message),
            Node::Lock { title, .. } => Some(title),
            Node::Input { .. } | Node::Tabs { .. } | Node::Row { .. } | Node::Entry { .. } => None,
        }
    }

    /// Depth-first walk over this node and its descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

impl View {
    /// Depth-first list of every node in the page.
    pub fn flatten(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        for node in &self.nodes {
            node.walk(&mut |n| out.push(n));
        }
        out
    }

    /// All visible labels, one per line, in document order.
    pub fn text(&self) -> String {
        self.flatten()
            .into_iter()
            .filter_map(Node::label)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The collapsible node with `key` in the given tree.
    pub fn collapsible(&self, tree: TreeKind, key: &str) -> Option<&Node> {
        self.flatten().into_iter().find(|n| {
            matches!(n, Node::Collapsible { tree: t, key: k, .. } if *t == tree && k == key)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> View {
        View {
            nodes: vec![
                Node::heading(1, "Title"),
                Node::Collapsible {
                    key: "/users".to_string(),
                    tree: TreeKind::Endpoint,
                    label: "/users".to_string(),
                    expanded: true,
                    children: vec![Node::row(vec![
                        Node::Badge {
                            label: "GET".to_string(),
                            color: BadgeColor::Blue,
                        },
                        Node::text("List users", TextStyle::Strong),
                    ])],
                },
            ],
        }
    }

    #[test]
    fn text_follows_document_order() {
        assert_eq!(sample().text(), "Title\n/users\nGET\nList users");
    }

    #[test]
    fn finds_collapsible_by_tree_and_key() {
        let view = sample();
        assert!(view.collapsible(TreeKind::Endpoint, "/users").is_some());
        assert!(view.collapsible(TreeKind::Model, "/users").is_none());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Node::marker("required")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "marker", "label": "required"}));
    }
}
