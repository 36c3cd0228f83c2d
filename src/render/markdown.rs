//! GitHub-flavored markdown renderer.
//!
//! Tree nodes become level-3 headings preceded by an index linking to their
//! anchors. Section groups become bullet lists.

use crate::error::Result;
use crate::render::slug::{self, Slugger};
use crate::render::Renderer;
use crate::view::*;
use std::collections::VecDeque;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, view: &View) -> Result<String> {
        // Every heading claims its slug in page order so tree anchors get
        // the same suffixes GitHub assigns.
        let mut slugs = Slugger::default();
        let mut anchors = VecDeque::new();
        for node in view.flatten() {
            match node {
                Node::Heading { text, .. } => {
                    slugs.slug(text);
                }
                Node::Collapsible { label, .. } => {
                    anchors.push_back((label.clone(), slugs.slug(&format!("`{}`", label))));
                }
                _ => {}
            }
        }

        let mut writer = Writer {
            out: String::new(),
            anchors,
            index_written: false,
        };
        for node in &view.nodes {
            writer.block(node);
        }
        Ok(writer.out)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

struct Writer {
    out: String,
    /// (label, anchor) of every tree node, in page order
    anchors: VecDeque<(String, String)>,
    index_written: bool,
}

impl Writer {
    fn paragraph(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push_str("\n\n");
    }

    fn block(&mut self, node: &Node) {
        match node {
            Node::Heading { level, text } => {
                let hashes = "#".repeat(usize::from(*level));
                self.paragraph(&format!("{} {}", hashes, text));
            }
            Node::Input { placeholder, value } => {
                let text = if value.is_empty() {
                    format!("_{}_", placeholder)
                } else {
                    format!(
                        "_Input: {} lines, {} bytes_",
                        value.lines().count(),
                        value.len()
                    )
                };
                self.paragraph(&text);
            }
            Node::Alert { message } => self.paragraph(&format!("> **{}**", message)),
            Node::Banner { text } => self.paragraph(&format!("> {}", text)),
            Node::Tabs { tabs } => {
                let labels: Vec<String> = tabs
                    .iter()
                    .map(|tab| {
                        if tab.active {
                            format!("**{}**", tab.label)
                        } else {
                            tab.label.clone()
                        }
                    })
                    .collect();
                self.paragraph(&labels.join(" | "));
            }
            Node::Group {
                label: Some(label),
                children,
            } => {
                self.paragraph(&format!("**{}**", label));
                for child in children {
                    self.list_item(child, 0);
                }
                self.out.push('\n');
            }
            Node::Group {
                label: None,
                children,
            }
            | Node::Entry { children } => {
                for child in children {
                    self.block(child);
                }
            }
            Node::Collapsible {
                label, children, ..
            } => {
                if !self.index_written {
                    self.index();
                }
                self.paragraph(&format!("### `{}`", label));
                for child in children {
                    self.block(child);
                }
            }
            leaf => {
                let text = inline(leaf);
                if !text.is_empty() {
                    self.paragraph(&text);
                }
            }
        }
    }

    fn index(&mut self) {
        self.index_written = true;
        let items: Vec<String> = self
            .anchors
            .drain(..)
            .map(|(label, anchor)| slug::toc_item(&label, &anchor))
            .collect();
        self.out.push_str(&items.join("\n"));
        self.out.push_str("\n\n");
    }

    fn list_item(&mut self, node: &Node, depth: usize) {
        let pad = "  ".repeat(depth);
        match node {
            Node::Entry { children } => {
                if let Some((head, details)) = children.split_first() {
                    self.out.push_str(&format!("{}- {}\n", pad, inline(head)));
                    for detail in details {
                        self.list_item(detail, depth + 1);
                    }
                }
            }
            Node::Group {
                label: Some(label),
                children,
            } => {
                self.out.push_str(&format!("{}- **{}**\n", pad, label));
                for child in children {
                    self.list_item(child, depth + 1);
                }
            }
            other => self.out.push_str(&format!("{}- {}\n", pad, inline(other))),
        }
    }
}

fn inline(node: &Node) -> String {
    match node {
        Node::Text { text, style } => match style {
            TextStyle::Strong => format!("**{}**", text),
            TextStyle::Muted => format!("_{}_", text),
            TextStyle::Reference => format!("`{}`", text),
        },
        Node::Badge { label, .. } => format!("`{}`", label),
        Node::Lock { locked: true, .. } => "(locked)".to_string(),
        Node::Lock { locked: false, .. } => "(unlocked)".to_string(),
        Node::Marker { label } => format!("*{}*", label),
        Node::Row { children } => children.iter().map(inline).collect::<Vec<_>>().join(" "),
        other => other.label().unwrap_or_default().to_string(),
    }
}
