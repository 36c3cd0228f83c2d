//! HTML renderer — standalone HTML page with semantic markup.
//!
//! Collapsible nodes become `<details>` elements so the page stays
//! interactive without scripts; the viewer's expand state decides which
//! start out `open`.

use crate::error::Result;
use crate::render::slug::Slugger;
use crate::render::Renderer;
use crate::view::*;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, view: &View) -> Result<String> {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        if let Some(title) = page_title(view) {
            out.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 60em; margin: 2em auto; padding: 0 1em; background: #111827; color: #f3f4f6; }\n");
        out.push_str("textarea { width: 100%; min-height: 12em; background: #1f2937; color: #e5e7eb; }\n");
        out.push_str("details { background: #1f2937; border-radius: 8px; margin-bottom: 1em; padding: 0.5em 1em; }\n");
        out.push_str("summary { cursor: pointer; font-weight: 600; }\n");
        out.push_str(".muted { color: #9ca3af; }\n");
        out.push_str(".code { font-family: monospace; }\n");
        out.push_str(".ref { color: #60a5fa; }\n");
        out.push_str(".required { color: #f87171; margin-left: 0.5em; }\n");
        out.push_str(".badge { display: inline-block; padding: 0.1em 0.8em; border-radius: 999px; font-weight: bold; text-transform: uppercase; }\n");
        out.push_str(".badge-blue { background: #3b82f6; }\n");
        out.push_str(".badge-green { background: #22c55e; }\n");
        out.push_str(".badge-yellow { background: #eab308; }\n");
        out.push_str(".badge-red { background: #ef4444; }\n");
        out.push_str(".badge-purple { background: #a855f7; }\n");
        out.push_str(".badge-gray { background: #6b7280; }\n");
        out.push_str(".lock { color: #eab308; } .unlock { color: #22c55e; }\n");
        out.push_str(".banner { background: #374151; color: #eab308; padding: 0.5em 1em; border-radius: 6px; }\n");
        out.push_str(".alert { border: 1px solid #ef4444; color: #fca5a5; padding: 0.5em 1em; border-radius: 6px; }\n");
        out.push_str(".tab { margin-right: 1em; color: #9ca3af; } .tab.active { color: #3b82f6; border-bottom: 2px solid #3b82f6; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        let mut slugs = Slugger::default();
        for node in &view.nodes {
            render_node(&mut out, node, &mut slugs);
        }

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

/// Title of the described API, falling back to the page heading.
fn page_title(view: &View) -> Option<&str> {
    let headings: Vec<(u8, &str)> = view
        .flatten()
        .into_iter()
        .filter_map(|n| match n {
            Node::Heading { level, text } => Some((*level, text.as_str())),
            _ => None,
        })
        .collect();
    headings
        .iter()
        .find(|(level, _)| *level == 3)
        .or_else(|| headings.first())
        .map(|(_, text)| *text)
}

fn render_node(out: &mut String, node: &Node, slugs: &mut Slugger) {
    match node {
        Node::Heading { level, text } => {
            out.push_str(&format!("<h{0}>{1}</h{0}>\n", level, html_escape(text)));
        }
        Node::Input { placeholder, value } => {
            out.push_str(&format!(
                "<textarea placeholder=\"{}\">{}</textarea>\n",
                html_escape(placeholder),
                html_escape(value)
            ));
        }
        Node::Alert { message } => {
            out.push_str(&format!(
                "<div class=\"alert\" role=\"alert\">{}</div>\n",
                html_escape(message)
            ));
        }
        Node::Tabs { tabs } => {
            out.push_str("<nav>");
            for tab in tabs {
                let class = if tab.active { "tab active" } else { "tab" };
                out.push_str(&format!(
                    "<span class=\"{}\">{}</span>",
                    class,
                    html_escape(&tab.label)
                ));
            }
            out.push_str("</nav>\n");
        }
        Node::Row { children } => {
            out.push_str("<div class=\"row\">");
            for child in children {
                out.push_str(&inline(child));
            }
            out.push_str("</div>\n");
        }
        Node::Entry { children } => {
            out.push_str("<div class=\"entry\">\n");
            for child in children {
                render_node(out, child, slugs);
            }
            out.push_str("</div>\n");
        }
        Node::Group { label, children } => {
            out.push_str("<div class=\"group\">\n");
            if let Some(label) = label {
                out.push_str(&format!("<h4>{}</h4>\n", html_escape(label)));
            }
            for child in children {
                render_node(out, child, slugs);
            }
            out.push_str("</div>\n");
        }
        Node::Collapsible {
            tree,
            label,
            expanded,
            children,
            ..
        } => {
            let prefix = match tree {
                TreeKind::Endpoint => "endpoint",
                TreeKind::Model => "model",
            };
            let id = slugs.slug(&format!("{} {}", prefix, label));
            let open = if *expanded { " open" } else { "" };
            let class = match tree {
                TreeKind::Endpoint => " class=\"code\"",
                TreeKind::Model => "",
            };
            out.push_str(&format!(
                "<details id=\"{}\"{}>\n<summary{}>{}</summary>\n",
                html_escape(&id),
                open,
                class,
                html_escape(label)
            ));
            for child in children {
                render_node(out, child, slugs);
            }
            out.push_str("</details>\n");
        }
        Node::Banner { text } => {
            out.push_str(&format!("<div class=\"banner\">{}</div>\n", html_escape(text)));
        }
        Node::Text { text, style } => {
            out.push_str(&format!(
                "<p{}>{}</p>\n",
                style_class(*style),
                html_escape(text)
            ));
        }
        leaf => {
            out.push_str(&inline(leaf));
            out.push('\n');
        }
    }
}

fn inline(node: &Node) -> String {
    match node {
        Node::Text { text, style } => format!(
            "<span{}>{}</span>",
            style_class(*style),
            html_escape(text)
        ),
        Node::Badge { label, color } => format!(
            "<span class=\"badge badge-{}\">{}</span>",
            color_name(*color),
            html_escape(label)
        ),
        Node::Lock { locked, title } => {
            let (class, icon) = if *locked {
                ("lock", "&#128274;")
            } else {
                ("unlock", "&#128275;")
            };
            format!(
                "<span class=\"{}\" title=\"{}\">{}</span>",
                class,
                html_escape(title),
                icon
            )
        }
        Node::Marker { label } => {
            format!("<span class=\"required\">{}</span>", html_escape(label))
        }
        other => other.label().map(html_escape).unwrap_or_default(),
    }
}

fn style_class(style: TextStyle) -> &'static str {
    match style {
        TextStyle::Strong => " class=\"strong\"",
        TextStyle::Muted => " class=\"muted\"",
        TextStyle::Reference => " class=\"ref\"",
    }
}

fn color_name(color: BadgeColor) -> &'static str {
    match color {
        BadgeColor::Blue => "blue",
        BadgeColor::Green => "green",
        BadgeColor::Yellow => "yellow",
        BadgeColor::Red => "red",
        BadgeColor::Purple => "purple",
        BadgeColor::Gray => "gray",
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
