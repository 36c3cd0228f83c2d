//! Model tree: one collapsible node per named schema.

use crate::model::Document;
use crate::state::ExpandState;
use crate::tree::sections;
use crate::view::{Node, TextStyle, TreeKind};

/// The "Models" section. Renders the heading alone when the document has no
/// `components.schemas`.
pub fn render(doc: &Document, expanded: &ExpandState) -> Vec<Node> {
    let mut nodes = vec![Node::heading(2, "Models")];

    for (name, schema) in doc.schemas().into_iter().flatten() {
        let is_open = expanded.is_expanded(name);
        let mut children = Vec::new();
        if is_open {
            if let Some(ref desc) = schema.description {
                children.push(Node::text(desc, TextStyle::Muted));
            }
            children.extend(sections::schema_properties(
                schema.properties.as_ref(),
                &schema.required,
            ));
        }
        nodes.push(Node::Collapsible {
            key: name.clone(),
            tree: TreeKind::Model,
            label: name.clone(),
            expanded: is_open,
            children,
        });
    }

    nodes
}
