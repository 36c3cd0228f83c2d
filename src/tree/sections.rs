//! Leaf sections shared by the endpoint and model trees.
//!
//! Every function is total: absent input yields `None` (nothing rendered),
//! absent sub-fields drop only their own element.

use crate::model::*;
use crate::view::{Node, TextStyle};
use indexmap::IndexMap;

pub fn parameters(params: Option<&[Parameter]>) -> Option<Node> {
    let params = params.filter(|p| !p.is_empty())?;
    let rows = params.iter().map(parameter).collect();
    Some(Node::group("Parameters:", rows))
}

fn parameter(param: &Parameter) -> Node {
    let mut line = vec![Node::text(&param.name, TextStyle::Strong)];
    if let Some(ref location) = param.location {
        line.push(Node::text(format!("({})", location), TextStyle::Muted));
    }
    if param.required {
        line.push(Node::marker("required"));
    }

    let mut children = vec![Node::row(line)];
    if let Some(ref desc) = param.description {
        children.push(Node::text(desc, TextStyle::Muted));
    }
    Node::entry(children)
}

pub fn request_body(body: Option<&RequestBody>) -> Option<Node> {
    let body = body?;
    let entries = body
        .content
        .iter()
        .flatten()
        .map(|(media_type, entry)| {
            let mut children = vec![Node::text(media_type, TextStyle::Strong)];
            if let Some(name) = entry.schema.as_ref().and_then(SchemaRef::reference_name) {
                children.push(Node::text(name, TextStyle::Reference));
            }
            Node::entry(children)
        })
        .collect();
    Some(Node::group("Request Body:", entries))
}

pub fn responses(responses: Option<&IndexMap<String, Response>>) -> Option<Node> {
    let responses = responses.filter(|r| !r.is_empty())?;
    let rows = responses
        .iter()
        .map(|(code, response)| {
            let text = match response.description {
                Some(ref desc) => format!("{} - {}", code, desc),
                None => code.clone(),
            };
            Node::text(text, TextStyle::Strong)
        })
        .collect();
    Some(Node::group("Responses:", rows))
}

/// One entry per property, in declaration order. Returns an empty list when
/// the schema has no properties.
pub fn schema_properties(
    properties: Option<&IndexMap<String, PropertyDetail>>,
    required: &[String],
) -> Vec<Node> {
    properties
        .into_iter()
        .flatten()
        .map(|(name, detail)| {
            let mut line = vec![
                Node::text(name, TextStyle::Strong),
                Node::text(format!("({})", detail.type_label()), TextStyle::Muted),
            ];
            if required.iter().any(|r| r == name) {
                line.push(Node::marker("required"));
            }

            let mut children = vec![Node::row(line)];
            if let Some(ref desc) = detail.description {
                children.push(Node::text(desc, TextStyle::Muted));
            }
            Node::entry(children)
        })
        .collect()
}
