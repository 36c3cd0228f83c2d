//! Endpoint tree: path → method → operation.

use crate::model::{Document, Operation};
use crate::state::ExpandState;
use crate::tree::sections;
use crate::view::{BadgeColor, Node, TextStyle, TreeKind};

/// Badge color for an HTTP method name.
pub fn method_color(method: &str) -> BadgeColor {
    match method.to_ascii_lowercase().as_str() {
        "get" => BadgeColor::Blue,
        "post" => BadgeColor::Green,
        "put" => BadgeColor::Yellow,
        "delete" => BadgeColor::Red,
        "patch" => BadgeColor::Purple,
        _ => BadgeColor::Gray,
    }
}

/// The "Endpoints" section: one collapsible node per path.
pub fn render(doc: &Document, expanded: &ExpandState) -> Vec<Node> {
    let mut nodes = vec![Node::heading(2, "Endpoints")];

    for (path, item) in doc.paths.iter().flatten() {
        let is_open = expanded.is_expanded(path);
        let children = if is_open {
            item.operations
                .iter()
                .map(|(method, op)| operation(method, op))
                .collect()
        } else {
            Vec::new()
        };
        nodes.push(Node::Collapsible {
            key: path.clone(),
            tree: TreeKind::Endpoint,
            label: path.clone(),
            expanded: is_open,
            children,
        });
    }

    nodes
}

fn operation(method: &str, op: &Operation) -> Node {
    let locked = op.requires_auth();

    let mut header = vec![Node::Badge {
        label: method.to_uppercase(),
        color: method_color(method),
    }];
    if let Some(ref summary) = op.summary {
        header.push(Node::text(summary, TextStyle::Strong));
    }
    let title = if locked {
        "Requires Authentication"
    } else {
        "Public Endpoint"
    };
    header.push(Node::Lock {
        locked,
        title: title.to_string(),
    });

    let mut children = vec![Node::row(header)];

    if let Some(ref desc) = op.description {
        children.push(Node::text(desc, TextStyle::Muted));
    }

    if locked {
        let schemes = op
            .security
            .iter()
            .flatten()
            .map(|req| req.scheme_names().collect::<Vec<_>>().join(", "))
            .collect::<Vec<_>>()
            .join(" or ");
        children.push(Node::Banner {
            text: format!("Authentication Required: {}", schemes),
        });
    }

    children.extend(sections::parameters(op.parameters.as_deref()));
    children.extend(sections::request_body(op.request_body.as_ref()));
    children.extend(sections::responses(op.responses.as_ref()));

    Node::Group {
        label: None,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::view::View;
    use pretty_assertions::assert_eq;

    fn view(doc: &Document, state: &ExpandState) -> View {
        View {
            nodes: render(doc, state),
        }
    }

    fn badges(view: &View) -> Vec<(String, BadgeColor)> {
        view.flatten()
            .into_iter()
            .filter_map(|n| match n {
                Node::Badge { label, color } => Some((label.clone(), *color)),
                _ => None,
            })
            .collect()
    }

    fn locks(view: &View) -> Vec<bool> {
        view.flatten()
            .into_iter()
            .filter_map(|n| match n {
                Node::Lock { locked, .. } => Some(*locked),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn path_is_collapsed_by_default() {
        let doc = parse(r#"{"paths": {"/users": {"get": {"summary": "List users", "security": []}}}}"#)
            .unwrap();
        let v = view(&doc, &ExpandState::new());
        match v.collapsible(TreeKind::Endpoint, "/users") {
            Some(Node::Collapsible {
                expanded, children, ..
            }) => {
                assert!(!expanded);
                assert!(children.is_empty());
            }
            other => panic!("expected collapsible, got {:?}", other),
        }
        assert!(!v.text().contains("List users"));
    }

    #[test]
    fn expanded_public_operation() {
        let doc = parse(r#"{"paths": {"/users": {"get": {"summary": "List users", "security": []}}}}"#)
            .unwrap();
        let mut state = ExpandState::new();
        state.toggle("/users");
        let v = view(&doc, &state);

        assert_eq!(badges(&v), [("GET".to_string(), BadgeColor::Blue)]);
        assert!(v.text().contains("List users"));
        assert_eq!(locks(&v), [false]);
        assert!(!v.text().contains("Authentication Required"));
    }

    #[test]
    fn expanded_secured_operation_shows_banner() {
        let doc = parse(
            r#"{"paths": {"/users": {"get": {"summary": "List users", "security": [{"bearerAuth": []}]}}}}"#,
        )
        .unwrap();
        let mut state = ExpandState::new();
        state.toggle("/users");
        let v = view(&doc, &state);

        assert_eq!(locks(&v), [true]);
        assert!(v.text().contains("Requires Authentication"));
        assert!(v.text().contains("Authentication Required: bearerAuth"));
    }

    #[test]
    fn banner_joins_schemes_and_alternatives() {
        let doc = parse(
            r#"{"paths": {"/a": {"post": {"security": [
                {"apiKey": [], "session": []},
                {"oauth": ["write"]}
            ]}}}}"#,
        )
        .unwrap();
        let mut state = ExpandState::new();
        state.toggle("/a");
        let text = view(&doc, &state).text();
        assert!(text.contains("Authentication Required: apiKey, session or oauth"));
    }

    #[test]
    fn malformed_scopes_keep_scheme_names() {
        let doc = parse(
            r#"{"paths": {"/a": {
                "get": {"security": [{"oauth": "read"}]},
                "put": {"security": [{"apiKey": null}]}
            }}}"#,
        )
        .unwrap();
        let mut state = ExpandState::new();
        state.toggle("/a");
        let v = view(&doc, &state);

        assert_eq!(locks(&v), [true, true]);
        let text = v.text();
        assert!(text.contains("Authentication Required: oauth"));
        assert!(text.contains("Authentication Required: apiKey"));
        assert!(!text.contains("Public Endpoint"));
    }

    #[test]
    fn method_palette_with_default() {
        assert_eq!(method_color("get"), BadgeColor::Blue);
        assert_eq!(method_color("post"), BadgeColor::Green);
        assert_eq!(method_color("put"), BadgeColor::Yellow);
        assert_eq!(method_color("delete"), BadgeColor::Red);
        assert_eq!(method_color("patch"), BadgeColor::Purple);
        assert_eq!(method_color("DELETE"), BadgeColor::Red);
        assert_eq!(method_color("options"), BadgeColor::Gray);
        assert_eq!(method_color("trace"), BadgeColor::Gray);
    }

    #[test]
    fn methods_and_sections_in_order() {
        let doc = parse(
            r##"{"paths": {"/users/{id}": {
                "put": {
                    "summary": "Update user",
                    "description": "Replaces the user",
                    "parameters": [{"name": "id", "in": "path", "required": true}],
                    "requestBody": {"content": {"application/json": {"schema": {"$ref": "#/components/schemas/User"}}}},
                    "responses": {"200": {"description": "Updated"}}
                },
                "get": {"summary": "Fetch user"}
            }}}"##,
        )
        .unwrap();
        let mut state = ExpandState::new();
        state.toggle("/users/{id}");
        let v = view(&doc, &state);

        assert_eq!(
            badges(&v),
            [
                ("PUT".to_string(), BadgeColor::Yellow),
                ("GET".to_string(), BadgeColor::Blue)
            ]
        );
        let text = v.text();
        let order = [
            "Update user",
            "Replaces the user",
            "Parameters:",
            "Request Body:",
            "User",
            "Responses:",
            "200 - Updated",
            "Fetch user",
        ];
        let mut last = 0;
        for needle in order {
            let pos = text[last..]
                .find(needle)
                .unwrap_or_else(|| panic!("{:?} missing after offset {}", needle, last));
            last += pos + needle.len();
        }
    }

    #[test]
    fn malformed_methods_render_only_path() {
        let doc = parse(r#"{"paths": {"/broken": 42, "/empty": {"get": "nope"}}}"#).unwrap();
        let mut state = ExpandState::new();
        state.toggle("/broken");
        state.toggle("/empty");
        let v = view(&doc, &state);

        assert!(v
            .collapsible(TreeKind::Endpoint, "/broken")
            .unwrap()
            .children()
            .is_empty());
        assert_eq!(badges(&v), [("GET".to_string(), BadgeColor::Blue)]);
        assert_eq!(locks(&v), [false]);
    }

    #[test]
    fn missing_paths_renders_heading_only() {
        let doc = parse(r#"{"info": {"title": "Empty"}}"#).unwrap();
        assert_eq!(render(&doc, &ExpandState::new()), [Node::heading(2, "Endpoints")]);
    }
}
