//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the View directly. Useful for custom front ends that only
//! need the already-traversed tree.

use crate::error::Result;
use crate::render::Renderer;
use crate::view::View;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, view: &View) -> Result<String> {
        let mut out = serde_json::to_string_pretty(view)?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::{Event, Viewer};
    use serde_json::{json, Value};

    #[test]
    fn serializes_tree_nodes() {
        let mut viewer = Viewer::new();
        viewer.dispatch(Event::InputChanged(
            r#"{"paths": {"/users": {"get": {"summary": "List users"}}}}"#.to_string(),
        ));
        viewer.dispatch(Event::TogglePath("/users".to_string()));

        let out = JsonRenderer.render(&viewer.render()).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        let nodes = value["nodes"].as_array().unwrap();

        assert_eq!(nodes[0], json!({"kind": "heading", "level": 1, "text": "OpenAPI Analyzer"}));
        let tree = nodes.last().unwrap();
        assert_eq!(tree["kind"], "collapsible");
        assert_eq!(tree["tree"], "endpoint");
        assert_eq!(tree["key"], "/users");
        assert_eq!(tree["expanded"], true);

        let header = &tree["children"][0]["children"][0]["children"];
        assert_eq!(header[0], json!({"kind": "badge", "label": "GET", "color": "blue"}));
        assert_eq!(
            header[2],
            json!({"kind": "lock", "locked": false, "title": "Public Endpoint"})
        );
    }
}
