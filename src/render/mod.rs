//! Renderer module — trait-based output format dispatch.

pub mod html;
pub mod json;
pub mod markdown;
pub mod slug;
pub mod text;

use crate::error::{Error, Result};
use crate::view::View;

/// Trait for rendering a View into a specific output format.
pub trait Renderer {
    fn render(&self, view: &View) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name. `color` only affects the
/// text renderer.
pub fn create_renderer(format: &str, color: bool) -> Result<Box<dyn Renderer>> {
    match format {
        "text" | "txt" => Ok(Box::new(text::TextRenderer { color })),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(Error::UnknownFormat(format.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        for (name, ext) in [
            ("text", "txt"),
            ("txt", "txt"),
            ("html", "html"),
            ("markdown", "md"),
            ("md", "md"),
            ("json", "json"),
        ] {
            let renderer = create_renderer(name, false).unwrap();
            assert_eq!(renderer.file_extension(), ext);
        }
    }

    #[test]
    fn unknown_format_lists_choices() {
        let err = create_renderer("yaml", false).err().unwrap();
        assert_eq!(
            err.to_string(),
            "unknown format: yaml. Use text, html, markdown, or json"
        );
    }
}
