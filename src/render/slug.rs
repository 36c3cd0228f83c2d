//! GitHub-style heading anchors.

use std::collections::HashMap;

/// GitHub heading anchor slug generation.
///
/// - lowercase
/// - remove all chars that aren't alphanumeric, space, or hyphen
/// - replace spaces with hyphens
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

/// Hands out unique slugs for one page, suffixing repeats with `-1`, `-2`, ...
/// the way GitHub does for duplicate headings.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    pub fn slug(&mut self, text: &str) -> String {
        let base = github_slug(text);
        let count = self.seen.entry(base.clone()).or_insert(0);
        let slug = if *count == 0 {
            base.clone()
        } else {
            format!("{}-{}", base, count)
        };
        *count += 1;
        slug
    }
}

/// Index list item linking to a heading anchor.
pub fn toc_item(label: &str, slug: &str) -> String {
    format!("* [`{}`](#{})", label, slug)
}
