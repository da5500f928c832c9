//! Markdown rendering for profile prose.
//!
//! Bio, article teasers, FAQ answers and gallery descriptions are short
//! GitHub Flavored Markdown fragments. Raw HTML inside them is escaped so a
//! profile cannot inject markup into the page.

use comrak::Options;

/// Renders markdown fragments to HTML with GFM extensions.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl Default for MarkdownRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GFM extensions and HTML escaping.
    ///
    /// Enables strikethrough, tables, autolinks and smart punctuation.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;

        options.parse.smart = true;

        options.render.unsafe_ = false;
        options.render.escape = true;

        Self { options }
    }

    /// Renders markdown content to an HTML string.
    pub fn render(&self, content: &str) -> String {
        comrak::markdown_to_html(content, &self.options)
    }
}
