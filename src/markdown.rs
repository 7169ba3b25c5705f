use comrak::plugins::syntect::SyntectAdapter;
use comrak::{Options, Plugins, markdown_to_html_with_plugins};

/// Markdown-to-HTML renderer with syntax-highlighted code fences and
/// anchored headings.
///
/// One instance is constructed per build and shared across every content
/// record; the highlighting adapter is an explicit field rather than a
/// process-wide singleton, so parallel or test-isolated instances stay
/// independent.
pub struct MarkdownRenderer {
    options: Options<'static>,
    highlighter: SyntectAdapter,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        // Class-based output: the stylesheet decides the actual colors.
        Self::with_highlighter(SyntectAdapter::new(None))
    }

    pub fn with_highlighter(highlighter: SyntectAdapter) -> Self {
        Self {
            options: options(),
            highlighter,
        }
    }

    /// Render one document body into a trusted HTML fragment.
    ///
    /// A fence tagged with an unknown language degrades to an escaped plain
    /// code block; this never fails.
    pub fn render(&self, markdown: &str) -> String {
        let mut plugins = Plugins::default();
        plugins.render.codefence_syntax_highlighter = Some(&self.highlighter);
        markdown_to_html_with_plugins(markdown, &self.options, &plugins)
    }
}

fn options() -> Options<'static> {
    let mut options = Options::default();
    // Empty prefix: heading ids are the slugified heading text.
    options.extension.header_ids = Some(String::new());
    options.extension.autolink = true;
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.render.r#unsafe = true;
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_paragraphs_and_emphasis() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("Hello **world** and *friends*");
        assert!(html.contains("<p>"), "{html}");
        assert!(html.contains("<strong>world</strong>"), "{html}");
        assert!(html.contains("<em>friends</em>"), "{html}");
    }

    #[test]
    fn headings_carry_anchor_ids() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Getting Started\n\nBody");
        assert!(html.contains("id=\"getting-started\""), "{html}");
    }

    #[test]
    fn duplicate_headings_get_distinct_ids() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("## Setup\n\ntext\n\n## Setup\n\nmore");
        assert!(html.contains("id=\"setup\""), "{html}");
        assert!(html.contains("id=\"setup-1\""), "{html}");
    }

    #[test]
    fn bare_urls_are_linkified() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("see https://example.com/docs for details");
        assert!(
            html.contains("<a href=\"https://example.com/docs\""),
            "{html}"
        );
    }

    #[test]
    fn raw_html_passes_through() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("before\n\n<div class=\"note\">kept</div>\n\nafter");
        assert!(html.contains("<div class=\"note\">kept</div>"), "{html}");
    }

    #[test]
    fn recognized_language_is_highlighted() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```");
        assert!(html.contains("<span"), "{html}");
        assert!(html.contains("<pre"), "{html}");
    }

    #[test]
    fn unknown_language_degrades_to_escaped_plain_block() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```nosuchlang\nlet x = a < b && b > c;\n```");
        assert!(html.contains("&lt;"), "{html}");
        assert!(!html.contains("<b>"), "{html}");
        assert!(html.contains("<pre"), "{html}");
    }

    #[test]
    fn lists_are_rendered() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("- one\n- two\n");
        assert!(html.contains("<ul>"), "{html}");
        assert!(html.contains("<li>one</li>"), "{html}");
    }
}
