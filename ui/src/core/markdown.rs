//! Markdown to HTML for the result panels.

use pulldown_cmark::{html, Event, Options, Parser};

/// Render backend markdown to an HTML fragment.
///
/// Tables and strikethrough are enabled. Raw HTML in the source is emitted as
/// text, so the fragment can be injected with `dangerous_inner_html`.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_renders() {
        assert_eq!(render_markdown("# Summary"), "<h1>Summary</h1>\n");
    }

    #[test]
    fn bullet_lists_and_emphasis() {
        let html = render_markdown("## Strengths\n\n- **Brand** recognition\n- Cash flow\n");
        assert!(html.contains("<h2>Strengths</h2>"));
        assert!(html.contains("<li><strong>Brand</strong> recognition</li>"));
    }

    #[test]
    fn tables_are_enabled() {
        let html = render_markdown("| Ratio | Value |\n|---|---|\n| Current | 1.4 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>Current</td>"));
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
