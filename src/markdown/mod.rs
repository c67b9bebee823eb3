pub mod error;
pub mod tree;

pub use error::RenderError;
pub use tree::{extract_raw_text, pop_first_heading};

use comrak::nodes::AstNode;
use comrak::{format_html, markdown_to_html, parse_document, Arena, Options};

/// Parser/renderer options shared by every markdown entrypoint.
///
/// GFM-ish extension set: strikethrough, tables and autolinks on top of
/// CommonMark.
pub fn options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options
}

/// Parse markdown source into a document tree owned by `arena`.
pub fn parse<'a>(arena: &'a Arena<AstNode<'a>>, source: &str) -> &'a AstNode<'a> {
    parse_document(arena, source, &options())
}

/// Render any subtree to an HTML fragment.
pub fn render_node<'a>(node: &'a AstNode<'a>) -> Result<String, RenderError> {
    let mut out = Vec::new();
    format_html(node, &options(), &mut out)?;
    Ok(String::from_utf8(out)?)
}

/// One-shot render for contexts that need no title extraction.
pub fn render_markdown(source: &str) -> String {
    markdown_to_html(source, &options())
}

/// HTML-escape plain text, for fragments synthesized outside the renderer.
pub fn escape_text(text: &str) -> Result<String, RenderError> {
    let mut out = Vec::new();
    comrak::html::escape(&mut out, text.as_bytes())?;
    Ok(String::from_utf8(out)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_paragraph() {
        let html = render_markdown("Plain text.");
        assert_eq!(html, "<p>Plain text.</p>\n");
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(
            escape_text("fish & <chips>").unwrap(),
            "fish &amp; &lt;chips&gt;"
        );
    }

    #[test]
    fn test_render_node_matches_one_shot() {
        let source = "# Title\n\nSome ~~struck~~ text.\n";
        let arena = Arena::new();
        let root = parse(&arena, source);

        assert_eq!(render_node(root).unwrap(), render_markdown(source));
    }
}
