use comrak::nodes::{AstNode, NodeValue};

/// Detach and return the first level-1 heading among the document's direct
/// children.
///
/// The scan is shallow on purpose: a level-1 heading nested inside a
/// blockquote or list is never a document title. At most one heading is ever
/// removed; calling this again on the same document finds nothing.
pub fn pop_first_heading<'a>(root: &'a AstNode<'a>) -> Option<&'a AstNode<'a>> {
    let heading = root
        .children()
        .find(|child| matches!(&child.data.borrow().value, NodeValue::Heading(h) if h.level == 1))?;

    heading.detach();
    Some(heading)
}

/// Collect the plain-text runs under `node` in document order.
///
/// One string per text or inline-code literal, depth-first over the full
/// subtree (including `node` itself if it is a text run).
pub fn extract_raw_text<'a>(node: &'a AstNode<'a>) -> Vec<String> {
    let mut runs = Vec::new();
    collect_text_runs(node, &mut runs);
    runs
}

fn collect_text_runs<'a>(node: &'a AstNode<'a>, runs: &mut Vec<String>) {
    match &node.data.borrow().value {
        NodeValue::Text(literal) => runs.push(literal.clone()),
        NodeValue::Code(code) => runs.push(code.literal.clone()),
        _ => {}
    }

    for child in node.children() {
        collect_text_runs(child, runs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown;
    use comrak::Arena;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pop_first_heading_detaches() {
        let arena = Arena::new();
        let root = markdown::parse(&arena, "# Title\n\nBody text.\n");

        let heading = pop_first_heading(root).expect("heading should be found");
        assert!(matches!(
            &heading.data.borrow().value,
            NodeValue::Heading(h) if h.level == 1
        ));

        // The heading is gone from the document body.
        let body = markdown::render_node(root).unwrap();
        assert!(!body.contains("<h1"));
        assert!(body.contains("<p>Body text.</p>"));
    }

    #[test]
    fn test_pop_first_heading_at_most_once() {
        let arena = Arena::new();
        let root = markdown::parse(&arena, "# First\n\n# Second\n");

        assert!(pop_first_heading(root).is_some());
        let runs = extract_raw_text(root);
        assert_eq!(runs, vec!["Second".to_string()]);

        // Second call pops the remaining heading, third finds nothing.
        assert!(pop_first_heading(root).is_some());
        assert!(pop_first_heading(root).is_none());
    }

    #[test]
    fn test_pop_first_heading_ignores_lower_levels() {
        let arena = Arena::new();
        let root = markdown::parse(&arena, "## Subsection\n\nBody.\n");

        assert!(pop_first_heading(root).is_none());
    }

    #[test]
    fn test_pop_first_heading_is_shallow() {
        let arena = Arena::new();
        let root = markdown::parse(&arena, "> # Quoted Heading\n\nBody.\n");

        assert!(pop_first_heading(root).is_none());
    }

    #[test]
    fn test_extract_raw_text_order() {
        let arena = Arena::new();
        let root = markdown::parse(&arena, "# A **B** C\n");

        assert_eq!(
            extract_raw_text(root),
            vec!["A ".to_string(), "B".to_string(), " C".to_string()]
        );
    }

    #[test]
    fn test_extract_raw_text_includes_code_spans() {
        let arena = Arena::new();
        let root = markdown::parse(&arena, "# `code` span\n");

        assert_eq!(
            extract_raw_text(root),
            vec!["code".to_string(), " span".to_string()]
        );
    }

    #[test]
    fn test_extract_raw_text_idempotent_without_mutation() {
        let arena = Arena::new();
        let root = markdown::parse(&arena, "Some *emphasised* text.\n");

        assert_eq!(extract_raw_text(root), extract_raw_text(root));
    }
}
