//! # Document Loader
//!
//! Structural parsing of input markup into an [`InputDocument`].
//!
//! - Well-formedness checking only; schema conformance is the reshaper's
//!   concern
//! - Non-element nodes (text, comments, processing instructions) are
//!   dropped; element structure and attribute order survive
//! - No I/O: callers hand in text, typically obtained through a
//!   [`Source`](crate::Source)

use crate::types::{Element, InputDocument, ScoreError, Source};

// =============================================================================
// PARSING
// =============================================================================

/// Parse document text into an [`InputDocument`].
///
/// `source_id` names the input for error context (typically a path).
///
/// # Errors
/// - [`ScoreError::MalformedDocument`] for unparsable markup (mismatched
///   tags, invalid entities, bad encoding declarations)
/// - [`ScoreError::EmptyDocument`] when no root element is present
pub fn parse_document(text: &str, source_id: &str) -> Result<InputDocument, ScoreError> {
    if text.trim().is_empty() {
        return Err(ScoreError::EmptyDocument {
            source_id: source_id.to_string(),
        });
    }

    let doc = roxmltree::Document::parse(text).map_err(|e| match e {
        // Parsable content with no element (e.g. comments only).
        roxmltree::Error::NoRootNode => ScoreError::EmptyDocument {
            source_id: source_id.to_string(),
        },
        other => ScoreError::MalformedDocument {
            source_id: source_id.to_string(),
            detail: other.to_string(),
        },
    })?;

    let root = convert_element(doc.root_element());
    Ok(InputDocument::with_root(root))
}

/// Read a [`Source`] and parse its contents.
///
/// Convenience entry point for drivers; equivalent to `source.read()`
/// followed by [`parse_document`].
pub fn load_document<S: Source>(source: &S) -> Result<InputDocument, ScoreError> {
    let text = source.read()?;
    parse_document(&text, source.id())
}

/// Convert a roxmltree node into the owned element model.
///
/// Only element children are retained, in document order.
fn convert_element(node: roxmltree::Node<'_, '_>) -> Element {
    let mut element = Element::new(node.tag_name().name());

    for attr in node.attributes() {
        element
            .attributes
            .push((attr.name().to_string(), attr.value().to_string()));
    }

    for child in node.children().filter(roxmltree::Node::is_element) {
        element.children.push(convert_element(child));
    }

    element
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_in_order() {
        let doc = parse_document(
            r#"<scores><Teamwork><x a="1"/><y b="2"/></Teamwork><Design/></scores>"#,
            "test",
        )
        .expect("parse");

        let root = doc.root.expect("root");
        assert_eq!(root.name, "scores");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].name, "Teamwork");
        assert_eq!(root.children[1].name, "Design");
        assert_eq!(root.children[0].children[0].name, "x");
        assert_eq!(root.children[0].children[1].name, "y");
    }

    #[test]
    fn preserves_attribute_order() {
        let doc = parse_document(r#"<r><s z="1" a="2" m="3"/></r>"#, "test").expect("parse");
        let score = &doc.root.expect("root").children[0];

        let names: Vec<&str> = score.attributes.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn ignores_text_and_comment_nodes() {
        let doc = parse_document(
            "<scores>\n  <!-- judged -->\n  <Teamwork>\n    text\n  </Teamwork>\n</scores>",
            "test",
        )
        .expect("parse");

        let root = doc.root.expect("root");
        assert_eq!(root.children.len(), 1);
        assert!(root.children[0].children.is_empty());
    }

    #[test]
    fn mismatched_tags_are_malformed() {
        let err = parse_document("<scores><Teamwork></scores>", "bad.xml")
            .expect_err("mismatched tags must fail");
        assert!(matches!(
            err,
            ScoreError::MalformedDocument { ref source_id, .. } if source_id == "bad.xml"
        ));
    }

    #[test]
    fn blank_input_is_empty_document() {
        let err = parse_document("   \n  ", "blank.xml").expect_err("blank input must fail");
        assert!(matches!(err, ScoreError::EmptyDocument { .. }));
    }

    #[test]
    fn comment_only_input_is_empty_document() {
        let err = parse_document("<!-- nothing here -->", "comments.xml")
            .expect_err("comment-only input must fail");
        assert!(matches!(err, ScoreError::EmptyDocument { .. }));
    }
}
