//! Locating the embedded block scalar inside an opaque document
//!
//! The host document is never parsed. A block is recognised by a header
//! line of the form `<label>: |` followed by a run of indented (or blank)
//! lines; the first unindented line with content ends it.

use regex::Regex;
use std::ops::Range;

use crate::error::{Error, Result};
use crate::indent::{detect_indent, strip_indent};

/// An indentation-delimited block found inside a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedBlock {
    /// Label of the header line that introduced the block
    pub label: String,
    /// Byte range of the block body in the document (header excluded)
    pub span: Range<usize>,
    /// Raw body text, indentation included
    pub text: String,
    /// Common indentation detected from the first non-blank line
    pub indent: String,
}

impl EmbeddedBlock {
    /// Body text with the common indentation removed
    pub fn content(&self) -> String {
        strip_indent(&self.text, &self.indent)
    }

    /// Line terminator used by the body: `\r\n` if it has any, else `\n`
    pub fn line_ending(&self) -> &'static str {
        if self.text.contains("\r\n") { "\r\n" } else { "\n" }
    }
}

fn header_pattern(label: &str) -> Result<Regex> {
    let pattern = format!(r"(?m)^[ \t]*{}:[ \t]*\|[ \t]*\r?$", regex::escape(label));
    Regex::new(&pattern).map_err(|e| Error::InvalidLabel {
        label: label.to_string(),
        message: e.to_string(),
    })
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Byte range of the indented body following a header that ends at
/// `header_end`, or `None` when no indented line follows it.
fn body_span(source: &str, header_end: usize) -> Option<Range<usize>> {
    // The header must be terminated by a newline for a body to follow.
    if !source[header_end..].starts_with('\n') {
        return None;
    }
    let body_start = header_end + 1;

    let mut cursor = body_start;
    let mut body_end = body_start;
    for line in source[body_start..].split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        if !is_blank(content) && !content.starts_with([' ', '\t']) {
            break;
        }
        cursor += line.len();
        if !is_blank(content) {
            body_end = cursor;
        }
    }

    (body_end > body_start).then_some(body_start..body_end)
}

/// Find the first `<label>: |` block in `source`.
///
/// Blank lines inside the block belong to it, but trailing blank lines do
/// not: they stay with whatever follows the block in the document.
/// A header with no indented body is not a block; the search moves on to
/// the next header.
pub fn locate(source: &str, label: &str) -> Result<EmbeddedBlock> {
    let header = header_pattern(label)?;
    let mut blocks = header
        .find_iter(source)
        .filter_map(|found| body_span(source, found.end()));
    let Some(span) = blocks.next() else {
        return Err(Error::block_not_found(label));
    };
    if blocks.next().is_some() {
        tracing::warn!(label, "Document has more than one block for label; using the first");
    }

    let text = source[span.clone()].to_string();
    let indent = detect_indent(&text);
    tracing::debug!(
        label,
        start = span.start,
        end = span.end,
        indent_width = indent.len(),
        "Located embedded block"
    );

    Ok(EmbeddedBlock {
        label: label.to_string(),
        span,
        text,
        indent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LABEL: &str = "console-configuration.json";

    #[test]
    fn locates_block_after_header() {
        let source = "data:\n  console-configuration.json: |\n    {\n      \"a\": 1\n    }\nkind: ConfigMap\n";
        let block = locate(source, LABEL).unwrap();
        assert_eq!(block.text, "    {\n      \"a\": 1\n    }\n");
        assert_eq!(block.indent, "    ");
        assert_eq!(&source[block.span.clone()], block.text);
        assert_eq!(&source[block.span.end..], "kind: ConfigMap\n");
    }

    #[test]
    fn missing_header_is_block_not_found() {
        let err = locate("data:\n  other.json: |\n    {}\n", LABEL).unwrap_err();
        assert!(matches!(err, Error::BlockNotFound { ref label } if label == LABEL));
    }

    #[test]
    fn header_without_body_is_block_not_found() {
        let err = locate("console-configuration.json: |\nkind: x\n", LABEL).unwrap_err();
        assert!(matches!(err, Error::BlockNotFound { .. }));
    }

    #[test]
    fn label_is_matched_literally() {
        // The dot in the label must not match arbitrary characters.
        let source = "console-configurationXjson: |\n  {}\n";
        assert!(locate(source, LABEL).is_err());
    }

    #[test]
    fn header_requires_block_scalar_marker() {
        let source = "console-configuration.json: '{}'\n";
        assert!(locate(source, LABEL).is_err());
    }

    #[test]
    fn interior_blank_lines_are_kept_but_trailing_ones_are_not() {
        let source = "x: |\n  a\n\n  b\n\n\ny: 1\n";
        let block = locate(source, "x").unwrap();
        assert_eq!(block.text, "  a\n\n  b\n");
        assert_eq!(&source[block.span.end..], "\n\ny: 1\n");
    }

    #[test]
    fn body_may_run_to_end_of_input_without_newline() {
        let source = "x: |\n  a\n  b";
        let block = locate(source, "x").unwrap();
        assert_eq!(block.text, "  a\n  b");
        assert_eq!(block.span.end, source.len());
    }

    #[test]
    fn first_of_multiple_blocks_is_used() {
        let source = "x: |\n  first\ny: 1\nx: |\n  second\n";
        let block = locate(source, "x").unwrap();
        assert_eq!(block.text, "  first\n");
    }

    #[test]
    fn crlf_header_is_recognised() {
        let source = "x: |\r\n  a\r\nz: 2\r\n";
        let block = locate(source, "x").unwrap();
        assert_eq!(block.text, "  a\r\n");
    }

    #[test]
    fn crlf_document_imports_unchanged() {
        let source = "data:\r\n  console-configuration.json: |\r\n    {\r\n      \"savedQueries\": []\r\n    }\r\nkind: x\r\n";
        let settings = crate::Settings::default();
        let flat = crate::export(source, &settings).unwrap();
        assert_eq!(crate::import(&flat, source, &settings).unwrap(), source);
    }

    #[test]
    fn line_ending_follows_block_body() {
        assert_eq!(locate("x: |\r\n  a\r\n", "x").unwrap().line_ending(), "\r\n");
        assert_eq!(locate("x: |\n  a\n", "x").unwrap().line_ending(), "\n");
    }

    #[test]
    fn header_without_body_is_skipped_for_a_later_block() {
        let source = "x: |\ny: 1\nx: |\n  second\n";
        let block = locate(source, "x").unwrap();
        assert_eq!(block.text, "  second\n");
        assert_eq!(block.span.start, source.len() - "  second\n".len());
    }

    #[test]
    fn content_strips_common_indent() {
        let source = "  x: |\n    {\n      \"k\": true\n    }\n";
        let block = locate(source, "x").unwrap();
        assert_eq!(block.content(), "{\n  \"k\": true\n}");
    }
}
