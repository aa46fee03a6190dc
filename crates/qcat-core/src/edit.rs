//! Text splicing and the edits it produces

use std::ops::Range;

/// A replacement of one byte range in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Range replaced in the source the edit was made against
    pub span: Range<usize>,
    /// Text that occupied `span` before the edit
    pub old_content: String,
    /// Text that replaced it
    pub new_content: String,
}

impl Edit {
    /// An edit replacing `span` of `source` with `replacement`
    pub fn replace(source: &str, span: Range<usize>, replacement: &str) -> Self {
        Self {
            old_content: source[span.clone()].to_string(),
            span,
            new_content: replacement.to_string(),
        }
    }

    /// Apply the edit to `source`, which must be the text it was made against.
    pub fn apply(&self, source: &str) -> String {
        splice_text(source, self.span.clone(), &self.new_content)
    }

    /// Whether applying the edit changes anything
    pub fn is_noop(&self) -> bool {
        self.old_content == self.new_content
    }
}

fn splice_text(source: &str, span: Range<usize>, replacement: &str) -> String {
    let mut result =
        String::with_capacity(source.len() - (span.end - span.start) + replacement.len());
    result.push_str(&source[..span.start]);
    result.push_str(replacement);
    result.push_str(&source[span.end..]);
    result
}

/// Replace `span` of `source` with `replacement`.
///
/// Everything outside the span is copied through untouched. `span` must lie
/// on character boundaries of `source`.
pub fn splice(source: &str, span: Range<usize>, replacement: &str) -> (String, Edit) {
    let edit = Edit::replace(source, span, replacement);
    tracing::debug!(
        start = edit.span.start,
        end = edit.span.end,
        new_len = edit.new_content.len(),
        "Splicing block"
    );
    (edit.apply(source), edit)
}
