//! Line diffs between document versions

use similar::TextDiff;

/// Unified diff of `old` against `new` with three lines of context.
///
/// Returns an empty string when the texts are equal.
pub fn unified_diff(old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header("original", "updated")
        .to_string()
}

/// Similarity ratio between two texts, from 0.0 to 1.0
pub fn similarity(old: &str, new: &str) -> f64 {
    TextDiff::from_lines(old, new).ratio() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_texts_have_no_diff() {
        assert_eq!(unified_diff("a\nb\n", "a\nb\n"), "");
        assert_eq!(similarity("a\n", "a\n"), 1.0);
    }

    #[test]
    fn diff_shows_changed_lines() {
        let diff = unified_diff("a\nb\nc\n", "a\nB\nc\n");
        assert!(diff.starts_with("--- original\n+++ updated\n"));
        assert!(diff.contains("-b\n"));
        assert!(diff.contains("+B\n"));
        assert!(diff.contains(" a\n"));
    }
}
