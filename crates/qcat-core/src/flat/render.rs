//! Catalog to flat text

use super::{CATEGORY_PREFIX, DESCRIPTION_PREFIX, QUERY_NAME_PREFIX, RULE_WIDTH};
use crate::codec::Category;

/// Render categories as flat text.
///
/// Only titles, descriptions, query names and query text are carried over.
/// Query text loses its trailing whitespace.
///
/// Titles, descriptions and query names must fit on one line. One holding
/// a line break is written as is and logged as a warning, and the parser
/// will not read the result back.
pub fn render_flat(categories: &[Category]) -> String {
    let double_rule = "=".repeat(RULE_WIDTH);
    let single_rule = "-".repeat(RULE_WIDTH);

    let mut lines: Vec<String> = Vec::new();
    for category in categories {
        warn_on_line_break("category title", &category.title);
        warn_on_line_break("category description", &category.description);
        lines.push(format!("{CATEGORY_PREFIX} {}", category.title));
        if !category.description.is_empty() {
            lines.push(format!("{DESCRIPTION_PREFIX} {}", category.description));
        }
        lines.push(double_rule.clone());

        for query in &category.queries {
            warn_on_line_break("query name", &query.name);
            lines.push(format!("{QUERY_NAME_PREFIX} {}", query.name));
            lines.push(single_rule.clone());
            lines.push(query.text.trim_end().to_string());
            lines.push(double_rule.clone());
            lines.push(String::new());
        }
        lines.push(String::new());
    }

    tracing::debug!(categories = categories.len(), "Rendered flat text");
    lines.join("\n")
}

fn warn_on_line_break(field: &str, value: &str) {
    if value.contains('\n') {
        tracing::warn!(field, value, "Line break in single-line field; output will not parse back");
    }
}
