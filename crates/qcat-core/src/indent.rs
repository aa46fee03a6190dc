//! Uniform indentation handling for embedded blocks

/// Leading run of spaces and tabs on the first non-blank line of `block`.
pub fn detect_indent(block: &str) -> String {
    block
        .lines()
        .find(|line| !line.trim().is_empty())
        .map(|line| {
            line.chars()
                .take_while(|c| *c == ' ' || *c == '\t')
                .collect()
        })
        .unwrap_or_default()
}

/// Remove `indent` from every line that starts with it.
///
/// Lines without the prefix (typically blank ones) are kept as they are.
/// The result is joined with `\n` and carries no trailing newline.
pub fn strip_indent(block: &str, indent: &str) -> String {
    block
        .lines()
        .map(|line| line.strip_prefix(indent).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix every line of `text` with `indent`, blank lines included, and
/// end each line with `newline` (`\n` or `\r\n`).
pub fn reapply_indent(text: &str, indent: &str, newline: &str) -> String {
    let mut out = String::with_capacity(text.len() + indent.len() * 8);
    for line in text.lines() {
        out.push_str(indent);
        out.push_str(line);
        out.push_str(newline);
    }
    if out.is_empty() {
        out.push_str(newline);
    }
    out
}
