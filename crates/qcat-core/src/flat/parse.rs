//! Flat text back to a catalog
//!
//! Parsing is a line-driven state machine. [`LineKind::classify`] labels
//! each line, [`transition`] decides the next [`ParseState`] and the
//! [`Action`] to take, and [`FlatParser`] applies the actions.

use super::{CATEGORY_PREFIX, DESCRIPTION_PREFIX, QUERY_NAME_PREFIX};
use crate::codec::{Category, QueryItem};
use crate::error::{Error, Result};

/// Where the parser is within the flat text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Before the first category
    Init,
    /// After a `Category:` line, waiting for the `=` rule
    CategoryHeader { described: bool },
    /// Between queries of a category
    InCategory,
    /// After a `Query Name:` line, waiting for the `-` rule
    InQueryHeader,
    /// Collecting query text until the closing `=` rule
    InQueryValue,
}

/// What a single line looks like, independent of state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Category(&'a str),
    Description(&'a str),
    QueryName(&'a str),
    /// A line made only of `=` or only of `-`
    Rule(char),
    Text,
}

impl<'a> LineKind<'a> {
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Blank;
        }
        if let Some(rest) = line.strip_prefix(CATEGORY_PREFIX) {
            return Self::Category(rest.trim());
        }
        if let Some(rest) = line.strip_prefix(DESCRIPTION_PREFIX) {
            return Self::Description(rest.trim());
        }
        if let Some(rest) = line.strip_prefix(QUERY_NAME_PREFIX) {
            return Self::QueryName(rest.trim());
        }
        for rule in ['=', '-'] {
            if trimmed.chars().all(|c| c == rule) {
                return Self::Rule(rule);
            }
        }
        Self::Text
    }
}

/// Side effect of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    Skip,
    OpenCategory(&'a str),
    SetDescription(&'a str),
    OpenQuery(&'a str),
    /// Append the raw line to the open query
    AppendLine,
    CloseQuery,
}

/// A rule line that was required but not found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingRule {
    /// `=` after `Category:`
    Category,
    /// `-` after `Query Name:`
    Query,
}

impl MissingRule {
    fn describe(self, header_line: usize) -> String {
        match self {
            Self::Category => format!(
                "expected a '=' separator line after `{CATEGORY_PREFIX}` on line {header_line}"
            ),
            Self::Query => format!(
                "expected a '-' separator line after `{QUERY_NAME_PREFIX}` on line {header_line}"
            ),
        }
    }
}

/// Compute the next state and action for a line.
pub fn transition<'a>(
    state: ParseState,
    line: LineKind<'a>,
) -> std::result::Result<(ParseState, Action<'a>), MissingRule> {
    use ParseState::*;

    let next = match (state, line) {
        // Query text is literal: only the closing rule is recognised.
        (InQueryValue, LineKind::Rule('=')) => (InCategory, Action::CloseQuery),
        (InQueryValue, _) => (InQueryValue, Action::AppendLine),

        (_, LineKind::Blank) => (state, Action::Skip),

        (CategoryHeader { described: false }, LineKind::Description(text)) => (
            CategoryHeader { described: true },
            Action::SetDescription(text),
        ),
        (CategoryHeader { .. }, LineKind::Rule('=')) => (InCategory, Action::Skip),
        (CategoryHeader { .. }, _) => return Err(MissingRule::Category),

        (InQueryHeader, LineKind::Rule('-')) => (InQueryValue, Action::Skip),
        (InQueryHeader, _) => return Err(MissingRule::Query),

        (Init | InCategory, LineKind::Category(title)) => (
            CategoryHeader { described: false },
            Action::OpenCategory(title),
        ),
        (InCategory, LineKind::QueryName(name)) => (InQueryHeader, Action::OpenQuery(name)),

        // Anything else is stray formatting.
        (Init | InCategory, _) => (state, Action::Skip),
    };
    Ok(next)
}

#[derive(Debug)]
struct PendingQuery {
    name: String,
    lines: Vec<String>,
}

impl PendingQuery {
    fn finish(self) -> QueryItem {
        let text = self.lines.join("\n");
        QueryItem::new(self.name, text.trim_end())
    }
}

/// Incremental flat-text parser
#[derive(Debug)]
pub struct FlatParser {
    state: ParseState,
    categories: Vec<Category>,
    category: Option<Category>,
    query: Option<PendingQuery>,
    header_line: usize,
}

impl Default for FlatParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatParser {
    pub fn new() -> Self {
        Self {
            state: ParseState::Init,
            categories: Vec::new(),
            category: None,
            query: None,
            header_line: 0,
        }
    }

    /// Feed one line (without its terminator); `line_no` is 1-based.
    pub fn feed(&mut self, line_no: usize, line: &str) -> Result<()> {
        let (next, action) = transition(self.state, LineKind::classify(line))
            .map_err(|missing| Error::flat(line_no, missing.describe(self.header_line)))?;

        match action {
            Action::Skip => {}
            Action::OpenCategory(title) => {
                self.close_query();
                self.close_category();
                self.category = Some(Category::new(title));
                self.header_line = line_no;
            }
            Action::SetDescription(text) => {
                if let Some(category) = self.category.as_mut() {
                    category.description = text.to_string();
                }
            }
            Action::OpenQuery(name) => {
                self.close_query();
                self.query = Some(PendingQuery {
                    name: name.to_string(),
                    lines: Vec::new(),
                });
                self.header_line = line_no;
            }
            Action::AppendLine => {
                if let Some(query) = self.query.as_mut() {
                    query.lines.push(line.to_string());
                }
            }
            Action::CloseQuery => self.close_query(),
        }

        self.state = next;
        Ok(())
    }

    /// Close whatever is still open and return the categories.
    ///
    /// A missing closing rule after the last query is fine, but input that
    /// ends while a header still waits for its rule is not.
    pub fn finish(mut self) -> Result<Vec<Category>> {
        let missing = match self.state {
            ParseState::CategoryHeader { .. } => Some(MissingRule::Category),
            ParseState::InQueryHeader => Some(MissingRule::Query),
            _ => None,
        };
        if let Some(missing) = missing {
            return Err(Error::flat(
                self.header_line,
                format!("{} before end of input", missing.describe(self.header_line)),
            ));
        }

        self.close_query();
        self.close_category();
        Ok(self.categories)
    }

    fn close_query(&mut self) {
        if let Some(query) = self.query.take() {
            if let Some(category) = self.category.as_mut() {
                category.queries.push(query.finish());
            }
        }
    }

    fn close_category(&mut self) {
        if let Some(category) = self.category.take() {
            self.categories.push(category);
        }
    }
}

/// Parse flat text into categories.
pub fn parse_flat(text: &str) -> Result<Vec<Category>> {
    let mut parser = FlatParser::new();
    for (index, line) in text.lines().enumerate() {
        parser.feed(index + 1, line)?;
    }
    let categories = parser.finish()?;
    tracing::debug!(categories = categories.len(), "Parsed flat text");
    Ok(categories)
}
