//! Check command implementation
//!
//! Renders the catalog to plain text and parses it back. Anything the flat
//! format cannot represent (a query line made only of `=`, a multi-line
//! title, padding around names) shows up as a mismatch.

use std::path::Path;

use colored::Colorize;
use qcat_core::{Category, Document, Settings, parse_flat};

use super::query_count;
use crate::error::{CliError, Result};
use crate::io::read_text;

/// Run the check command
pub fn run_check(input: &Path, settings: &Settings) -> Result<()> {
    let source = read_text(input)?;
    let document = Document::parse(&source, settings)?;
    let expected = normalized(document.categories());
    let reparsed = parse_flat(&document.export_flat())?;

    if let Some(problem) = first_mismatch(&expected, &reparsed) {
        return Err(CliError::user(format!(
            "catalog does not survive a plain-text round trip: {problem}"
        )));
    }

    println!(
        "{} {} queries in {} categories round-trip cleanly",
        "OK".green().bold(),
        query_count(&expected),
        expected.len()
    );
    Ok(())
}

/// Categories as they should come back: query text loses trailing whitespace
fn normalized(categories: &[Category]) -> Vec<Category> {
    categories
        .iter()
        .map(|category| {
            let mut category = category.clone();
            for query in &mut category.queries {
                query.text = query.text.trim_end().to_string();
            }
            category
        })
        .collect()
}

fn first_mismatch(expected: &[Category], actual: &[Category]) -> Option<String> {
    for (index, want) in expected.iter().enumerate() {
        let Some(got) = actual.get(index) else {
            return Some(format!("category {:?} is lost", want.title));
        };
        if want.title != got.title || want.description != got.description {
            return Some(format!("category {:?} comes back as {:?}", want.title, got.title));
        }
        for (q_index, query) in want.queries.iter().enumerate() {
            if got.queries.get(q_index) != Some(query) {
                return Some(format!(
                    "query {:?} in category {:?} changes",
                    query.name, want.title
                ));
            }
        }
        if got.queries.len() != want.queries.len() {
            return Some(format!("category {:?} gains queries", want.title));
        }
    }
    if actual.len() > expected.len() {
        return Some(format!("{} extra categories appear", actual.len() - expected.len()));
    }
    None
}
