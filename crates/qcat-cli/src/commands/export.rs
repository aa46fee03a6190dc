//! Export command implementation

use std::path::Path;

use colored::Colorize;
use qcat_core::{Document, Settings};

use super::query_count;
use crate::error::Result;
use crate::io::{read_text, write_atomic};

/// Run the export command
///
/// Reads the document at `input` and writes its catalog as plain text to
/// `output`.
pub fn run_export(input: &Path, output: &Path, settings: &Settings) -> Result<()> {
    let source = read_text(input)?;
    let document = Document::parse(&source, settings)?;
    let flat = document.export_flat();

    write_atomic(output, &flat)?;

    println!(
        "{} Exported {} queries in {} categories to {}",
        "OK".green().bold(),
        query_count(document.categories()),
        document.categories().len(),
        output.display().to_string().cyan()
    );
    Ok(())
}
