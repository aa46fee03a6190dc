//! Import command implementation

use std::path::Path;

use colored::Colorize;
use qcat_core::diff::similarity;
use qcat_core::{Document, Settings, parse_flat, unified_diff};

use super::query_count;
use crate::error::{CliError, Result};
use crate::io::{read_text, write_atomic};

/// Run the import command
///
/// Parses the plain text at `plain`, swaps it in for the catalog of the
/// document at `yaml`, and writes the result to `output`. With `dry_run`
/// the change is printed as a unified diff and nothing is written.
pub fn run_import(
    yaml: &Path,
    plain: &Path,
    output: Option<&Path>,
    dry_run: bool,
    settings: &Settings,
) -> Result<()> {
    let categories = parse_flat(&read_text(plain)?)?;
    let source = read_text(yaml)?;
    let mut document = Document::parse(&source, settings)?;

    let queries = query_count(&categories);
    let category_count = categories.len();
    let edit = document.replace_categories(categories)?;
    tracing::debug!(
        start = edit.span.start,
        end = edit.span.end,
        unchanged = edit.is_noop(),
        "Prepared import"
    );

    if dry_run {
        if edit.is_noop() {
            println!("{} No changes. Document already matches.", "OK".green().bold());
        } else {
            print!(
                "{}",
                unified_diff(document.original_source(), document.source())
            );
            println!(
                "{} {:.0}% of lines unchanged",
                "[dry-run]".yellow(),
                similarity(document.original_source(), document.source()) * 100.0
            );
        }
        return Ok(());
    }

    let Some(output) = output else {
        return Err(CliError::user(
            "an output path is required unless --dry-run is given",
        ));
    };
    write_atomic(output, document.source())?;

    println!(
        "{} Imported {} queries in {} categories into {}",
        "OK".green().bold(),
        queries,
        category_count,
        output.display().to_string().cyan()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DOCUMENT: &str = "data:\n  console-configuration.json: |\n    {\n      \"readOnly\": true,\n      \"savedQueries\": []\n    }\nkind: ConfigMap\n";

    #[test]
    fn import_writes_updated_document() {
        let temp = TempDir::new().unwrap();
        let yaml = temp.path().join("console.yaml");
        let plain = temp.path().join("queries.txt");
        let output = temp.path().join("out.yaml");
        fs::write(&yaml, DOCUMENT).unwrap();
        fs::write(&plain, "Category: New\n=====\nQuery Name: q\n-----\nSELECT 1\n=====\n").unwrap();

        run_import(&yaml, &plain, Some(&output), false, &Settings::default()).unwrap();

        let updated = fs::read_to_string(&output).unwrap();
        assert!(updated.contains("\"title\": \"New\""));
        assert!(updated.contains("\"readOnly\": true"));
        assert!(updated.ends_with("    }\nkind: ConfigMap\n"));
        assert_eq!(fs::read_to_string(&yaml).unwrap(), DOCUMENT);
    }

    #[test]
    fn dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let yaml = temp.path().join("console.yaml");
        let plain = temp.path().join("queries.txt");
        let output = temp.path().join("out.yaml");
        fs::write(&yaml, DOCUMENT).unwrap();
        fs::write(&plain, "Category: New\n=====\n").unwrap();

        run_import(&yaml, &plain, Some(&output), true, &Settings::default()).unwrap();
        assert!(!output.exists());
    }

    #[test]
    fn malformed_plain_text_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let yaml = temp.path().join("console.yaml");
        let plain = temp.path().join("queries.txt");
        let output = temp.path().join("out.yaml");
        fs::write(&yaml, DOCUMENT).unwrap();
        fs::write(&plain, "Category: New\n=====\nQuery Name: q\nSELECT 1\n").unwrap();

        let err = run_import(&yaml, &plain, Some(&output), false, &Settings::default()).unwrap_err();
        assert!(err.to_string().contains("line 4"));
        assert!(!output.exists());
    }
}
