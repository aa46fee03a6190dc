//! A configuration document with one embedded catalog block

use crate::block::{EmbeddedBlock, locate};
use crate::codec::{Category, ConsoleConfig};
use crate::edit::{Edit, splice};
use crate::error::Result;
use crate::flat::{parse_flat, render_flat};
use crate::indent::reapply_indent;
use crate::settings::Settings;

/// A host document treated as opaque text around its catalog block
#[derive(Debug, Clone)]
pub struct Document {
    /// Source as provided to `parse` (for is_modified tracking)
    original_source: String,
    /// Current source (differs from the original after edits)
    source: String,
    block: EmbeddedBlock,
    config: ConsoleConfig,
}

impl Document {
    /// Locate and decode the catalog block of `source`.
    pub fn parse(source: &str, settings: &Settings) -> Result<Self> {
        let block = locate(source, &settings.label)?;
        let config = ConsoleConfig::parse(&block.content(), &settings.categories_key)?;

        Ok(Self {
            original_source: source.to_string(),
            source: source.to_string(),
            block,
            config,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn original_source(&self) -> &str {
        &self.original_source
    }

    /// The block as currently present in `source`
    pub fn block(&self) -> &EmbeddedBlock {
        &self.block
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn categories(&self) -> &[Category] {
        self.config.categories()
    }

    /// Render the catalog as flat text
    pub fn export_flat(&self) -> String {
        render_flat(self.config.categories())
    }

    /// Swap the catalog for `categories` and splice the re-serialized
    /// block back in at the original indentation.
    pub fn replace_categories(&mut self, categories: Vec<Category>) -> Result<Edit> {
        self.config.replace_categories(categories)?;
        let body = reapply_indent(
            &self.config.to_pretty_string()?,
            &self.block.indent,
            self.block.line_ending(),
        );

        let (new_source, edit) = splice(&self.source, self.block.span.clone(), &body);
        tracing::debug!(
            label = %self.block.label,
            start = edit.span.start,
            end = edit.span.end,
            unchanged = edit.is_noop(),
            "Replaced catalog block"
        );
        self.source = new_source;
        self.block.span = edit.span.start..edit.span.start + body.len();
        self.block.text = body;

        Ok(edit)
    }

    /// Whether the document differs from its original source
    pub fn is_modified(&self) -> bool {
        self.source != self.original_source
    }
}

/// Export direction: document text to flat text.
pub fn export(document: &str, settings: &Settings) -> Result<String> {
    Ok(Document::parse(document, settings)?.export_flat())
}

/// Import direction: merge edited flat text into the document.
///
/// The flat text is parsed before the document is touched, so malformed
/// input never yields a partially updated document.
pub fn import(flat: &str, document: &str, settings: &Settings) -> Result<String> {
    let categories = parse_flat(flat)?;
    let mut doc = Document::parse(document, settings)?;
    let edit = doc.replace_categories(categories)?;
    if edit.is_noop() {
        tracing::debug!(label = %settings.label, "Catalog unchanged by import");
    }
    Ok(doc.source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SOURCE: &str = "apiVersion: v1\nkind: ConfigMap\ndata:\n  console-configuration.json: |\n    {\n      \"readOnly\": true,\n      \"savedQueries\": []\n    }\n---\nkind: Secret\n";

    #[test]
    fn parse_decodes_catalog() {
        let doc = Document::parse(SOURCE, &Settings::default()).unwrap();
        assert!(doc.categories().is_empty());
        assert_eq!(doc.block().indent, "    ");
        assert!(!doc.is_modified());
    }

    #[test]
    fn replace_categories_splices_reindented_json() {
        let mut doc = Document::parse(SOURCE, &Settings::default()).unwrap();
        let edit = doc
            .replace_categories(vec![Category::new("A").with_query("q", "SELECT 1")])
            .unwrap();

        assert!(doc.is_modified());
        assert_eq!(edit.apply(SOURCE), doc.source());
        assert_eq!(&SOURCE[edit.span.clone()], edit.old_content);
        assert!(doc.source().starts_with("apiVersion: v1\nkind: ConfigMap\ndata:\n  console-configuration.json: |\n    {\n"));
        assert!(doc.source().ends_with("    }\n---\nkind: Secret\n"));
        assert!(doc.source().contains("\n          \"title\": \"A\",\n"));
        assert_eq!(&doc.source()[doc.block().span.clone()], doc.block().text);
    }

    #[test]
    fn replacing_with_same_catalog_is_a_noop_edit() {
        let mut doc = Document::parse(SOURCE, &Settings::default()).unwrap();
        let edit = doc.replace_categories(Vec::new()).unwrap();
        assert!(edit.is_noop());
        assert!(!doc.is_modified());
    }

    #[test]
    fn unchanged_catalog_round_trips_through_import() {
        let flat = export(SOURCE, &Settings::default()).unwrap();
        let updated = import(&flat, SOURCE, &Settings::default()).unwrap();
        assert_eq!(updated, SOURCE);
    }
}
