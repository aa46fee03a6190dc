//! JSON codec for the console configuration object
//!
//! Only the category list is decoded into typed values. Every other
//! top-level field is kept as raw JSON, in its original position, so that
//! re-serializing the object changes nothing but the catalog.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Title used for a category that has none
pub const DEFAULT_TITLE: &str = "No Category Title";

/// Name used for a query that has none
pub const DEFAULT_QUERY_NAME: &str = "No Query Name";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_query_name() -> String {
    DEFAULT_QUERY_NAME.to_string()
}

fn title_or_default<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_title))
}

fn name_or_default<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_query_name))
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A named group of saved queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default = "default_title", deserialize_with = "title_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub queries: Vec<QueryItem>,
}

impl Category {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            queries: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_query(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.queries.push(QueryItem::new(name, text));
        self
    }
}

/// A single saved query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryItem {
    #[serde(default = "default_query_name", deserialize_with = "name_or_default")]
    pub name: String,
    /// Query text; stored under `value` in the configuration object
    #[serde(rename = "value", default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl QueryItem {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// The decoded configuration object
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    root: Map<String, Value>,
    categories_key: String,
    categories: Vec<Category>,
}

impl ConsoleConfig {
    /// Parse block content as a JSON object holding a category list under
    /// `categories_key`. A missing or `null` list decodes as empty.
    pub fn parse(text: &str, categories_key: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| Error::structured(e.to_string()))?;
        let Value::Object(root) = value else {
            return Err(Error::structured(
                "expected a JSON object at the top level of the block",
            ));
        };

        let categories = match root.get(categories_key) {
            None | Some(Value::Null) => Vec::new(),
            Some(list) => Vec::<Category>::deserialize(list)
                .map_err(|e| Error::structured(format!("`{categories_key}`: {e}")))?,
        };

        Ok(Self {
            root,
            categories_key: categories_key.to_string(),
            categories,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Replace the category list, keeping the key's position among the
    /// other fields. A key that was absent is appended.
    pub fn replace_categories(&mut self, categories: Vec<Category>) -> Result<()> {
        let value = serde_json::to_value(&categories)?;
        self.root.insert(self.categories_key.clone(), value);
        self.categories = categories;
        Ok(())
    }

    /// Pretty JSON with two-space indentation and source key order
    pub fn to_pretty_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn decodes_categories_with_defaults() {
        let config = ConsoleConfig::parse(
            r#"{"savedQueries": [{"queries": [{"value": "SELECT 1"}]}, {"title": "T", "description": null}]}"#,
            "savedQueries",
        )
        .unwrap();

        assert_eq!(
            config.categories(),
            &[
                Category {
                    title: DEFAULT_TITLE.to_string(),
                    description: String::new(),
                    queries: vec![QueryItem::new(DEFAULT_QUERY_NAME, "SELECT 1")],
                },
                Category::new("T"),
            ]
        );
    }

    #[test]
    fn missing_category_list_is_empty() {
        let config = ConsoleConfig::parse(r#"{"readOnly": true}"#, "savedQueries").unwrap();
        assert!(config.categories().is_empty());
    }

    #[test]
    fn invalid_json_reports_location() {
        let err = ConsoleConfig::parse("{\n  \"a\": ,\n}", "savedQueries").unwrap_err();
        match err {
            Error::MalformedStructuredData { message } => assert!(message.contains("line 2")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = ConsoleConfig::parse("[1, 2]", "savedQueries").unwrap_err();
        assert!(matches!(err, Error::MalformedStructuredData { .. }));
    }

    #[test]
    fn wrong_category_shape_is_rejected() {
        let err = ConsoleConfig::parse(r#"{"savedQueries": "nope"}"#, "savedQueries").unwrap_err();
        assert!(matches!(err, Error::MalformedStructuredData { .. }));
    }

    #[test]
    fn replacing_categories_keeps_key_order() {
        let mut config = ConsoleConfig::parse(
            r#"{"githubBanner": false, "savedQueries": [], "readOnly": true}"#,
            "savedQueries",
        )
        .unwrap();
        config
            .replace_categories(vec![Category::new("A").with_query("q", "SELECT 2")])
            .unwrap();

        let rendered = config.to_pretty_string().unwrap();
        let banner = rendered.find("githubBanner").unwrap();
        let saved = rendered.find("savedQueries").unwrap();
        let read_only = rendered.find("readOnly").unwrap();
        assert!(banner < saved && saved < read_only);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["readOnly"], json!(true));
    }

    #[test]
    fn serializes_query_text_under_value() {
        let value = serde_json::to_value(QueryItem::new("Count", "SELECT 1")).unwrap();
        assert_eq!(value, json!({"name": "Count", "value": "SELECT 1"}));
    }
}
