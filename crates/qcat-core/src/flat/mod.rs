//! The flat, human-editable rendering of a catalog
//!
//! ```text
//! Category: <title>
//! Description: <description>
//! ========================================
//! Query Name: <name>
//! ----------------------------------------
//! <query text, any number of lines>
//! ========================================
//!
//! ```

pub mod parse;
pub mod render;

pub use parse::{FlatParser, parse_flat};
pub use render::render_flat;

pub(crate) const CATEGORY_PREFIX: &str = "Category:";
pub(crate) const DESCRIPTION_PREFIX: &str = "Description:";
pub(crate) const QUERY_NAME_PREFIX: &str = "Query Name:";

/// Width of the `=` and `-` rules emitted by the renderer
pub const RULE_WIDTH: usize = 40;
