//! Saved-query catalog round-tripping
//!
//! Extracts the JSON catalog embedded as a block scalar inside a larger
//! configuration document, renders it as editable plain text, and splices
//! edited text back into the document without touching anything else.

pub mod block;
pub mod codec;
pub mod diff;
pub mod document;
pub mod edit;
pub mod error;
pub mod flat;
pub mod indent;
pub mod settings;

pub use block::{EmbeddedBlock, locate};
pub use codec::{Category, ConsoleConfig, QueryItem};
pub use diff::unified_diff;
pub use document::{Document, export, import};
pub use edit::{Edit, splice};
pub use error::{Error, Result};
pub use flat::{parse_flat, render_flat};
pub use settings::Settings;
