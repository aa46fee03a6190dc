//! Command implementations for qcat-cli

pub mod check;
pub mod export;
pub mod import;

pub use check::run_check;
pub use export::run_export;
pub use import::run_import;

use qcat_core::Category;

/// Total number of queries across categories
pub(crate) fn query_count(categories: &[Category]) -> usize {
    categories.iter().map(|c| c.queries.len()).sum()
}
