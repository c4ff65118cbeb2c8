//! jshape library - Fetch, validate, and summarize the shape of JSON documents
//!
//! The analysis functions are pure and total over any parsed value; the
//! ingestion layer (text validation and URL fetching) is the only place
//! failures can originate.

pub mod analysis;
pub mod error;
pub mod export;
pub mod fetch;
pub mod input;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use analysis::{StructureSummary, TypeLabel, classify, nesting_depth, summarize, total_items};
pub use error::JshapeError;
