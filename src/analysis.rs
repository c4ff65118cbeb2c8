//! Structure analysis for parsed JSON documents
//!
//! Pure functions over an already-parsed value tree: type classification,
//! nesting depth, recursive item counts, and the combined summary record.

mod classify;
mod measure;
mod summary;

// Re-export public types
pub use classify::{TypeLabel, classify};
pub use measure::{nesting_depth, total_items};
pub use summary::{ARRAY_ITEMS_KEY, StructureSummary, summarize};
