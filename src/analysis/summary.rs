//! Combined structure summary for a parsed document

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::analysis::classify::{TypeLabel, classify};
use crate::analysis::measure::{nesting_depth, total_items};

/// Synthetic key describing an array's element type in a summary
pub const ARRAY_ITEMS_KEY: &str = "(array items)";

/// Shape summary of one parsed document
///
/// Built fresh per [`summarize`] call. `top_level_keys` preserves input
/// order, which is why it is an `IndexMap` rather than a hash or btree map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureSummary {
    pub root_type: TypeLabel,
    pub top_level_count: usize,
    pub top_level_keys: IndexMap<String, TypeLabel>,
    pub nesting_depth: usize,
    pub total_items: usize,
}

/// Summarize the shape of a parsed document
///
/// Total over any well-formed value, including scalars and empty
/// containers. For arrays, only the first element is sampled for the
/// `"(array items)"` entry; when that element is an object, its keys are
/// surfaced as `"[0].<key>"` entries so a list-of-records payload still
/// shows its field types.
pub fn summarize(value: &Value) -> StructureSummary {
    let (top_level_count, top_level_keys) = match value {
        Value::Object(map) => {
            let keys = map
                .iter()
                .map(|(key, v)| (key.clone(), classify(v)))
                .collect();
            (map.len(), keys)
        }
        Value::Array(items) => (items.len(), array_key_listing(items)),
        _ => (0, IndexMap::new()),
    };

    StructureSummary {
        root_type: classify(value),
        top_level_count,
        top_level_keys,
        nesting_depth: nesting_depth(value),
        total_items: total_items(value),
    }
}

fn array_key_listing(items: &[Value]) -> IndexMap<String, TypeLabel> {
    let mut keys = IndexMap::new();

    let Some(first) = items.first() else {
        keys.insert(ARRAY_ITEMS_KEY.to_string(), TypeLabel::Empty);
        return keys;
    };

    keys.insert(ARRAY_ITEMS_KEY.to_string(), classify(first));

    if let Value::Object(map) = first {
        for (key, v) in map {
            keys.insert(format!("[0].{}", key), classify(v));
        }
    }

    keys
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;
