//! Nesting depth and recursive item counts

use serde_json::Value;

/// True for the container variants (objects and arrays)
pub(crate) fn is_container(value: &Value) -> bool {
    value.is_object() || value.is_array()
}

/// Maximum container nesting depth of a value
///
/// Scalars are depth 0; a container is 1 plus the deepest container among
/// its children, so empty containers come out at 1. Recursion depth is
/// bounded by serde_json's own parse recursion limit for any tree produced
/// by this crate's ingestion paths.
pub fn nesting_depth(value: &Value) -> usize {
    match value {
        Value::Object(map) => {
            if map.is_empty() {
                return 1;
            }
            1 + map
                .values()
                .filter(|v| is_container(v))
                .map(nesting_depth)
                .max()
                .unwrap_or(0)
        }
        Value::Array(items) => {
            if items.is_empty() {
                return 1;
            }
            1 + items
                .iter()
                .filter(|v| is_container(v))
                .map(nesting_depth)
                .max()
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// Total recursive item count of a value
///
/// Each container contributes its own immediate entry/element count plus
/// the counts of any nested containers. Scalars contribute 0; their slot
/// is already covered by the enclosing container's own count.
pub fn total_items(value: &Value) -> usize {
    match value {
        Value::Object(map) => {
            map.len()
                + map
                    .values()
                    .filter(|v| is_container(v))
                    .map(total_items)
                    .sum::<usize>()
        }
        Value::Array(items) => {
            items.len()
                + items
                    .iter()
                    .filter(|v| is_container(v))
                    .map(total_items)
                    .sum::<usize>()
        }
        _ => 0,
    }
}

#[cfg(test)]
#[path = "measure_tests.rs"]
mod measure_tests;
