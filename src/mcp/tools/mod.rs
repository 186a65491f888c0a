// src/mcp/tools/mod.rs
// Per-entity tool handlers

pub mod cases;
pub mod cycles;
pub mod environments;
pub mod executions;
pub mod folders;
pub mod links;
pub mod plans;
pub mod priorities;
pub mod statuses;

#[cfg(test)]
mod flow_tests;

use serde_json::{Map, Value};

/// Default page size for entity listings.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Default page size for metadata listings (statuses, priorities, environments).
pub const METADATA_PAGE_SIZE: u32 = 10;

// Overlay helpers for merge-before-write updates. Empty strings, empty
// arrays, and zero are treated as not provided; the stored value is kept.

pub(crate) fn overlay_string(record: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(v) = value
        && !v.is_empty()
    {
        record.insert(key.to_string(), Value::String(v.clone()));
    }
}

pub(crate) fn overlay_number(record: &mut Map<String, Value>, key: &str, value: Option<i64>) {
    if let Some(v) = value
        && v != 0
    {
        record.insert(key.to_string(), Value::from(v));
    }
}

pub(crate) fn overlay_array(record: &mut Map<String, Value>, key: &str, value: &Option<Vec<String>>) {
    if let Some(v) = value
        && !v.is_empty()
    {
        record.insert(
            key.to_string(),
            Value::Array(v.iter().cloned().map(Value::String).collect()),
        );
    }
}

/// Objects overlay on presence: an explicit empty map replaces the stored
/// one, unlike empty strings and arrays.
pub(crate) fn overlay_object(
    record: &mut Map<String, Value>,
    key: &str,
    value: &Option<Map<String, Value>>,
) {
    if let Some(v) = value {
        record.insert(key.to_string(), Value::Object(v.clone()));
    }
}

/// Overlay by presence alone, for fields where an explicit empty value is a
/// meaningful write (e.g. clearing a cycle description).
pub(crate) fn overlay_present(record: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        record.insert(key.to_string(), Value::String(v.clone()));
    }
}
