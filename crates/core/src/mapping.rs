//! Event vocabulary mapping
//!
//! The events backend speaks Portuguese field names while the gateway's
//! external surface speaks English. The two directions are exact inverses
//! of each other, so creating an event and reading it back yields the same
//! external shape. Keys outside the map pass through untouched.

use serde_json::Value;

/// (external, backend) field name pairs
const FIELD_MAP: &[(&str, &str)] = &[
    ("title", "nome"),
    ("description", "descricao"),
    ("date", "data"),
    ("location", "local"),
    ("slots", "vagas"),
];

/// Translate an external event payload into the backend vocabulary.
///
/// Applied to create/update request bodies. Arrays are mapped element-wise;
/// non-object values are returned unchanged.
pub fn event_to_backend(value: Value) -> Value {
    map_value(value, |obj| {
        for (external, backend) in FIELD_MAP {
            rename(obj, external, backend);
        }
    })
}

/// Translate a backend event payload into the external vocabulary.
///
/// Applied to read/create/update response bodies. The backend's `_id`
/// surfaces as `id` when the document carries no `id` of its own.
pub fn event_from_backend(value: Value) -> Value {
    map_value(value, |obj| {
        for (external, backend) in FIELD_MAP {
            rename(obj, backend, external);
        }
        if !obj.contains_key("id") {
            rename(obj, "_id", "id");
        }
    })
}

fn map_value<F>(value: Value, apply: F) -> Value
where
    F: Fn(&mut serde_json::Map<String, Value>),
{
    match value {
        Value::Object(mut obj) => {
            apply(&mut obj);
            Value::Object(obj)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Value::Object(mut obj) => {
                        apply(&mut obj);
                        Value::Object(obj)
                    }
                    other => other,
                })
                .collect(),
        ),
        other => other,
    }
}

fn rename(obj: &mut serde_json::Map<String, Value>, from: &str, to: &str) {
    if let Some(v) = obj.remove(from) {
        obj.insert(to.to_string(), v);
    }
}
