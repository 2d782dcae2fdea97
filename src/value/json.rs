// Value graph to JSON mapping
//
// One-way, lossy mapping used for inspection and debug output. Unselected
// unions and variants map to JSON null; f64 NaN/infinity also map to null
// since JSON has no representation for them.

use serde_json::Value as JsonValue;

use crate::value::{StructValue, Value};

/// Converts a value graph to a JSON value.
pub fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Boolean(v) => JsonValue::from(*v),
        Value::Int8(v) => JsonValue::from(*v),
        Value::Int16(v) => JsonValue::from(*v),
        Value::Int32(v) => JsonValue::from(*v),
        Value::Int64(v) => JsonValue::from(*v),
        Value::UInt8(v) => JsonValue::from(*v),
        Value::UInt16(v) => JsonValue::from(*v),
        Value::UInt32(v) => JsonValue::from(*v),
        Value::UInt64(v) => JsonValue::from(*v),
        Value::Float32(v) => JsonValue::from(*v),
        Value::Float64(v) => JsonValue::from(*v),
        Value::String(v) => JsonValue::from(v.clone()),
        Value::Any(v) => match v {
            Some(inner) => value_to_json(inner),
            None => JsonValue::Null,
        },
        Value::BooleanArray(v) => v.iter().copied().collect(),
        Value::Int8Array(v) => v.iter().copied().collect(),
        Value::Int16Array(v) => v.iter().copied().collect(),
        Value::Int32Array(v) => v.iter().copied().collect(),
        Value::Int64Array(v) => v.iter().copied().collect(),
        Value::UInt8Array(v) => v.iter().copied().collect(),
        Value::UInt16Array(v) => v.iter().copied().collect(),
        Value::UInt32Array(v) => v.iter().copied().collect(),
        Value::UInt64Array(v) => v.iter().copied().collect(),
        Value::Float32Array(v) => v.iter().copied().collect(),
        Value::Float64Array(v) => v.iter().copied().collect(),
        Value::StringArray(v) => v.iter().cloned().collect(),
        Value::AnyArray(v) => JsonValue::Array(v.iter().map(value_to_json).collect()),
        Value::Struct(fields) => struct_to_json(fields),
        Value::StructArray(v) => JsonValue::Array(v.iter().map(struct_to_json).collect()),
        Value::Union(v) => match v {
            Some(selected) => {
                let (name, inner) = selected.as_ref();
                let mut object = serde_json::Map::new();
                object.insert(name.clone(), value_to_json(inner));
                JsonValue::Object(object)
            }
            None => JsonValue::Null,
        },
        Value::UnionArray(v) => JsonValue::Array(v.iter().map(value_to_json).collect()),
    }
}

fn struct_to_json(fields: &StructValue) -> JsonValue {
    let mut object = serde_json::Map::new();
    for (name, value) in fields.fields() {
        object.insert(name.clone(), value_to_json(value));
    }
    JsonValue::Object(object)
}
