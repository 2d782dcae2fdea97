// Value graphs instantiated from type definitions
//
// A `Value` is one node of a concrete data graph shaped by a `TypeDef`.
// Instantiation fills in neutral defaults (zero, empty, unselected);
// callers then populate fields by name through `StructValue`.

use std::mem;

use crate::internal::error::{Error, Result};
use crate::typedef::{TypeCode, TypeDef};

pub mod json;

/// A concrete value node.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Unset value
    Null,
    /// Boolean scalar
    Boolean(bool),
    /// 8-bit signed integer scalar
    Int8(i8),
    /// 16-bit signed integer scalar
    Int16(i16),
    /// 32-bit signed integer scalar
    Int32(i32),
    /// 64-bit signed integer scalar
    Int64(i64),
    /// 8-bit unsigned integer scalar
    UInt8(u8),
    /// 16-bit unsigned integer scalar
    UInt16(u16),
    /// 32-bit unsigned integer scalar
    UInt32(u32),
    /// 64-bit unsigned integer scalar
    UInt64(u64),
    /// 32-bit float scalar
    Float32(f32),
    /// 64-bit float scalar
    Float64(f64),
    /// UTF-8 string scalar
    String(String),
    /// Variant holding any value, unselected when `None`
    Any(Option<Box<Value>>),
    /// Boolean array
    BooleanArray(Vec<bool>),
    /// 8-bit signed integer array
    Int8Array(Vec<i8>),
    /// 16-bit signed integer array
    Int16Array(Vec<i16>),
    /// 32-bit signed integer array
    Int32Array(Vec<i32>),
    /// 64-bit signed integer array
    Int64Array(Vec<i64>),
    /// 8-bit unsigned integer array
    UInt8Array(Vec<u8>),
    /// 16-bit unsigned integer array
    UInt16Array(Vec<u16>),
    /// 32-bit unsigned integer array
    UInt32Array(Vec<u32>),
    /// 64-bit unsigned integer array
    UInt64Array(Vec<u64>),
    /// 32-bit float array
    Float32Array(Vec<f32>),
    /// 64-bit float array
    Float64Array(Vec<f64>),
    /// String array
    StringArray(Vec<String>),
    /// Array of variants
    AnyArray(Vec<Value>),
    /// Structure with ordered named fields
    Struct(StructValue),
    /// Array of structures
    StructArray(Vec<StructValue>),
    /// Union value: selected alternative name and value, unselected when `None`
    Union(Option<Box<(String, Value)>>),
    /// Array of union values
    UnionArray(Vec<Value>),
}

impl Value {
    /// Instantiates the neutral default value graph for a definition.
    ///
    /// Numerics default to zero, booleans to false, strings and arrays to
    /// empty, structs recurse into their members, and unions/variants start
    /// unselected.
    pub fn default_for(def: &TypeDef) -> Result<Value> {
        let value = match def.code() {
            TypeCode::Null => {
                return Err(Error::TypeError(
                    "Cannot instantiate a value for an unset type code".to_string(),
                ))
            }
            TypeCode::Bool => Value::Boolean(false),
            TypeCode::Int8 => Value::Int8(0),
            TypeCode::Int16 => Value::Int16(0),
            TypeCode::Int32 => Value::Int32(0),
            TypeCode::Int64 => Value::Int64(0),
            TypeCode::UInt8 => Value::UInt8(0),
            TypeCode::UInt16 => Value::UInt16(0),
            TypeCode::UInt32 => Value::UInt32(0),
            TypeCode::UInt64 => Value::UInt64(0),
            TypeCode::Float32 => Value::Float32(0.0),
            TypeCode::Float64 => Value::Float64(0.0),
            TypeCode::String => Value::String(String::new()),
            TypeCode::Any => Value::Any(None),
            TypeCode::BoolArray => Value::BooleanArray(Vec::new()),
            TypeCode::Int8Array => Value::Int8Array(Vec::new()),
            TypeCode::Int16Array => Value::Int16Array(Vec::new()),
            TypeCode::Int32Array => Value::Int32Array(Vec::new()),
            TypeCode::Int64Array => Value::Int64Array(Vec::new()),
            TypeCode::UInt8Array => Value::UInt8Array(Vec::new()),
            TypeCode::UInt16Array => Value::UInt16Array(Vec::new()),
            TypeCode::UInt32Array => Value::UInt32Array(Vec::new()),
            TypeCode::UInt64Array => Value::UInt64Array(Vec::new()),
            TypeCode::Float32Array => Value::Float32Array(Vec::new()),
            TypeCode::Float64Array => Value::Float64Array(Vec::new()),
            TypeCode::StringArray => Value::StringArray(Vec::new()),
            TypeCode::AnyArray => Value::AnyArray(Vec::new()),
            TypeCode::Struct => Value::Struct(StructValue::default_for(def)?),
            TypeCode::StructArray => Value::StructArray(Vec::new()),
            TypeCode::Union => Value::Union(None),
            TypeCode::UnionArray => Value::UnionArray(Vec::new()),
        };
        Ok(value)
    }

    /// Returns the struct fields of this value, if it is a struct.
    pub fn as_struct(&self) -> Option<&StructValue> {
        match self {
            Value::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns the mutable struct fields of this value, if it is a struct.
    pub fn as_struct_mut(&mut self) -> Option<&mut StructValue> {
        match self {
            Value::Struct(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Ordered named fields of a struct value.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
    id: Option<String>,
    fields: Vec<(String, Value)>,
}

impl StructValue {
    fn default_for(def: &TypeDef) -> Result<StructValue> {
        let mut fields = Vec::with_capacity(def.members().len());
        for member in def.members() {
            fields.push((member.name().to_string(), Value::default_for(member.def())?));
        }
        Ok(StructValue {
            id: def.id().map(str::to_string),
            fields,
        })
    }

    /// Returns the struct's type identifier, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the ordered field list.
    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    /// Returns the value of the named field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Returns the mutable value of the named field.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields
            .iter_mut()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Replaces the named field's value.
    ///
    /// The replacement must be the same variant as the stored value; a
    /// schema never changes shape after instantiation.
    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        let current = self.get_mut(name).ok_or_else(|| {
            Error::ValueError(format!("No field named '{}' in struct value", name))
        })?;
        if mem::discriminant(current) != mem::discriminant(&value) {
            return Err(Error::ValueError(format!(
                "Type mismatch for field '{}': expected {:?}, got {:?}",
                name, current, value
            )));
        }
        *current = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typedef::members;

    fn sample_def() -> TypeDef {
        TypeDef::structure(
            "sample_t",
            vec![
                members::int32("count"),
                members::string_array("names"),
                members::structure("inner", None, vec![members::float64("level")]),
            ],
        )
    }

    #[test]
    fn test_default_instantiation() {
        let value = sample_def().create().unwrap();
        let fields = value.as_struct().unwrap();

        assert_eq!(fields.id(), Some("sample_t"));
        assert_eq!(fields.get("count"), Some(&Value::Int32(0)));
        assert_eq!(fields.get("names"), Some(&Value::StringArray(Vec::new())));

        let inner = fields.get("inner").unwrap().as_struct().unwrap();
        assert_eq!(inner.get("level"), Some(&Value::Float64(0.0)));
    }

    #[test]
    fn test_set_replaces_matching_variant() {
        let mut value = sample_def().create().unwrap();
        let fields = value.as_struct_mut().unwrap();

        fields
            .set("names", Value::StringArray(vec!["a".to_string()]))
            .unwrap();
        assert_eq!(
            fields.get("names"),
            Some(&Value::StringArray(vec!["a".to_string()]))
        );
    }

    #[test]
    fn test_set_rejects_unknown_field_and_wrong_variant() {
        let mut value = sample_def().create().unwrap();
        let fields = value.as_struct_mut().unwrap();

        assert!(fields.set("missing", Value::Int32(1)).is_err());
        assert!(fields.set("count", Value::String("1".to_string())).is_err());
        // Failed sets leave the stored value untouched
        assert_eq!(fields.get("count"), Some(&Value::Int32(0)));
    }

    #[test]
    fn test_unset_code_cannot_instantiate() {
        let def = TypeDef::scalar(TypeCode::Null);
        assert!(def.create().is_err());
    }

    #[test]
    fn test_union_and_any_start_unselected() {
        let def = TypeDef::structure(
            None,
            vec![
                members::union_of("choice", None, vec![members::int32("a")]),
                members::any("extra"),
            ],
        );
        let value = def.create().unwrap();
        let fields = value.as_struct().unwrap();

        assert_eq!(fields.get("choice"), Some(&Value::Union(None)));
        assert_eq!(fields.get("extra"), Some(&Value::Any(None)));
    }
}
