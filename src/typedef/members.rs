// Named-member constructors
//
// One helper per primitive and array-primitive kind, plus the compound
// forms, so builder code reads as a flat ordered member list.

use crate::typedef::code::TypeCode;
use crate::typedef::def::{Member, TypeDef};

/// Creates a `bool` member.
pub fn boolean(name: impl Into<String>) -> Member {
    Member::new(TypeCode::Bool, name)
}

/// Creates an `int8` member.
pub fn int8(name: impl Into<String>) -> Member {
    Member::new(TypeCode::Int8, name)
}

/// Creates an `int16` member.
pub fn int16(name: impl Into<String>) -> Member {
    Member::new(TypeCode::Int16, name)
}

/// Creates an `int32` member.
pub fn int32(name: impl Into<String>) -> Member {
    Member::new(TypeCode::Int32, name)
}

/// Creates an `int64` member.
pub fn int64(name: impl Into<String>) -> Member {
    Member::new(TypeCode::Int64, name)
}

/// Creates a `uint8` member.
pub fn uint8(name: impl Into<String>) -> Member {
    Member::new(TypeCode::UInt8, name)
}

/// Creates a `uint16` member.
pub fn uint16(name: impl Into<String>) -> Member {
    Member::new(TypeCode::UInt16, name)
}

/// Creates a `uint32` member.
pub fn uint32(name: impl Into<String>) -> Member {
    Member::new(TypeCode::UInt32, name)
}

/// Creates a `uint64` member.
pub fn uint64(name: impl Into<String>) -> Member {
    Member::new(TypeCode::UInt64, name)
}

/// Creates a `float32` member.
pub fn float32(name: impl Into<String>) -> Member {
    Member::new(TypeCode::Float32, name)
}

/// Creates a `float64` member.
pub fn float64(name: impl Into<String>) -> Member {
    Member::new(TypeCode::Float64, name)
}

/// Creates a `string` member.
pub fn string(name: impl Into<String>) -> Member {
    Member::new(TypeCode::String, name)
}

/// Creates a variant-any member.
pub fn any(name: impl Into<String>) -> Member {
    Member::new(TypeCode::Any, name)
}

/// Creates a `bool[]` member.
pub fn boolean_array(name: impl Into<String>) -> Member {
    Member::new(TypeCode::BoolArray, name)
}

/// Creates an `int8[]` member.
pub fn int8_array(name: impl Into<String>) -> Member {
    Member::new(TypeCode::Int8Array, name)
}

/// Creates an `int16[]` member.
pub fn int16_array(name: impl Into<String>) -> Member {
    Member::new(TypeCode::Int16Array, name)
}

/// Creates an `int32[]` member.
pub fn int32_array(name: impl Into<String>) -> Member {
    Member::new(TypeCode::Int32Array, name)
}

/// Creates an `int64[]` member.
pub fn int64_array(name: impl Into<String>) -> Member {
    Member::new(TypeCode::Int64Array, name)
}

/// Creates a `uint8[]` member.
pub fn uint8_array(name: impl Into<String>) -> Member {
    Member::new(TypeCode::UInt8Array, name)
}

/// Creates a `uint16[]` member.
pub fn uint16_array(name: impl Into<String>) -> Member {
    Member::new(TypeCode::UInt16Array, name)
}

/// Creates a `uint32[]` member.
pub fn uint32_array(name: impl Into<String>) -> Member {
    Member::new(TypeCode::UInt32Array, name)
}

/// Creates a `uint64[]` member.
pub fn uint64_array(name: impl Into<String>) -> Member {
    Member::new(TypeCode::UInt64Array, name)
}

/// Creates a `float32[]` member.
pub fn float32_array(name: impl Into<String>) -> Member {
    Member::new(TypeCode::Float32Array, name)
}

/// Creates a `float64[]` member.
pub fn float64_array(name: impl Into<String>) -> Member {
    Member::new(TypeCode::Float64Array, name)
}

/// Creates a `string[]` member.
pub fn string_array(name: impl Into<String>) -> Member {
    Member::new(TypeCode::StringArray, name)
}

/// Creates a variant-any array member.
pub fn any_array(name: impl Into<String>) -> Member {
    Member::new(TypeCode::AnyArray, name)
}

/// Creates a struct member with an optional type identifier.
pub fn structure<'a>(
    name: impl Into<String>,
    id: impl Into<Option<&'a str>>,
    children: Vec<Member>,
) -> Member {
    Member::of(TypeDef::structure(id, children), name)
}

/// Creates a union member with an optional type identifier.
pub fn union_of<'a>(
    name: impl Into<String>,
    id: impl Into<Option<&'a str>>,
    children: Vec<Member>,
) -> Member {
    Member::of(TypeDef::union_of(id, children), name)
}

/// Creates an array-of-struct member with an optional type identifier.
pub fn structure_array<'a>(
    name: impl Into<String>,
    id: impl Into<Option<&'a str>>,
    children: Vec<Member>,
) -> Member {
    Member::of(TypeDef::structure_array(id, children), name)
}

/// Creates an array-of-union member with an optional type identifier.
pub fn union_array<'a>(
    name: impl Into<String>,
    id: impl Into<Option<&'a str>>,
    children: Vec<Member>,
) -> Member {
    Member::of(TypeDef::union_array(id, children), name)
}
