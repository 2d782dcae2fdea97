// Wire type codes for structured values
//
// Every scalar kind has an array counterpart, and compound nodes
// (struct/union) can themselves be carried as arrays. `Null` marks an
// unset code so that builder configuration can be checked before use.

use std::fmt;

use crate::internal::error::{Error, Result};

/// Classification of a type code by its element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Unset/invalid code
    Null,
    /// Boolean
    Bool,
    /// Signed or unsigned integer
    Integer,
    /// Floating point
    Real,
    /// UTF-8 string
    String,
    /// Struct, union, or variant-any
    Compound,
}

/// Code identifying the type of one value node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    /// Unset/invalid code
    Null,
    /// Boolean
    Bool,
    /// 8-bit signed integer
    Int8,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 8-bit unsigned integer
    UInt8,
    /// 16-bit unsigned integer
    UInt16,
    /// 32-bit unsigned integer
    UInt32,
    /// 64-bit unsigned integer
    UInt64,
    /// 32-bit floating point (IEEE 754)
    Float32,
    /// 64-bit floating point (IEEE 754)
    Float64,
    /// UTF-8 encoded string
    String,
    /// Variant holding any value
    Any,
    /// Array of booleans
    BoolArray,
    /// Array of 8-bit signed integers
    Int8Array,
    /// Array of 16-bit signed integers
    Int16Array,
    /// Array of 32-bit signed integers
    Int32Array,
    /// Array of 64-bit signed integers
    Int64Array,
    /// Array of 8-bit unsigned integers
    UInt8Array,
    /// Array of 16-bit unsigned integers
    UInt16Array,
    /// Array of 32-bit unsigned integers
    UInt32Array,
    /// Array of 64-bit unsigned integers
    UInt64Array,
    /// Array of 32-bit floats
    Float32Array,
    /// Array of 64-bit floats
    Float64Array,
    /// Array of strings
    StringArray,
    /// Array of variants
    AnyArray,
    /// Structure with named members
    Struct,
    /// Discriminated union of named members
    Union,
    /// Array of structures
    StructArray,
    /// Array of unions
    UnionArray,
}

impl TypeCode {
    /// Returns true if this code is set to a usable type.
    pub fn valid(&self) -> bool {
        !matches!(self, TypeCode::Null)
    }

    /// Returns true if this code is an array type.
    pub fn is_array(&self) -> bool {
        matches!(
            self,
            TypeCode::BoolArray
                | TypeCode::Int8Array
                | TypeCode::Int16Array
                | TypeCode::Int32Array
                | TypeCode::Int64Array
                | TypeCode::UInt8Array
                | TypeCode::UInt16Array
                | TypeCode::UInt32Array
                | TypeCode::UInt64Array
                | TypeCode::Float32Array
                | TypeCode::Float64Array
                | TypeCode::StringArray
                | TypeCode::AnyArray
                | TypeCode::StructArray
                | TypeCode::UnionArray
        )
    }

    /// Returns the element-kind classification for this code.
    ///
    /// Arrays classify by their element, so `Int32Array` is `Kind::Integer`.
    pub fn kind(&self) -> Kind {
        match self.scalar_of() {
            TypeCode::Null => Kind::Null,
            TypeCode::Bool => Kind::Bool,
            TypeCode::Int8
            | TypeCode::Int16
            | TypeCode::Int32
            | TypeCode::Int64
            | TypeCode::UInt8
            | TypeCode::UInt16
            | TypeCode::UInt32
            | TypeCode::UInt64 => Kind::Integer,
            TypeCode::Float32 | TypeCode::Float64 => Kind::Real,
            TypeCode::String => Kind::String,
            TypeCode::Any | TypeCode::Struct | TypeCode::Union => Kind::Compound,
            // scalar_of never returns an array code
            _ => unreachable!(),
        }
    }

    /// Returns the array counterpart of this scalar code.
    pub fn array_of(&self) -> Result<TypeCode> {
        let code = match self {
            TypeCode::Bool => TypeCode::BoolArray,
            TypeCode::Int8 => TypeCode::Int8Array,
            TypeCode::Int16 => TypeCode::Int16Array,
            TypeCode::Int32 => TypeCode::Int32Array,
            TypeCode::Int64 => TypeCode::Int64Array,
            TypeCode::UInt8 => TypeCode::UInt8Array,
            TypeCode::UInt16 => TypeCode::UInt16Array,
            TypeCode::UInt32 => TypeCode::UInt32Array,
            TypeCode::UInt64 => TypeCode::UInt64Array,
            TypeCode::Float32 => TypeCode::Float32Array,
            TypeCode::Float64 => TypeCode::Float64Array,
            TypeCode::String => TypeCode::StringArray,
            TypeCode::Any => TypeCode::AnyArray,
            TypeCode::Struct => TypeCode::StructArray,
            TypeCode::Union => TypeCode::UnionArray,
            other => {
                return Err(Error::TypeError(format!(
                    "Type code {} has no array counterpart",
                    other
                )))
            }
        };
        Ok(code)
    }

    /// Returns the element code of an array, or the code itself for scalars.
    pub fn scalar_of(&self) -> TypeCode {
        match self {
            TypeCode::BoolArray => TypeCode::Bool,
            TypeCode::Int8Array => TypeCode::Int8,
            TypeCode::Int16Array => TypeCode::Int16,
            TypeCode::Int32Array => TypeCode::Int32,
            TypeCode::Int64Array => TypeCode::Int64,
            TypeCode::UInt8Array => TypeCode::UInt8,
            TypeCode::UInt16Array => TypeCode::UInt16,
            TypeCode::UInt32Array => TypeCode::UInt32,
            TypeCode::UInt64Array => TypeCode::UInt64,
            TypeCode::Float32Array => TypeCode::Float32,
            TypeCode::Float64Array => TypeCode::Float64,
            TypeCode::StringArray => TypeCode::String,
            TypeCode::AnyArray => TypeCode::Any,
            TypeCode::StructArray => TypeCode::Struct,
            TypeCode::UnionArray => TypeCode::Union,
            other => *other,
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_array() {
            return write!(f, "{}[]", self.scalar_of());
        }
        let name = match self {
            TypeCode::Null => "null",
            TypeCode::Bool => "bool",
            TypeCode::Int8 => "int8",
            TypeCode::Int16 => "int16",
            TypeCode::Int32 => "int32",
            TypeCode::Int64 => "int64",
            TypeCode::UInt8 => "uint8",
            TypeCode::UInt16 => "uint16",
            TypeCode::UInt32 => "uint32",
            TypeCode::UInt64 => "uint64",
            TypeCode::Float32 => "float32",
            TypeCode::Float64 => "float64",
            TypeCode::String => "string",
            TypeCode::Any => "any",
            TypeCode::Struct => "struct",
            TypeCode::Union => "union",
            _ => unreachable!(),
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(TypeCode::Null.kind(), Kind::Null);
        assert_eq!(TypeCode::Bool.kind(), Kind::Bool);
        assert_eq!(TypeCode::Int8.kind(), Kind::Integer);
        assert_eq!(TypeCode::UInt64.kind(), Kind::Integer);
        assert_eq!(TypeCode::Float32.kind(), Kind::Real);
        assert_eq!(TypeCode::String.kind(), Kind::String);
        assert_eq!(TypeCode::Any.kind(), Kind::Compound);
        assert_eq!(TypeCode::Struct.kind(), Kind::Compound);

        // Arrays classify by element
        assert_eq!(TypeCode::Float64Array.kind(), Kind::Real);
        assert_eq!(TypeCode::StringArray.kind(), Kind::String);
        assert_eq!(TypeCode::UnionArray.kind(), Kind::Compound);
    }

    #[test]
    fn test_array_scalar_round_trip() {
        assert_eq!(TypeCode::Int32.array_of().unwrap(), TypeCode::Int32Array);
        assert_eq!(TypeCode::Int32Array.scalar_of(), TypeCode::Int32);
        assert_eq!(TypeCode::Struct.array_of().unwrap(), TypeCode::StructArray);

        // scalar_of is the identity on scalars
        assert_eq!(TypeCode::Float64.scalar_of(), TypeCode::Float64);
    }

    #[test]
    fn test_array_of_rejects_arrays_and_null() {
        assert!(TypeCode::Int32Array.array_of().is_err());
        assert!(TypeCode::Null.array_of().is_err());
    }

    #[test]
    fn test_display_spelling() {
        assert_eq!(TypeCode::Int32.to_string(), "int32");
        assert_eq!(TypeCode::Float64Array.to_string(), "float64[]");
        assert_eq!(TypeCode::StructArray.to_string(), "struct[]");
    }
}
