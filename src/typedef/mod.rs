// Structured-value type system for the ntvalue library
//
// This module defines the wire type codes and the ordered type-definition
// trees that the Normative Type builders compose. A definition is an
// immutable value tree once handed to a caller; reuse always goes through
// `TypeDef::as_member`, which deep-copies.

pub use self::code::{Kind, TypeCode};
pub use self::def::{Member, TypeDef};

pub mod code;
pub mod def;
pub mod members;
