// ntvalue library entry point
//
// Structured-value type definitions and the Normative Type ("NT") schema
// builders used to exchange scalar, enumerated, tabular, and array/image
// data over EPICS control-system protocols.

pub mod internal;
pub mod typedef;
pub mod value;
pub mod nt;

pub use internal::error::{Error, Result};
pub use typedef::{Kind, Member, TypeCode, TypeDef};
pub use value::{StructValue, Value};
