// NTURI builder
//
// Eagerly constructed: the request descriptor and the caller-supplied query
// schema are composed at creation, not deferred to a build() call.

use crate::internal::error::Result;
use crate::typedef::{members, Member, TypeDef};
use crate::value::Value;

/// The NTURI Normative Type: a request descriptor with a caller-defined
/// query structure.
#[derive(Debug, Clone)]
pub struct NTURI {
    def: TypeDef,
}

impl NTURI {
    /// Composes the NTURI schema around the given ordered query members.
    pub fn new(query: Vec<Member>) -> Self {
        let def = TypeDef::structure(
            "epics:nt/NTURI:1.0",
            vec![
                members::string("scheme"),
                members::string("authority"),
                members::string("path"),
                members::structure("query", None, query),
            ],
        );
        NTURI { def }
    }

    /// Returns the composed schema.
    pub fn type_def(&self) -> &TypeDef {
        &self.def
    }

    /// Instantiates a defaulted request value.
    pub fn create(&self) -> Result<Value> {
        self.def.create()
    }
}
