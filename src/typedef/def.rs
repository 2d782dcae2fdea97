// Type-definition trees
//
// A `TypeDef` is an ordered tree of named members rooted at a struct,
// union, or primitive node. Member order is part of the wire contract
// shared with peer protocol implementations and is never reordered here.

use std::fmt;

use crate::internal::error::Result;
use crate::typedef::code::TypeCode;
use crate::value::Value;

/// One named child of a struct or union node.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    name: String,
    def: TypeDef,
}

impl Member {
    /// Creates a primitive leaf member from a type code.
    pub fn new(code: TypeCode, name: impl Into<String>) -> Self {
        Member {
            name: name.into(),
            def: TypeDef::scalar(code),
        }
    }

    /// Creates a member holding a full definition sub-tree.
    pub fn of(def: TypeDef, name: impl Into<String>) -> Self {
        Member {
            name: name.into(),
            def,
        }
    }

    /// Returns the member name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the member's definition.
    pub fn def(&self) -> &TypeDef {
        &self.def
    }
}

/// An ordered, self-describing type definition.
///
/// Compound nodes (struct/union and their array forms) carry an optional
/// globally-unique type identifier and an ordered member list. Cloning a
/// definition copies the whole tree; no storage is shared between clones.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDef {
    code: TypeCode,
    id: Option<String>,
    members: Vec<Member>,
}

impl TypeDef {
    /// Creates a leaf definition for a primitive or array-primitive code.
    pub fn scalar(code: TypeCode) -> Self {
        TypeDef {
            code,
            id: None,
            members: Vec::new(),
        }
    }

    /// Creates a struct definition with an optional type identifier.
    pub fn structure<'a>(id: impl Into<Option<&'a str>>, members: Vec<Member>) -> Self {
        TypeDef::compound(TypeCode::Struct, id.into(), members)
    }

    /// Creates a union definition with an optional type identifier.
    pub fn union_of<'a>(id: impl Into<Option<&'a str>>, members: Vec<Member>) -> Self {
        TypeDef::compound(TypeCode::Union, id.into(), members)
    }

    /// Creates an array-of-struct definition with an optional type identifier.
    pub fn structure_array<'a>(id: impl Into<Option<&'a str>>, members: Vec<Member>) -> Self {
        TypeDef::compound(TypeCode::StructArray, id.into(), members)
    }

    /// Creates an array-of-union definition with an optional type identifier.
    pub fn union_array<'a>(id: impl Into<Option<&'a str>>, members: Vec<Member>) -> Self {
        TypeDef::compound(TypeCode::UnionArray, id.into(), members)
    }

    fn compound(code: TypeCode, id: Option<&str>, members: Vec<Member>) -> Self {
        TypeDef {
            code,
            id: id.map(str::to_string),
            members,
        }
    }

    /// Returns the node's type code.
    pub fn code(&self) -> TypeCode {
        self.code
    }

    /// Returns the node's type identifier, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the ordered member list.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Appends members to this definition, preserving insertion order.
    pub fn append(&mut self, members: Vec<Member>) {
        self.members.extend(members);
    }

    /// Wraps an independent copy of this definition as a named member.
    ///
    /// The copy keeps this definition's own type identifier; mutating one
    /// copy never affects another.
    pub fn as_member(&self, name: impl Into<String>) -> Member {
        Member::of(self.clone(), name)
    }

    /// Instantiates a defaulted value graph described by this definition.
    pub fn create(&self) -> Result<Value> {
        Value::default_for(self)
    }
}

impl fmt::Display for TypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_node(f, self, None, 0)
    }
}

fn fmt_node(
    f: &mut fmt::Formatter<'_>,
    def: &TypeDef,
    name: Option<&str>,
    indent: usize,
) -> fmt::Result {
    if indent > 0 {
        writeln!(f)?;
    }
    write!(f, "{:indent$}{}", "", def.code, indent = indent)?;
    if let Some(id) = def.id() {
        write!(f, " \"{}\"", id)?;
    }
    if let Some(name) = name {
        write!(f, " {}", name)?;
    }
    for member in def.members() {
        fmt_node(f, member.def(), Some(member.name()), indent + 4)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typedef::members;

    #[test]
    fn test_append_preserves_member_order() {
        let mut def = TypeDef::structure(None, vec![members::int32("a")]);
        def.append(vec![members::string("b"), members::float64("c")]);

        let names: Vec<&str> = def.members().iter().map(Member::name).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_as_member_is_a_deep_copy() {
        let base = TypeDef::structure("time_t", vec![members::int64("secondsPastEpoch")]);

        let first = base.as_member("timeStamp");
        let mut second = base.clone();
        second.append(vec![members::int32("extra")]);

        // The wrapped copy keeps the original identifier and shape
        assert_eq!(first.def().id(), Some("time_t"));
        assert_eq!(first.def().members().len(), 1);
        assert_eq!(second.members().len(), 2);
    }

    #[test]
    fn test_display_renders_an_indented_tree() {
        let def = TypeDef::structure(
            "alarm_t",
            vec![members::int32("severity"), members::string("message")],
        );
        let rendered = def.to_string();

        assert!(rendered.starts_with("struct \"alarm_t\""));
        assert!(rendered.contains("\n    int32 severity"));
        assert!(rendered.contains("\n    string message"));
    }
}
