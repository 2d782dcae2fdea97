// NTEnum builder
//
// Fixed shape: an index+choices enumeration plus alarm, time stamp, and a
// description-only display block.

use crate::nt::common::{Alarm, TimeStamp};
use crate::typedef::{members, TypeDef};

/// Builder for the NTEnum Normative Type.
#[derive(Debug, Clone, Copy, Default)]
pub struct NTEnum;

impl NTEnum {
    /// Builds the fixed NTEnum schema.
    pub fn build(&self) -> TypeDef {
        TypeDef::structure(
            "epics:nt/NTEnum:1.0",
            vec![
                members::structure(
                    "value",
                    "enum_t",
                    vec![members::int32("index"), members::string_array("choices")],
                ),
                Alarm.build().as_member("alarm"),
                TimeStamp.build().as_member("timeStamp"),
                members::structure("display", None, vec![members::string("description")]),
            ],
        )
    }
}
