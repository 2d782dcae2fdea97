// NTNDArray builder
//
// The one builder with an invariant schema: no configuration alters its
// shape. The value union carries exactly one alternative per primitive
// array kind, in fixed order. `dataTimeStamp` (acquisition) and
// `timeStamp` (transmission) are two independent copies of time_t.

use crate::nt::common::{Alarm, TimeStamp};
use crate::typedef::{members, TypeDef};

/// Builder for the NTNDArray Normative Type.
#[derive(Debug, Clone, Copy, Default)]
pub struct NTNDArray;

impl NTNDArray {
    /// Builds the fixed NTNDArray schema.
    pub fn build(&self) -> TypeDef {
        let time = TimeStamp.build();
        let alarm = Alarm.build();

        TypeDef::structure(
            "epics:nt/NTNDArray:1.0",
            vec![
                members::union_of(
                    "value",
                    None,
                    vec![
                        members::boolean_array("booleanValue"),
                        members::int8_array("byteValue"),
                        members::int16_array("shortValue"),
                        members::int32_array("intValue"),
                        members::int64_array("longValue"),
                        members::uint8_array("ubyteValue"),
                        members::uint16_array("ushortValue"),
                        members::uint32_array("uintValue"),
                        members::uint64_array("ulongValue"),
                        members::float32_array("floatValue"),
                        members::float64_array("doubleValue"),
                    ],
                ),
                members::structure(
                    "codec",
                    "codec_t",
                    vec![members::string("name"), members::any("parameters")],
                ),
                members::int64("compressedSize"),
                members::int64("uncompressedSize"),
                members::int32("uniqueId"),
                time.as_member("dataTimeStamp"),
                alarm.as_member("alarm"),
                time.as_member("timeStamp"),
                members::structure_array(
                    "dimension",
                    "dimension_t",
                    vec![
                        members::int32("size"),
                        members::int32("offset"),
                        members::int32("fullSize"),
                        members::int32("binning"),
                        members::boolean("reverse"),
                    ],
                ),
                members::structure_array(
                    "attribute",
                    "epics:nt/NTAttribute:1.0",
                    vec![
                        members::string("name"),
                        members::any("value"),
                        members::string_array("tags"),
                        members::string("descriptor"),
                        alarm.as_member("alarm"),
                        time.as_member("timeStamp"),
                        members::int32("sourceType"),
                        members::string("source"),
                    ],
                ),
            ],
        )
    }
}
