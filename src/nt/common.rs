// Shared sub-schema builders
//
// Every Normative Type embeds these under its own field names via
// `build().as_member(name)`, which hands out an independent copy each time.

use crate::typedef::{members, TypeDef};

/// Builder for the shared `time_t` time stamp sub-schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeStamp;

impl TimeStamp {
    /// Builds the fixed `time_t` structure.
    pub fn build(&self) -> TypeDef {
        TypeDef::structure(
            "time_t",
            vec![
                members::int64("secondsPastEpoch"),
                members::int32("nanoseconds"),
                members::int32("userTag"),
            ],
        )
    }
}

/// Builder for the shared `alarm_t` alarm status sub-schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alarm;

impl Alarm {
    /// Builds the fixed `alarm_t` structure.
    pub fn build(&self) -> TypeDef {
        TypeDef::structure(
            "alarm_t",
            vec![
                members::int32("severity"),
                members::int32("status"),
                members::string("message"),
            ],
        )
    }
}
