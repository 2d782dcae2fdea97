// NTScalar / NTScalarArray builder
//
// The value member must be a primitive scalar or primitive array. Optional
// substructures are appended in a fixed sequence; display limits, control,
// and valueAlarm exist only for numeric value kinds. When `form` is set a
// second `display` member is appended after the first, matching the
// protocol's two-step append field-for-field.

use crate::internal::error::{Error, Result};
use crate::nt::common::{Alarm, TimeStamp};
use crate::typedef::{members, Kind, Member, TypeCode, TypeDef};

/// Builder for the NTScalar and NTScalarArray Normative Types.
#[derive(Debug, Clone)]
pub struct NTScalar {
    /// Type code of the `value` member; must be a primitive scalar or array
    pub value: TypeCode,
    /// Include the `display` substructure (numeric values get limit fields)
    pub display: bool,
    /// Include the `control` substructure (numeric values only)
    pub control: bool,
    /// Include the `valueAlarm` substructure (numeric values only)
    pub value_alarm: bool,
    /// With `display`, also append the precision/form display block
    pub form: bool,
}

impl Default for NTScalar {
    fn default() -> Self {
        Self {
            value: TypeCode::Null,
            display: false,
            control: false,
            value_alarm: false,
            form: false,
        }
    }
}

impl NTScalar {
    /// Creates a builder for the given value type with no optional parts.
    pub fn new(value: TypeCode) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// Builds the schema selected by this configuration.
    pub fn build(&self) -> Result<TypeDef> {
        if !self.value.valid() || self.value.kind() == Kind::Compound {
            return Err(Error::ConfigError(
                "NTScalar only permits (array of) primitive".to_string(),
            ));
        }

        let id = if self.value.is_array() {
            "epics:nt/NTScalarArray:1.0"
        } else {
            "epics:nt/NTScalar:1.0"
        };
        let mut def = TypeDef::structure(
            id,
            vec![
                Member::new(self.value, "value"),
                Alarm.build().as_member("alarm"),
                TimeStamp.build().as_member("timeStamp"),
            ],
        );

        let isnumeric = matches!(self.value.kind(), Kind::Integer | Kind::Real);
        let scalar = self.value.scalar_of();

        if self.display && isnumeric {
            def.append(vec![members::structure(
                "display",
                None,
                vec![
                    Member::new(scalar, "limitLow"),
                    Member::new(scalar, "limitHigh"),
                    members::string("description"),
                    members::string("units"),
                ],
            )]);
            if self.form {
                def.append(vec![members::structure(
                    "display",
                    None,
                    vec![
                        members::int32("precision"),
                        members::structure(
                            "form",
                            "enum_t",
                            vec![members::int32("index"), members::string_array("choices")],
                        ),
                    ],
                )]);
            }
        } else if self.display {
            def.append(vec![members::structure(
                "display",
                None,
                vec![members::string("description"), members::string("units")],
            )]);
        }

        if self.control && isnumeric {
            def.append(vec![members::structure(
                "control",
                None,
                vec![
                    Member::new(scalar, "limitLow"),
                    Member::new(scalar, "limitHigh"),
                    Member::new(scalar, "minStep"),
                ],
            )]);
        }

        if self.value_alarm && isnumeric {
            def.append(vec![members::structure(
                "valueAlarm",
                None,
                vec![
                    members::boolean("active"),
                    Member::new(scalar, "lowAlarmLimit"),
                    Member::new(scalar, "lowWarningLimit"),
                    Member::new(scalar, "highWarningLimit"),
                    Member::new(scalar, "highAlarmLimit"),
                    members::int32("lowAlarmSeverity"),
                    members::int32("lowWarningSeverity"),
                    members::int32("highWarningSeverity"),
                    members::int32("highAlarmSeverity"),
                    members::float64("hysteresis"),
                ],
            )]);
        }

        Ok(def)
    }
}
