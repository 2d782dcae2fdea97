// NTTable builder
//
// Accumulates (type, name, label) columns, then emits a parallel `labels`
// array plus a struct of the accumulated columns. Each column is stored as
// an array of its scalar code: one column of N rows.

use crate::internal::error::{Error, Result};
use crate::nt::common::{Alarm, TimeStamp};
use crate::typedef::{members, Member, TypeCode, TypeDef};
use crate::value::Value;

#[derive(Debug, Clone)]
struct Column {
    code: TypeCode,
    name: String,
    label: String,
}

/// Builder for the NTTable Normative Type.
#[derive(Debug, Clone, Default)]
pub struct NTTable {
    cols: Vec<Column>,
}

impl NTTable {
    /// Creates an empty table builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column of the given scalar type.
    ///
    /// The label defaults to the column name. Fails before storing anything
    /// when the code is invalid or already an array type.
    pub fn add_column(
        &mut self,
        code: TypeCode,
        name: &str,
        label: Option<&str>,
    ) -> Result<&mut Self> {
        if !code.valid() || code.is_array() {
            return Err(Error::ConfigError(format!(
                "NTTable column {} type must be scalar",
                name
            )));
        }
        self.cols.push(Column {
            code: code.array_of()?,
            name: name.to_string(),
            label: label.unwrap_or(name).to_string(),
        });
        Ok(self)
    }

    /// Builds the schema for the accumulated columns.
    pub fn build(&self) -> TypeDef {
        let mut columns = Vec::with_capacity(self.cols.len());
        for col in &self.cols {
            columns.push(Member::new(col.code, col.name.as_str()));
        }

        TypeDef::structure(
            "epics:nt/NTTable:1.0",
            vec![
                members::string_array("labels"),
                members::structure("value", None, columns),
                members::string("descriptor"), // ???
                Alarm.build().as_member("alarm"),
                TimeStamp.build().as_member("timeStamp"),
            ],
        )
    }

    /// Builds the schema and instantiates it with `labels` pre-populated
    /// in column insertion order.
    pub fn create(&self) -> Result<Value> {
        let mut value = self.build().create()?;
        let labels: Vec<String> = self.cols.iter().map(|col| col.label.clone()).collect();
        value
            .as_struct_mut()
            .ok_or_else(|| Error::ValueError("NTTable instance is not a struct".to_string()))?
            .set("labels", Value::StringArray(labels))?;
        Ok(value)
    }
}
