use ntvalue::nt::{NTEnum, NTNDArray, NTScalar, NTTable, NTURI, TimeStamp};
use ntvalue::typedef::{members, Member, TypeCode, TypeDef};
use ntvalue::value::json::value_to_json;
use ntvalue::Value;

fn member_names(def: &TypeDef) -> Vec<&str> {
    def.members().iter().map(Member::name).collect()
}

/// Tests the full NTScalar flag matrix against the wire-contract member sets.
#[test]
fn test_ntscalar_flag_combinations() {
    // display only, numeric value
    let mut builder = NTScalar::new(TypeCode::Float64);
    builder.display = true;
    let def = builder.build().unwrap();
    assert_eq!(member_names(&def), ["value", "alarm", "timeStamp", "display"]);
    assert_eq!(
        member_names(def.members()[3].def()),
        ["limitLow", "limitHigh", "description", "units"]
    );

    // display + form appends a second display member
    builder.form = true;
    let def = builder.build().unwrap();
    assert_eq!(
        member_names(&def),
        ["value", "alarm", "timeStamp", "display", "display"]
    );
    assert_eq!(member_names(def.members()[4].def()), ["precision", "form"]);

    // non-numeric value gates control and valueAlarm regardless of flags
    let mut text = NTScalar::new(TypeCode::String);
    text.control = true;
    text.value_alarm = true;
    let def = text.build().unwrap();
    assert_eq!(member_names(&def), ["value", "alarm", "timeStamp"]);

    // compound value fails before any schema is produced
    assert!(NTScalar::new(TypeCode::Union).build().is_err());
}

/// Tests table column accumulation, build order, and label population.
#[test]
fn test_nttable_columns_and_labels() {
    let mut table = NTTable::new();
    table
        .add_column(TypeCode::Int32, "a", None)
        .unwrap()
        .add_column(TypeCode::String, "b", Some("Label B"))
        .unwrap();

    // Column order is insertion order, each stored as an array of the code
    let def = table.build();
    let value = def.members()[1].def();
    assert_eq!(member_names(value), ["a", "b"]);
    assert_eq!(value.members()[0].def().code(), TypeCode::Int32Array);
    assert_eq!(value.members()[1].def().code(), TypeCode::StringArray);

    // An array column is rejected and nothing is stored
    assert!(table.add_column(TypeCode::Int32Array, "x", None).is_err());
    assert_eq!(member_names(table.build().members()[1].def()), ["a", "b"]);

    // create() pre-populates labels in the same order
    let instance = table.create().unwrap();
    assert_eq!(
        instance.as_struct().unwrap().get("labels"),
        Some(&Value::StringArray(vec![
            "a".to_string(),
            "Label B".to_string()
        ]))
    );
}

/// Tests that the NTNDArray value union is invariant: exactly 11
/// alternatives in fixed order, with no configuration to alter them.
#[test]
fn test_ntndarray_union_is_invariant() {
    let expected = [
        "booleanValue",
        "byteValue",
        "shortValue",
        "intValue",
        "longValue",
        "ubyteValue",
        "ushortValue",
        "uintValue",
        "ulongValue",
        "floatValue",
        "doubleValue",
    ];

    let first = NTNDArray.build();
    let second = NTNDArray.build();
    assert_eq!(member_names(first.members()[0].def()), expected);
    assert_eq!(first, second);
}

/// Tests that repeated sub-builder calls hand out distinctly-owned schemas.
#[test]
fn test_time_stamp_copies_are_independent() {
    let mut first = TimeStamp.build();
    let second = TimeStamp.build();
    assert_eq!(first, second);

    // Mutating one copy must not change the other
    first.append(vec![members::int32("extra")]);
    assert_eq!(first.members().len(), 4);
    assert_eq!(second.members().len(), 3);
}

/// Tests eager NTURI composition with a caller-supplied query schema.
#[test]
fn test_nturi_composes_immediately() {
    let uri = NTURI::new(vec![members::string("pvname"), members::float64("timeout")]);
    let def = uri.type_def();

    assert_eq!(def.id(), Some("epics:nt/NTURI:1.0"));
    assert_eq!(member_names(def), ["scheme", "authority", "path", "query"]);
    assert_eq!(
        member_names(def.members()[3].def()),
        ["pvname", "timeout"]
    );
}

/// Tests instantiating an NTEnum and mapping the defaulted value to JSON.
#[test]
fn test_ntenum_instantiation_to_json() {
    let instance = NTEnum.build().create().unwrap();
    let json = value_to_json(&instance);

    assert_eq!(json["value"]["index"], 0);
    assert_eq!(json["value"]["choices"], serde_json::json!([]));
    assert_eq!(json["alarm"]["message"], "");
    assert_eq!(json["timeStamp"]["secondsPastEpoch"], 0);
}
