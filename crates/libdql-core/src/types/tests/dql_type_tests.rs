use crate::types::DqlType;
use crate::types::Value;
use chrono::DateTime;
use chrono::Utc;

#[test]
fn maps_each_scalar_kind() {
    let when = DateTime::parse_from_rfc3339("2021-03-04T05:06:07Z")
        .unwrap()
        .with_timezone(&Utc);

    assert_eq!(DqlType::from_value(&Value::from("abc")), DqlType::String);
    assert_eq!(DqlType::from_value(&Value::from(5)), DqlType::Int);
    assert_eq!(DqlType::from_value(&Value::from(1.5)), DqlType::Float);
    assert_eq!(DqlType::from_value(&Value::from(true)), DqlType::Bool);
    assert_eq!(DqlType::from_value(&Value::from(when)), DqlType::DateTime);
}

#[test]
fn unrecognized_kinds_default_to_string() {
    assert_eq!(
        DqlType::from_value(&Value::List(vec![Value::Int(1)])),
        DqlType::String,
    );
    assert_eq!(DqlType::from_value(&Value::Null), DqlType::String);
}

#[test]
fn display_matches_wire_tokens() {
    assert_eq!(DqlType::String.to_string(), "string");
    assert_eq!(DqlType::Int.to_string(), "int");
    assert_eq!(DqlType::Float.to_string(), "float");
    assert_eq!(DqlType::Bool.to_string(), "bool");
    assert_eq!(DqlType::DateTime.to_string(), "datetime");
    assert_eq!(DqlType::Int.as_str(), "int");
}
