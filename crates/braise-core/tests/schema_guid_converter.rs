use braise_core::{
    schema::{Converter, GuidStringConverter},
    stmt::Value,
};

use uuid::Uuid;

#[test]
fn guid_round_trips_through_string() {
    let converter = GuidStringConverter;

    for _ in 0..16 {
        let id = Uuid::new_v4();
        let stored = converter.from_db(Value::Uuid(id)).unwrap();
        assert!(matches!(stored, Value::String(_)));
        assert_eq!(converter.to_db(stored).unwrap(), Value::Uuid(id));
    }
}

#[test]
fn nil_guid_round_trips() {
    let converter = GuidStringConverter;
    let stored = converter.from_db(Value::Uuid(Uuid::nil())).unwrap();
    assert_eq!(stored, Value::from("00000000-0000-0000-0000-000000000000"));
    assert_eq!(converter.to_db(stored).unwrap(), Value::Uuid(Uuid::nil()));
}

#[test]
fn null_passes_through() {
    let converter = GuidStringConverter;
    assert_eq!(converter.from_db(Value::Null).unwrap(), Value::Null);
    assert_eq!(converter.to_db(Value::Null).unwrap(), Value::Null);
}

#[test]
fn malformed_string_fails() {
    assert!(GuidStringConverter.to_db(Value::from("not-a-guid")).is_err());
}
