use qsrecord_core::{DecodedRecord, ScalarType, Value};

#[test]
fn value_text_creates_arc_str_value() {
    let value = Value::text("hello");
    assert_eq!(value.try_str().unwrap(), "hello");
    assert_eq!(value.scalar_type(), ScalarType::Text);
}

#[test]
fn typed_accessors_return_matching_variant() {
    assert_eq!(Value::Double(1.5).try_f64().unwrap(), 1.5);
    assert_eq!(Value::BigInt(-7).try_i64().unwrap(), -7);
    assert_eq!(Value::Int(42).try_i32().unwrap(), 42);
    assert_eq!(Value::TinyInt(-8).try_i8().unwrap(), -8);
    assert_eq!(Value::Float(2.5).try_f32().unwrap(), 2.5);
    assert!(Value::Boolean(true).try_bool().unwrap());
}

#[test]
fn typed_accessor_mismatch_names_both_types() {
    let err = Value::Int(1).try_str().unwrap_err();
    assert_eq!(err.expected, "string");
    assert_eq!(err.actual, "int");
    assert_eq!(err.to_string(), "expected string, found int");
}

#[test]
fn record_reset_clears_previous_values() {
    let mut record = DecodedRecord::with_len(2);
    record.set(0, Some(Value::Int(1)));
    record.set(1, Some(Value::text("x")));
    assert_eq!(record.get(0), Some(&Value::Int(1)));

    record.reset(3);
    assert_eq!(record.len(), 3);
    assert!(record.iter().all(Option::is_none));
}

#[test]
fn record_get_out_of_range_is_none() {
    let record = DecodedRecord::from(vec![Some(Value::Boolean(false))]);
    assert_eq!(record.get(5), None);
    assert_eq!(record.into_values(), vec![Some(Value::Boolean(false))]);
}

#[test]
#[should_panic]
fn record_set_out_of_range_panics() {
    let mut record = DecodedRecord::with_len(1);
    record.set(1, Some(Value::Int(1)));
}
