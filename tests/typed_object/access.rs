//! Access: get/set semantics.

use crate::common::*;
use blueprint::Instance;

#[test]
fn undeclared_keys_are_rejected() {
    let mut obj = strict(person());
    assert!(obj.get("email").unwrap_err().is_key_not_declared());
    assert!(obj.set("email", Value::boxed("a@b")).unwrap_err().is_key_not_declared());
    assert_eq!(obj.len(), 2);
}

#[test]
fn instance_round_trip() {
    let mut obj = strict(person());
    let name = Value::boxed("Ada");
    obj.set("name", name.clone()).unwrap();
    assert_eq!(obj.get("name").unwrap(), &name);
}

#[test]
fn null_accepted_for_ordinary_fields() {
    let mut obj = strict(person());
    obj.set("age", Value::boxed(3)).unwrap();
    obj.set("age", Value::Null).unwrap();
    assert_eq!(obj.get("age").unwrap(), &Value::Null);
}

#[test]
fn undefined_rejected_for_ordinary_fields() {
    let mut obj = lenient(person());
    let err = obj.set("age", Value::Undefined).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type undefined does not match the required type Number"
    );
}

#[test]
fn failed_write_keeps_previous_value() {
    let mut obj = strict(person());
    obj.set("name", Value::boxed("Ada")).unwrap();
    assert!(obj.set("name", Value::boxed(1)).is_err());
    assert_eq!(obj.get("name").unwrap(), &Value::boxed("Ada"));
}

#[test]
fn wrong_boxed_type_reports_class_name() {
    let mut obj = lenient(person());
    let err = obj.set("age", Value::boxed(true)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type Boolean does not match the required type Number"
    );
}

#[test]
fn user_classes_and_inheritance() {
    let shape = Class::new("Shape");
    let circle = Class::extending("Circle", &shape);
    let bp = Blueprint::builder().field("shape", &shape).build();
    let mut obj = strict(bp);

    obj.set("shape", Instance::new(circle.clone()).with_field("r", 1)).unwrap();
    assert_eq!(obj.get("shape").unwrap().class(), Some(circle));

    let err = obj.set("shape", Instance::new(Class::new("Shape"))).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn object_field_takes_any_object() {
    let bp = Blueprint::builder().field("data", &builtins::object()).build();
    let mut obj = strict(bp);
    obj.set("data", Value::boxed("text")).unwrap();
    obj.set("data", Instance::new(Class::new("Thing"))).unwrap();
    assert!(obj.set("data", "text").is_err());
}

#[test]
fn replace_hands_back_old_value() {
    let mut obj = strict(person());
    assert_eq!(obj.replace("age", Value::boxed(9)).unwrap(), Value::Null);
    assert_eq!(obj.replace("age", Value::Null).unwrap(), Value::boxed(9));
}

#[test]
fn iteration_reports_current_values() {
    let mut obj = strict(person());
    obj.set("age", Value::boxed(30)).unwrap();
    let snapshot: Vec<(&str, &Value)> = obj.iter().collect();
    assert_eq!(snapshot, vec![("name", &Value::Null), ("age", &Value::boxed(30))]);
}
