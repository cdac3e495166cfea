//! Construction: seeding and initial values.

use crate::common::*;

#[test]
fn fresh_object_seeds_null_and_undefined() {
    init_tracing();
    let obj = strict(with_void());
    assert_eq!(obj.get("name").unwrap(), &Value::Null);
    assert_eq!(obj.get("deleted_at").unwrap(), &Value::Undefined);
}

#[test]
fn end_to_end_person_strict() {
    init_tracing();
    let mut amy = TypedObject::new(person(), true, [("name", Value::boxed("Amy"))]).unwrap();
    assert_eq!(amy.get("name").unwrap().as_str(), Some("Amy"));
    assert_eq!(amy.get("age").unwrap(), &Value::Null);

    // Literals are bare; strict objects reject them for boxed types.
    let err = amy.set("age", 42).unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(amy.get("age").unwrap(), &Value::Null);

    amy.set("age", Value::boxed(42)).unwrap();
    assert_eq!(amy.get("age").unwrap().as_number(), Some(42.0));
}

#[test]
fn end_to_end_person_lenient() {
    let mut amy = TypedObject::new(person(), false, [("name", Value::from("Amy"))]).unwrap();
    amy.set("age", 42).unwrap();
    assert_eq!(amy.get("age").unwrap(), &Value::from(42));
}

#[test]
fn strict_base_rejects_bare_literal() {
    let err = TypedObject::new(person(), true, [("name", Value::from("Amy"))]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type String(primitive) does not match the required type String"
    );
}

#[test]
fn base_with_undeclared_key_fails() {
    let err = TypedObject::new(person(), true, [("email", Value::Null)]).unwrap_err();
    assert_eq!(err, Error::KeyNotDeclared("email".to_string()));
}

#[test]
fn base_is_applied_in_order() {
    let base = vec![
        ("age", Value::boxed(1)),
        ("age", Value::boxed(2)),
        ("age", Value::Null),
    ];
    let obj = TypedObject::new(person(), true, base).unwrap();
    assert_eq!(obj.get("age").unwrap(), &Value::Null);
}

#[test]
fn base_can_set_void_field_to_undefined() {
    let obj = TypedObject::new(with_void(), true, [("deleted_at", Value::Undefined)]).unwrap();
    assert_eq!(obj.get("deleted_at").unwrap(), &Value::Undefined);
}

#[test]
fn default_blueprint_yields_empty_object() {
    let obj = TypedObject::from_blueprint(Blueprint::default());
    assert!(obj.is_empty());
    assert_eq!(obj.keys().count(), 0);
}

#[test]
fn clones_are_independent_values() {
    let mut a = strict(person());
    let b = a.clone();
    a.set("age", Value::boxed(5)).unwrap();
    assert_eq!(b.get("age").unwrap(), &Value::Null);
    assert_eq!(a.blueprint().len(), b.blueprint().len());
}
