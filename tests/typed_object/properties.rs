//! Property-based checks over random blueprints.

use crate::common::*;
use proptest::prelude::*;

fn declared_type() -> impl Strategy<Value = TypeDescriptor> {
    prop_oneof![
        Just(TypeDescriptor::Void),
        Just(TypeDescriptor::from(builtins::number())),
        Just(TypeDescriptor::from(builtins::string())),
        Just(TypeDescriptor::from(builtins::boolean())),
        Just(TypeDescriptor::from(builtins::object())),
    ]
}

fn random_blueprint() -> impl Strategy<Value = Blueprint> {
    prop::collection::btree_map("[a-z]{1,8}", declared_type(), 0..8)
        .prop_map(|fields| fields.into_iter().collect())
}

/// A boxed value that is an instance of `ty`, if one exists.
fn instance_of(ty: &TypeDescriptor) -> Option<Value> {
    let class = ty.as_class()?;
    if *class == builtins::string() {
        Some(Value::boxed("text"))
    } else if *class == builtins::boolean() {
        Some(Value::boxed(true))
    } else {
        Some(Value::boxed(1))
    }
}

proptest! {
    /// Fresh objects hold null in ordinary fields and undefined in void ones.
    #[test]
    fn fresh_objects_are_seeded(bp in random_blueprint()) {
        let obj = strict(bp.clone());
        for (key, ty) in bp.iter() {
            let expected = if ty.is_void() { Value::Undefined } else { Value::Null };
            prop_assert_eq!(obj.get(key).unwrap(), &expected);
        }
    }

    /// Keys outside the blueprint always fail, for reads and writes.
    #[test]
    fn undeclared_keys_always_fail(bp in random_blueprint(), key in "[A-Z]{1,8}") {
        let mut obj = lenient(bp);
        prop_assert!(obj.get(&key).unwrap_err().is_key_not_declared());
        prop_assert!(obj.set(&key, Value::Null).unwrap_err().is_key_not_declared());
    }

    /// Instances of the declared type round-trip unchanged.
    #[test]
    fn instances_round_trip(bp in random_blueprint(), strict_mode in any::<bool>()) {
        let mut obj = TypedObject::new(bp.clone(), strict_mode, no_base()).unwrap();
        for (key, ty) in bp.iter() {
            if let Some(value) = instance_of(ty) {
                obj.set(key, value.clone()).unwrap();
                prop_assert_eq!(obj.get(key).unwrap(), &value);
            }
        }
    }

    /// Null and undefined are accepted exactly where the rule says.
    #[test]
    fn null_and_undefined_rules(bp in random_blueprint()) {
        let mut obj = lenient(bp.clone());
        for (key, ty) in bp.iter() {
            prop_assert_eq!(obj.set(key, Value::Null).is_ok(), !ty.is_void());
            prop_assert_eq!(obj.set(key, Value::Undefined).is_ok(), ty.is_void());
        }
    }

    /// Bare numbers pass only in lenient mode.
    #[test]
    fn strictness_controls_bare_numbers(n in any::<f64>()) {
        let mut strict_obj = strict(person());
        let mut lenient_obj = lenient(person());
        prop_assert!(strict_obj.set("age", n).unwrap_err().is_type_mismatch());
        prop_assert!(lenient_obj.set("age", n).is_ok());
    }
}
