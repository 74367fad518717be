//! Integration tests for synchronous assertion chains.

use anyhow::Result;
use attest::{
    check, classes, fail, registry, that, value, AssertError, AssertResult, Assertion, Class,
    ContractViolation, Value,
};
use regex::Regex;

static SOME_ERROR: Class = Class::extending("SomeError", &classes::ERROR);

/// Wrap a failing chain in a function value, so the chain's own faults
/// can be asserted on like any other thrown error.
fn attempt(chain: impl Fn() -> AssertResult + Send + Sync + 'static) -> Value {
    Value::function(move || chain().map(Assertion::into_value))
}

#[test]
fn test_strict_equality_family() -> Result<()> {
    that(4).is_equal_to(4)?;
    that(4).is_not_equal_to(5)?;
    that("4").is_not_equal_to(4)?;
    that(4).is_equal_to_any_of([3, 4, 5])?;
    that(4).is_not_equal_to_any_of([3, 5])?;

    assert!(that(4).is_equal_to(5).is_err());
    assert!(that(4).is_equal_to("4").is_err());
    assert!(that(4).is_not_equal_to(4).is_err());
    assert!(that(4).is_equal_to_any_of([3, 5]).is_err());
    assert!(that(4).is_not_equal_to_any_of([3, 4]).is_err());
    Ok(())
}

#[test]
fn test_failed_assertions_are_assertion_errors() -> Result<()> {
    that(attempt(|| that(4).is_equal_to(5))).throws_a(&classes::ASSERTION_ERROR)?;
    that(attempt(|| that(4).is_not_equal_to(4))).throws_a(&classes::ASSERTION_ERROR)?;
    that(attempt(|| that(4).is_equal_to("4"))).throws_an(&classes::ERROR)?;
    Ok(())
}

#[test]
fn test_deep_equality_family() -> Result<()> {
    let obj1 = value!({ "a": 1, "b": "str", "c": null, "d": { "a": "deep" } });
    let obj2 = value!({ "a": 1, "b": "str", "c": null, "d": { "a": "deep" } });
    let obj3 = value!({ "a": 1, "b": "str", "c": null, "d": { "b": "deep" } });
    let obj4 = value!({ "a": 1, "b": "str", "c": 5 });

    that(obj1.clone()).is_deeply_equal_to(obj2.clone())?;
    that(Value::Null).is_deeply_equal_to(Value::Null)?;
    that(3).is_deeply_equal_to(3)?;
    that(value!([1, [1, { "a": 1 }]])).is_deeply_equal_to(value!([1, [1, { "a": 1 }]]))?;
    that(obj1.clone()).is_not_deeply_equal_to(obj3.clone())?;
    that(obj1.clone()).is_deeply_equal_to_any_of([obj3.clone(), obj2.clone()])?;
    that(obj1.clone()).is_not_deeply_equal_to_any_of([obj3, obj4.clone()])?;

    // Structurally equal values are still distinct identities.
    assert!(that(obj1.clone()).is_equal_to(obj2).is_err());

    assert!(that(obj1.clone()).is_deeply_equal_to(obj4).is_err());
    assert!(that(obj1).is_deeply_equal_to(Value::Null).is_err());
    assert!(that(value!([1, 3])).is_deeply_equal_to(value!([3, 1])).is_err());
    assert!(that(value!(["4"])).is_deeply_equal_to(value!([4])).is_err());
    assert!(that(value!([])).is_deeply_equal_to(value!({})).is_err());
    assert!(that(value!([])).is_deeply_equal_to(value!({ "length": 0 })).is_err());
    assert!(that(Value::Undefined).is_deeply_equal_to(Value::Null).is_err());
    Ok(())
}

#[test]
fn test_kind_probes() -> Result<()> {
    that(Value::Null).is_null()?;
    that("banana").is_not_null()?;
    that(Value::Undefined).is_undefined()?;
    that(Value::Null).is_not_undefined()?;
    that(f64::NAN).is_nan()?;
    that(4).is_not_nan()?;
    that(4.3).is_a_number()?;
    that("5").is_not_a_number()?;
    that("a").is_a_string()?;
    that(1).is_not_a_string()?;
    that(value!([2, 1, 3, 1])).is_an_array()?;
    that("banana").is_not_an_array()?;
    that(Value::resolved(true)).is_a_promise()?;
    that("BANANA").is_not_a_promise()?;

    assert!(that("apple").is_null().is_err());
    assert!(that(Value::Null).is_undefined().is_err());
    assert!(that(4).is_nan().is_err());
    assert!(that(f64::NAN).is_not_nan().is_err());
    assert!(that("3").is_a_number().is_err());
    assert!(that(3).is_not_a_number().is_err());
    assert!(that("banana").is_an_array().is_err());
    assert!(that(Value::resolved(true)).is_not_a_promise().is_err());
    Ok(())
}

#[test]
fn test_truthiness() -> Result<()> {
    that(1).is_truthy()?;
    that("x").is_truthy()?;
    that(value!([])).is_truthy()?;
    that(value!({})).is_truthy()?;
    that(0).is_falsy()?;
    that("").is_falsy()?;
    that(false).is_falsy()?;
    that(Value::Null).is_falsy()?;
    that(Value::Undefined).is_falsy()?;
    that(f64::NAN).is_falsy()?;

    assert!(that(0).is_truthy().is_err());
    assert!(that(1).is_falsy().is_err());
    Ok(())
}

#[test]
fn test_numeric_orderings() -> Result<()> {
    that(3).is_above(2)?;
    that(3).is_at_least(2)?;
    that(3).is_at_least(3)?;
    that(2).is_below(3)?;
    that(2).is_at_most(2)?;
    that(2).is_at_most(3)?;

    assert!(that(3).is_above(3).is_err());
    assert!(that(3).is_at_least(4).is_err());
    assert!(that(3).is_below(3).is_err());
    assert!(that(3).is_at_most(2).is_err());
    // Non-numbers never satisfy an ordering.
    assert!(that("3").is_above(2).is_err());
    Ok(())
}

#[test]
fn test_lengths() -> Result<()> {
    that("banana").has_length_of(6)?;
    that("banana").has_length(|it| it.is_above(5))?;
    that(value!([2, 1, 3, 1])).has_length_of(4)?;
    that(value!([2, 1, 3, 1])).has_length(|it| it.is_above(3))?;
    that(value!({ "length": 2 })).has_length_of(2)?;

    assert!(that("banana").has_length_of(7).is_err());
    assert!(that("banana").has_length(|it| it.is_above(7)).is_err());
    assert!(that(value!({})).has_length_of(0).is_err());
    Ok(())
}

#[test]
fn test_property_access() -> Result<()> {
    let object = value!({ "a": 1, "b": "text", "c": null });

    that(object.clone()).has_property("a")?.is_equal_to(1)?;
    that(object.clone()).has_property_and("a", |it| it.is_equal_to(1))?;
    that(object.clone()).does_not_have_property("z")?;
    that(object.clone()).has_own_property("a")?.is_equal_to(1)?;
    that(object.clone()).has_own_property_and("a", |it| it.is_equal_to(1))?;
    that(object.clone()).does_not_have_own_property("z")?;

    assert!(that(object.clone()).has_property("x").is_err());
    assert!(that(object.clone())
        .has_property_and("a", |it| it.is_equal_to(2))
        .is_err());
    assert!(that(object.clone()).does_not_have_property("a").is_err());
    assert!(that(object).does_not_have_own_property("a").is_err());
    Ok(())
}

#[test]
fn test_arrays_own_their_indices() -> Result<()> {
    let array = value!(["zero", "one"]);

    that(array.clone()).has_own_property("0")?.is_equal_to("zero")?;
    that(array.clone()).has_own_property("length")?.is_equal_to(2)?;

    assert!(that(array.clone()).has_own_property("2").is_err());
    assert!(that(array).has_own_property("01").is_err());
    Ok(())
}

#[test]
fn test_collection_traversal() -> Result<()> {
    let numbers = value!([2, 1, 3, 1]);

    that(numbers.clone()).every(|it| it.is_a_number())?;
    that(numbers.clone()).some(|it| it.is_equal_to(3))?;

    assert!(that(numbers.clone()).every(|it| it.is_below(3)).is_err());
    assert!(that(numbers).some(|it| it.is_equal_to(8)).is_err());
    Ok(())
}

#[test]
fn test_any_of_over_whole_values() -> Result<()> {
    let an_array = check(|it| it.is_an_array());
    let a_number = check(|it| it.is_a_number());

    that(2).is_any_of(&[&an_array, &a_number])?;
    assert!(that(2).is_any_of(&[&an_array]).is_err());
    Ok(())
}

#[test]
fn test_satisfies() -> Result<()> {
    that("banana").satisfies(|it| matches!(it, Value::Text(text) if text.as_ref() == "banana"))?;

    assert!(that("banana")
        .satisfies(|it| matches!(it, Value::Text(text) if text.as_ref() == "lemon"))
        .is_err());
    Ok(())
}

#[test]
fn test_matches_patterns() -> Result<()> {
    let hex = Regex::new("^#[0-9A-F]{6}$")?;

    that("#00FF00").matches(&hex)?;

    assert!(that("00FF00").matches(&hex).is_err());
    assert!(that(4).matches(&hex).is_err());
    Ok(())
}

#[test]
fn test_throws_family() -> Result<()> {
    that(Value::throwing(Value::error("boom"))).throws()?;
    that(Value::throwing(Value::error_of(&SOME_ERROR, "worse"))).throws_a(&SOME_ERROR)?;
    that(Value::throwing(Value::error_of(&SOME_ERROR, "worse"))).throws_an(&classes::ERROR)?;
    that(Value::throwing(Value::error("A terrible error"))).throws_and(|error| {
        error.has_property_and("message", |it| it.is_equal_to("A terrible error"))
    })?;

    assert!(that(Value::returning(Value::Undefined)).throws().is_err());
    assert!(that(Value::throwing(Value::error("plain")))
        .throws_a(&SOME_ERROR)
        .is_err());

    let not_callable = that(4).throws();
    assert!(matches!(
        not_callable,
        Err(AssertError::Contract(ContractViolation::FunctionRequired { .. }))
    ));
    Ok(())
}

#[test]
fn test_class_membership() -> Result<()> {
    that(value!({})).is_instance_of(&classes::OBJECT)?;
    that(value!([])).is_instance_of(&classes::ARRAY)?;
    that(value!([])).is_instance_of(&classes::OBJECT)?;
    that(Value::error("e")).is_instance_of(&classes::ERROR)?;
    that(Value::error_of(&SOME_ERROR, "e")).is_instance_of(&classes::ERROR)?;

    assert!(that(value!({})).is_instance_of(&classes::ARRAY).is_err());
    assert!(that(Value::error("e")).is_instance_of(&SOME_ERROR).is_err());
    assert!(that(4).is_instance_of(&classes::OBJECT).is_err());
    Ok(())
}

#[test]
fn test_frozen_values() -> Result<()> {
    let object = value!({ "a": 1 });

    that(object.frozen()).is_frozen()?;
    that(object.clone()).is_not_frozen()?;
    that(4).is_frozen()?;

    assert!(that(object.clone()).is_frozen().is_err());
    assert!(that(object.frozen()).is_not_frozen().is_err());
    Ok(())
}

#[test]
fn test_failure_messages_compose_the_path() {
    let things = value!({ "colors": [{ "name": "green", "value": "00FF00" }] });
    let hex = Regex::new("^#[0-9A-F]{6}$").unwrap();

    let outcome = that(things)
        .named("things")
        .has_own_property_and("colors", |colors| {
            colors.every(|color| color.has_property_and("value", |it| it.matches(&hex)))
        });

    match outcome {
        Err(AssertError::Fault(fault)) => assert_eq!(
            fault.message(),
            "things colors own property at index 0 value property does not match ^#[0-9A-F]{6}$"
        ),
        other => panic!("expected a fault, got {:?}", other),
    }
}

#[test]
fn test_installed_predicates_extend_every_chain() -> Result<()> {
    registry::install("chaining_is_a_banana", |it| {
        if matches!(it.value(), Value::Text(text) if text.as_ref() == "I am a banana!") {
            Ok(it)
        } else {
            Err(it.fire("{name} is not a banana", None))
        }
    });

    that("I am a banana!").apply("chaining_is_a_banana")?;
    assert!(that("I am an apple").apply("chaining_is_a_banana").is_err());

    let missing = that(4).apply("chaining_never_installed");
    assert!(matches!(
        missing,
        Err(AssertError::Contract(ContractViolation::UnknownAssertion { .. }))
    ));
    Ok(())
}

#[test]
fn test_fail_forces_a_fault() {
    let outcome: Result<(), AssertError> = (|| {
        that(4).is_a_number()?;
        fail("forced the branch")?;
        Ok(())
    })();

    match outcome {
        Err(AssertError::Fault(fault)) => assert_eq!(fault.message(), "forced the branch"),
        other => panic!("expected a fault, got {:?}", other),
    }
}
