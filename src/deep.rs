//! Structural deep equality.
//!
//! This is the comparison behind the `is_deeply_equal_to` predicate family.
//! Strict equality decides leaves; containers recurse by constructor, shape
//! and content. The algorithm is deliberately conservative about kinds: an
//! array never equals a plain object (even one shaped like `{length: 0}`),
//! `undefined` never equals `null`, and values of different constructor
//! classes never compare equal regardless of their properties.

use crate::value::{strict_equals, TypeOf, Value};

/// Nesting depth past which values compare unequal.
///
/// The recursion has no cycle detection (cycles are not constructible in
/// this value model), so the fuse only matters for pathologically deep
/// fixtures, which compare unequal instead of exhausting the stack.
pub const MAX_DEPTH: usize = 128;

/// Decide structural equality between two values.
///
/// The rules, in order:
/// 1. Strictly equal values are deeply equal. This covers all primitive
///    matches and identical compounds.
/// 2. `Null` on one side only is unequal.
/// 3. Values of different runtime kinds are unequal, and so are two
///    non-strictly-equal values of any kind other than `object`: two
///    different numbers, two different texts, two distinct functions.
/// 4. Values with different constructor classes are unequal.
/// 5. Arrays compare by length, then element by element, order-sensitive.
/// 6. Objects compare by own-property count, then per-name recursion.
/// 7. Two distinct promises carry no comparable properties and compare
///    trivially equal, like any other same-class value with nothing to
///    compare. A known gap inherited from the algorithm's origin.
///
/// # Example
///
/// ```
/// use attest::{deep_equals, value};
///
/// let a = value!({ "a": 1, "d": { "a": "deep" } });
/// let b = value!({ "a": 1, "d": { "a": "deep" } });
/// assert!(deep_equals(&a, &b));
/// assert!(!deep_equals(&value!([1, 3]), &value!([3, 1])));
/// ```
pub fn deep_equals(a: &Value, b: &Value) -> bool {
    deep_equals_at(a, b, 0)
}

fn deep_equals_at(a: &Value, b: &Value, depth: usize) -> bool {
    if strict_equals(a, b) {
        return true;
    }

    if depth >= MAX_DEPTH {
        return false;
    }

    if matches!(a, Value::Null) || matches!(b, Value::Null) {
        return false;
    }

    if a.type_of() != b.type_of() || a.type_of() != TypeOf::Object {
        return false;
    }

    match (a.class_of(), b.class_of()) {
        (Some(class_a), Some(class_b)) if class_a == class_b => {}
        _ => return false,
    }

    match (a, b) {
        (Value::Array(x), Value::Array(y)) => {
            x.elements().len() == y.elements().len()
                && x.elements()
                    .iter()
                    .zip(y.elements())
                    .all(|(ea, eb)| deep_equals_at(ea, eb, depth + 1))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.properties().len() == y.properties().len()
                && x.properties().iter().all(|(name, va)| {
                    y.properties()
                        .get(name)
                        .is_some_and(|vb| deep_equals_at(va, vb, depth + 1))
                })
        }
        // Same class, no comparable own properties (promises).
        _ => true,
    }
}
