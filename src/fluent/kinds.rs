//! Kind predicates: null, undefined, NaN, truthiness, and runtime types.

use super::{AssertResult, Assertion};
use crate::value::Value;

impl Assertion {
    pub fn is_null(self) -> AssertResult {
        if matches!(self.value, Value::Null) {
            Ok(self)
        } else {
            Err(self.fire("{name} should be null but is {actual}", Some(Value::Null)))
        }
    }

    pub fn is_not_null(self) -> AssertResult {
        if matches!(self.value, Value::Null) {
            Err(self.fire("{name} should not be null", None))
        } else {
            Ok(self)
        }
    }

    pub fn is_undefined(self) -> AssertResult {
        if matches!(self.value, Value::Undefined) {
            Ok(self)
        } else {
            Err(self.fire("{name} should be undefined but is {actual}", Some(Value::Undefined)))
        }
    }

    pub fn is_not_undefined(self) -> AssertResult {
        if matches!(self.value, Value::Undefined) {
            Err(self.fire("{name} should not be undefined", None))
        } else {
            Ok(self)
        }
    }

    /// Assert the value is the number NaN. Only NaN satisfies this; NaN
    /// never satisfies [`is_equal_to`](Assertion::is_equal_to).
    pub fn is_nan(self) -> AssertResult {
        if self.value.is_nan() {
            Ok(self)
        } else {
            Err(self.fire("{name} should be NaN but is {actual}", None))
        }
    }

    pub fn is_not_nan(self) -> AssertResult {
        if self.value.is_nan() {
            Err(self.fire("{name} should not be NaN", None))
        } else {
            Ok(self)
        }
    }

    /// Assert the value is truthy. Undefined, null, `false`, `0`, NaN and
    /// the empty string are falsy; everything else is truthy.
    pub fn is_truthy(self) -> AssertResult {
        if self.value.truthy() {
            Ok(self)
        } else {
            Err(self.fire("{name} should be truthy but is {actual}", None))
        }
    }

    pub fn is_falsy(self) -> AssertResult {
        if self.value.truthy() {
            Err(self.fire("{name} should be falsy but is {actual}", None))
        } else {
            Ok(self)
        }
    }

    pub fn is_a_number(self) -> AssertResult {
        if matches!(self.value, Value::Number(_)) {
            Ok(self)
        } else {
            Err(self.fire("{name} should be a number but is {actual}", None))
        }
    }

    pub fn is_not_a_number(self) -> AssertResult {
        if matches!(self.value, Value::Number(_)) {
            Err(self.fire("{name} should not be a number but is {actual}", None))
        } else {
            Ok(self)
        }
    }

    pub fn is_a_string(self) -> AssertResult {
        if matches!(self.value, Value::Text(_)) {
            Ok(self)
        } else {
            Err(self.fire("{name} should be a string but is {actual}", None))
        }
    }

    pub fn is_not_a_string(self) -> AssertResult {
        if matches!(self.value, Value::Text(_)) {
            Err(self.fire("{name} should not be a string but is {actual}", None))
        } else {
            Ok(self)
        }
    }

    pub fn is_an_array(self) -> AssertResult {
        if matches!(self.value, Value::Array(_)) {
            Ok(self)
        } else {
            Err(self.fire("{name} should be an array but is {actual}", None))
        }
    }

    pub fn is_not_an_array(self) -> AssertResult {
        if matches!(self.value, Value::Array(_)) {
            Err(self.fire("{name} should not be an array but is {actual}", None))
        } else {
            Ok(self)
        }
    }

    pub fn is_a_promise(self) -> AssertResult {
        if matches!(self.value, Value::Promise(_)) {
            Ok(self)
        } else {
            Err(self.fire("{name} should be a promise but is {actual}", None))
        }
    }

    pub fn is_not_a_promise(self) -> AssertResult {
        if matches!(self.value, Value::Promise(_)) {
            Err(self.fire("{name} should not be a promise but is {actual}", None))
        } else {
            Ok(self)
        }
    }
}
