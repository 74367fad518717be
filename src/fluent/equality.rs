//! Equality predicates: strict, deep, and their any-of variants.

use super::{AssertResult, Assertion};
use crate::deep::deep_equals;
use crate::value::{strict_equals, Value};

impl Assertion {
    /// Assert strict equality: primitives by value, compounds by identity.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::that;
    ///
    /// # fn main() -> Result<(), attest::AssertError> {
    /// that(4).is_equal_to(4)?;
    /// assert!(that(4).is_equal_to("4").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn is_equal_to(self, expected: impl Into<Value>) -> AssertResult {
        let expected = expected.into();
        if strict_equals(&self.value, &expected) {
            Ok(self)
        } else {
            Err(self.fire("{name} should be equal to {expected} but is {actual}", Some(expected)))
        }
    }

    /// Assert strict inequality.
    pub fn is_not_equal_to(self, not_expected: impl Into<Value>) -> AssertResult {
        let not_expected = not_expected.into();
        if strict_equals(&self.value, &not_expected) {
            Err(self.fire("{name} should not be equal to {expected}", Some(not_expected)))
        } else {
            Ok(self)
        }
    }

    /// Assert strict equality to at least one candidate.
    pub fn is_equal_to_any_of<I, T>(self, candidates: I) -> AssertResult
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let candidates: Vec<Value> = candidates.into_iter().map(Into::into).collect();
        if candidates.iter().any(|candidate| strict_equals(&self.value, candidate)) {
            Ok(self)
        } else {
            Err(self.fire(
                "{name} should be equal to any of {expected} but is {actual}",
                Some(Value::array(candidates)),
            ))
        }
    }

    /// Assert strict inequality to every candidate.
    pub fn is_not_equal_to_any_of<I, T>(self, candidates: I) -> AssertResult
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let candidates: Vec<Value> = candidates.into_iter().map(Into::into).collect();
        if candidates.iter().any(|candidate| strict_equals(&self.value, candidate)) {
            Err(self.fire(
                "{name} should not be equal to any of {expected} but is {actual}",
                Some(Value::array(candidates)),
            ))
        } else {
            Ok(self)
        }
    }

    /// Assert structural equality; see [`deep_equals`].
    ///
    /// # Example
    ///
    /// ```
    /// use attest::{that, value};
    ///
    /// # fn main() -> Result<(), attest::AssertError> {
    /// that(value!({ "a": 1 })).is_deeply_equal_to(value!({ "a": 1 }))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn is_deeply_equal_to(self, expected: impl Into<Value>) -> AssertResult {
        let expected = expected.into();
        if deep_equals(&self.value, &expected) {
            Ok(self)
        } else {
            Err(self.fire(
                "{name} should be deeply equal to {expected} but is {actual}",
                Some(expected),
            ))
        }
    }

    /// Assert structural inequality.
    pub fn is_not_deeply_equal_to(self, not_expected: impl Into<Value>) -> AssertResult {
        let not_expected = not_expected.into();
        if deep_equals(&self.value, &not_expected) {
            Err(self.fire(
                "{name} should not be deeply equal to {expected}",
                Some(not_expected),
            ))
        } else {
            Ok(self)
        }
    }

    /// Assert structural equality to at least one candidate.
    pub fn is_deeply_equal_to_any_of<I, T>(self, candidates: I) -> AssertResult
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let candidates: Vec<Value> = candidates.into_iter().map(Into::into).collect();
        if candidates.iter().any(|candidate| deep_equals(&self.value, candidate)) {
            Ok(self)
        } else {
            Err(self.fire(
                "{name} should be deeply equal to any of {expected} but is {actual}",
                Some(Value::array(candidates)),
            ))
        }
    }

    /// Assert structural inequality to every candidate.
    pub fn is_not_deeply_equal_to_any_of<I, T>(self, candidates: I) -> AssertResult
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let candidates: Vec<Value> = candidates.into_iter().map(Into::into).collect();
        if candidates.iter().any(|candidate| deep_equals(&self.value, candidate)) {
            Err(self.fire(
                "{name} should not be deeply equal to any of {expected} but is {actual}",
                Some(Value::array(candidates)),
            ))
        } else {
            Ok(self)
        }
    }
}
