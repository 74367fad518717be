//! Collection traversal: every, some, and any-of combinators.
//!
//! `some` and `is_any_of` probe candidates by swallowing [`Fault`]-kind
//! failures only. A [`ContractViolation`] inside a probe means the test
//! itself is malformed, and propagates.
//!
//! [`Fault`]: crate::error::Fault
//! [`ContractViolation`]: crate::error::ContractViolation

use std::sync::Arc;

use super::{AssertResult, Assertion};
use crate::error::{AssertError, ContractViolation};
use crate::value::{ArrayData, Value};

impl Assertion {
    fn array_subject(&self) -> Result<Arc<ArrayData>, AssertError> {
        match &self.value {
            Value::Array(data) => Ok(data.clone()),
            _ => Err(AssertError::Contract(ContractViolation::ArrayRequired {
                name: self.full_name(),
                subject: self.value.clone(),
            })),
        }
    }

    /// Assert every element satisfies `check`, in ascending index order.
    ///
    /// Elements are handed to `check` as children named `at index i`, so a
    /// failure reports which element broke the chain. The first failing
    /// element aborts the walk; later elements are never visited.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::{that, value};
    ///
    /// # fn main() -> Result<(), attest::AssertError> {
    /// that(value!([2, 1, 3, 1])).every(|it| it.is_a_number())?;
    /// assert!(that(value!([2, 1, 3, 1])).every(|it| it.is_below(3)).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn every<F>(self, mut check: F) -> AssertResult
    where
        F: FnMut(Assertion) -> AssertResult,
    {
        let data = self.array_subject()?;
        for (index, element) in data.elements().iter().enumerate() {
            check(self.child(element.clone(), format!("at index {}", index)))?;
        }
        Ok(self)
    }

    /// Assert at least one element satisfies `check`.
    ///
    /// Candidates are tried in order; the first success returns
    /// immediately, and only after every element has failed does the
    /// combinator fire its own failure.
    pub fn some<F>(self, mut check: F) -> AssertResult
    where
        F: FnMut(Assertion) -> AssertResult,
    {
        let data = self.array_subject()?;
        for (index, element) in data.elements().iter().enumerate() {
            match check(self.child(element.clone(), format!("at index {}", index))) {
                Ok(_) => return Ok(self),
                Err(AssertError::Fault(_)) => {}
                Err(violation) => return Err(violation),
            }
        }
        Err(self.fire("{name} has no element passing the assertion", None))
    }

    /// Assert the value itself satisfies at least one of `checks`.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::{check, that};
    ///
    /// # fn main() -> Result<(), attest::AssertError> {
    /// let small = check(|it| it.is_below(10.0));
    /// let text = check(|it| it.is_a_string());
    /// that(4).is_any_of(&[&small, &text])?;
    /// that("abc").is_any_of(&[&small, &text])?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn is_any_of(self, checks: &[&dyn Fn(Assertion) -> AssertResult]) -> AssertResult {
        for check in checks {
            match check(self.clone()) {
                Ok(_) => return Ok(self),
                Err(AssertError::Fault(_)) => {}
                Err(violation) => return Err(violation),
            }
        }
        Err(self.fire("{name} does not pass any assertion in the list", None))
    }
}
