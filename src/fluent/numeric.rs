//! Numeric ordering predicates.
//!
//! Subjects that are not numbers (and NaN) never satisfy an ordering, so
//! these fail with the ordinary failure message rather than a contract
//! violation.

use super::{AssertResult, Assertion};
use crate::value::Value;

impl Assertion {
    /// Assert the value is a number strictly greater than `threshold`.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::that;
    ///
    /// # fn main() -> Result<(), attest::AssertError> {
    /// that(5).is_above(4)?;
    /// assert!(that(5).is_above(5).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn is_above(self, threshold: impl Into<f64>) -> AssertResult {
        let threshold = threshold.into();
        if matches!(&self.value, Value::Number(n) if *n > threshold) {
            Ok(self)
        } else {
            Err(self.fire(
                "{name} should be above {expected} but is {actual}",
                Some(Value::Number(threshold)),
            ))
        }
    }

    /// Assert the value is a number greater than or equal to `threshold`.
    pub fn is_at_least(self, threshold: impl Into<f64>) -> AssertResult {
        let threshold = threshold.into();
        if matches!(&self.value, Value::Number(n) if *n >= threshold) {
            Ok(self)
        } else {
            Err(self.fire(
                "{name} should be at least {expected} but is {actual}",
                Some(Value::Number(threshold)),
            ))
        }
    }

    /// Assert the value is a number strictly less than `threshold`.
    pub fn is_below(self, threshold: impl Into<f64>) -> AssertResult {
        let threshold = threshold.into();
        if matches!(&self.value, Value::Number(n) if *n < threshold) {
            Ok(self)
        } else {
            Err(self.fire(
                "{name} should be below {expected} but is {actual}",
                Some(Value::Number(threshold)),
            ))
        }
    }

    /// Assert the value is a number less than or equal to `threshold`.
    pub fn is_at_most(self, threshold: impl Into<f64>) -> AssertResult {
        let threshold = threshold.into();
        if matches!(&self.value, Value::Number(n) if *n <= threshold) {
            Ok(self)
        } else {
            Err(self.fire(
                "{name} should be at most {expected} but is {actual}",
                Some(Value::Number(threshold)),
            ))
        }
    }
}
