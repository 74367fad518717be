//! Behavioral predicates: arbitrary checks, pattern matching, class
//! membership, frozenness, and the throw family.

use std::sync::Arc;

use regex::Regex;

use super::{AssertResult, Assertion};
use crate::error::{AssertError, ContractViolation};
use crate::value::{Class, FunctionData, Value};

impl Assertion {
    fn function_subject(&self) -> Result<Arc<FunctionData>, AssertError> {
        match &self.value {
            Value::Function(data) => Ok(data.clone()),
            _ => Err(AssertError::Contract(ContractViolation::FunctionRequired {
                name: self.full_name(),
                subject: self.value.clone(),
            })),
        }
    }

    /// Assert an arbitrary predicate over the raw value.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::{that, Value};
    ///
    /// # fn main() -> Result<(), attest::AssertError> {
    /// that(12).satisfies(|it| matches!(it, Value::Number(n) if n % 3.0 == 0.0))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn satisfies<F>(self, predicate: F) -> AssertResult
    where
        F: FnOnce(&Value) -> bool,
    {
        if predicate(&self.value) {
            Ok(self)
        } else {
            Err(self.fire("{name} does not satisfy the predicate", None))
        }
    }

    /// Assert the value is text matching `pattern`.
    pub fn matches(self, pattern: &Regex) -> AssertResult {
        let text = match &self.value {
            Value::Text(text) => text.clone(),
            _ => return self.is_a_string(),
        };
        if pattern.is_match(&text) {
            Ok(self)
        } else {
            Err(self.fire_with(
                "{name} does not match {regexp}",
                None,
                vec![("regexp", pattern.as_str().to_string())],
            ))
        }
    }

    /// Assert the value's constructor is `class` or derives from it.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::{classes, that, Value};
    ///
    /// # fn main() -> Result<(), attest::AssertError> {
    /// that(Value::error("boom")).is_instance_of(&classes::ERROR)?;
    /// that(Value::error("boom")).is_instance_of(&classes::OBJECT)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn is_instance_of(self, class: &'static Class) -> AssertResult {
        if self.value.instance_of(class) {
            Ok(self)
        } else {
            Err(self.fire_with(
                "{name} is not an instance of {class}",
                None,
                vec![("class", class.name().to_string())],
            ))
        }
    }

    /// Assert the value is frozen. Primitives always are; arrays and
    /// objects only when produced by [`Value::frozen`].
    pub fn is_frozen(self) -> AssertResult {
        if self.value.is_frozen() {
            Ok(self)
        } else {
            Err(self.fire("{name} is not frozen", None))
        }
    }

    pub fn is_not_frozen(self) -> AssertResult {
        if self.value.is_frozen() {
            Err(self.fire("{name} is frozen", None))
        } else {
            Ok(self)
        }
    }

    /// Assert the wrapped function throws when invoked.
    ///
    /// A non-function subject is a [`ContractViolation`], not a failed
    /// assertion.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::{that, Value};
    ///
    /// # fn main() -> Result<(), attest::AssertError> {
    /// that(Value::throwing(Value::error("boom"))).throws()?;
    /// assert!(that(Value::returning(1)).throws().is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn throws(self) -> AssertResult {
        let function = self.function_subject()?;
        match function.invoke() {
            Err(_) => Ok(self),
            Ok(returned) => Err(self.fire_about(
                "{name} should throw but returned {actual}",
                None,
                returned,
                Vec::new(),
            )),
        }
    }

    /// Like [`throws`](Assertion::throws), but hands the caught value to
    /// `check` as a child assertion named `error`.
    pub fn throws_and<F>(self, check: F) -> AssertResult
    where
        F: FnOnce(Assertion) -> AssertResult,
    {
        let function = self.function_subject()?;
        match function.invoke() {
            Err(caught) => {
                check(self.child(caught, "error"))?;
                Ok(self)
            }
            Ok(returned) => Err(self.fire_about(
                "{name} should throw but returned {actual}",
                None,
                returned,
                Vec::new(),
            )),
        }
    }

    /// Assert the function throws an instance of `class`.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::{classes, that, Value};
    ///
    /// # fn main() -> Result<(), attest::AssertError> {
    /// that(Value::throwing(Value::error("boom"))).throws_a(&classes::ERROR)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn throws_a(self, class: &'static Class) -> AssertResult {
        self.throws_and(|error| error.is_instance_of(class))
    }

    /// Grammatical alias for [`throws_a`](Assertion::throws_a).
    pub fn throws_an(self, class: &'static Class) -> AssertResult {
        self.throws_a(class)
    }
}
