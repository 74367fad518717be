//! Fluent assertion API.
//!
//! This module provides the chaining engine behind [`that`]:
//! - [`that`] - wrap any value in an [`Assertion`]
//! - [`Assertion`] - the node type every predicate is a method on
//! - [`fail`] - force a failure independent of any subject
//! - [`check`] - pin a closure to the reusable-predicate shape
//!
//! Predicates consume the node and hand it back in `Ok`, so chains compose
//! with `?`. Predicates that look inside the subject (properties, elements,
//! thrown errors, settlements) build a *child* node whose parent link is
//! used for one thing only: composing the full path name that failure
//! messages open with, like
//! `actual value colors own property at index 2 value property`.
//!
//! # Example
//!
//! ```
//! use attest::that;
//!
//! # fn main() -> Result<(), attest::AssertError> {
//! that(3).is_a_number()?.and_it().is_not_equal_to(4)?;
//!
//! that(vec![3, 4]).every(|it| it.is_above(2))?;
//! # Ok(())
//! # }
//! ```

mod behavior;
mod collections;
mod equality;
mod kinds;
mod messages;
mod numeric;
mod promises;
mod properties;

use std::sync::Arc;

use crate::error::{AssertError, Fault};
use crate::value::Value;

/// Result of a predicate: the node itself for further chaining, or the
/// error that aborted the chain.
pub type AssertResult = Result<Assertion, AssertError>;

/// Wrap a value for assertion chaining.
///
/// The sole entry point. Anything convertible into a [`Value`] is a valid
/// subject; nothing is validated here.
///
/// # Example
///
/// ```
/// use attest::{that, value};
///
/// # fn main() -> Result<(), attest::AssertError> {
/// that(value!({ "a": 2, "b": [3, 6] }))
///     .has_property_and("a", |it| it.is_a_number())?
///     .has_property_and("b", |it| it.is_an_array()?.every(|it| it.is_a_number()))?;
/// # Ok(())
/// # }
/// ```
pub fn that(value: impl Into<Value>) -> Assertion {
    Assertion::root(value.into())
}

/// Raise a [`Fault`] unconditionally.
///
/// For branches a test should never reach:
///
/// ```
/// use attest::fail;
///
/// fn guard(ready: bool) -> Result<(), attest::AssertError> {
///     if !ready {
///         fail("fixture was not ready")?;
///     }
///     Ok(())
/// }
/// ```
pub fn fail(message: impl Into<String>) -> Result<(), AssertError> {
    Err(AssertError::Fault(Fault::new(
        message.into(),
        Value::Undefined,
        None,
    )))
}

/// Identity helper that pins a closure to the reusable-predicate shape.
///
/// Does nothing at runtime; it exists so a reusable assertion can be bound
/// to a name without spelling its full type.
///
/// # Example
///
/// ```
/// use attest::{check, that};
///
/// # fn main() -> Result<(), attest::AssertError> {
/// let is_a_number = check(|it| it.is_a_number());
/// that(vec![1, 2]).every(&is_a_number)?;
/// that(7).is_any_of(&[&is_a_number])?;
/// # Ok(())
/// # }
/// ```
pub fn check<F>(assertion: F) -> F
where
    F: Fn(Assertion) -> AssertResult,
{
    assertion
}

/// A value under assertion, with the naming context failures report.
///
/// Nodes are immutable: predicates consume and return them, [`named`]
/// builds a fresh one, and children built for nested checks keep a link to
/// their parent purely for name composition.
///
/// [`named`]: Assertion::named
#[derive(Debug, Clone)]
pub struct Assertion {
    value: Value,
    name: Option<String>,
    parent: Option<Arc<Assertion>>,
}

impl Assertion {
    fn root(value: Value) -> Self {
        Self {
            value,
            name: None,
            parent: None,
        }
    }

    /// Build the child node a nested predicate hands to its callback.
    pub(crate) fn child(&self, value: Value, label: impl Into<String>) -> Assertion {
        Assertion {
            value,
            name: Some(label.into()),
            parent: Some(Arc::new(self.clone())),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The wrapped subject, untouched.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Alias for [`Assertion::value`], for symmetry with failure reports.
    pub fn actual(&self) -> &Value {
        &self.value
    }

    /// Give up the node and keep the subject.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// This node's label: the explicit name if one was given, else a
    /// default from the subject's shape (`"promise"`, `"function"`, or
    /// `"actual value"`).
    pub fn name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => match &self.value {
                Value::Promise(_) => "promise".to_string(),
                Value::Function(_) => "function".to_string(),
                _ => "actual value".to_string(),
            },
        }
    }

    /// The full path label, composed through the parent chain at call
    /// time.
    pub fn full_name(&self) -> String {
        match &self.parent {
            Some(parent) => format!("{} {}", parent.full_name(), self.name()),
            None => self.name(),
        }
    }

    /// A fresh root node over the same subject with a new name.
    ///
    /// The new node has no parent; naming starts a path from scratch.
    pub fn named(self, name: impl Into<String>) -> Assertion {
        Assertion {
            value: self.value,
            name: Some(name.into()),
            parent: None,
        }
    }

    /// No-op, for chain readability: `is_a_number()?.and_it().is_above(0)`.
    pub fn and_it(self) -> Assertion {
        self
    }

    // =========================================================================
    // Failure primitive
    // =========================================================================

    /// Render `template` against this node and build the failing error.
    ///
    /// `{name}` becomes the composed full name, `{actual}` the subject,
    /// `{expected}` the expectation when one is supplied. Every built-in
    /// predicate fails through here, and extension predicates should too.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::{registry, that, Value};
    ///
    /// registry::install("is_even", |it| match it.value() {
    ///     Value::Number(n) if n % 2.0 == 0.0 => Ok(it),
    ///     _ => Err(it.fire("{name} should be even but is {actual}", None)),
    /// });
    ///
    /// assert!(that(3).apply("is_even").is_err());
    /// ```
    pub fn fire(&self, template: &str, expected: Option<Value>) -> AssertError {
        self.fire_about(template, expected, self.value.clone(), Vec::new())
    }

    /// [`Assertion::fire`] with extra template fields.
    pub(crate) fn fire_with(
        &self,
        template: &str,
        expected: Option<Value>,
        extra: Vec<(&'static str, String)>,
    ) -> AssertError {
        self.fire_about(template, expected, self.value.clone(), extra)
    }

    /// The general form: `actual` may differ from the subject (a promise
    /// node reports its settlement, a throwing check reports the returned
    /// value).
    pub(crate) fn fire_about(
        &self,
        template: &str,
        expected: Option<Value>,
        actual: Value,
        extra: Vec<(&'static str, String)>,
    ) -> AssertError {
        let mut fields = vec![("name", self.full_name()), ("actual", actual.to_string())];
        if let Some(expected) = &expected {
            fields.push(("expected", expected.to_string()));
        }
        fields.extend(extra);
        let message = messages::render(template, &fields);
        AssertError::Fault(Fault::new(message, actual, expected))
    }
}
