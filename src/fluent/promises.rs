//! Settlement predicates, the only asynchronous surface.
//!
//! Each predicate is an `async fn`, so calling one never fails
//! synchronously: a non-promise subject surfaces as a
//! [`ContractViolation`] through the returned future, and a failed check
//! surfaces as the future's `Err`. On success they resolve to a child
//! assertion wrapping the settlement, so settled-value chains compose.
//!
//! [`ContractViolation`]: crate::error::ContractViolation

use std::sync::Arc;

use super::{AssertResult, Assertion};
use crate::error::{AssertError, ContractViolation};
use crate::value::{Class, PromiseData, Value};

impl Assertion {
    fn promise_subject(&self) -> Result<Arc<PromiseData>, AssertError> {
        match &self.value {
            Value::Promise(data) => Ok(data.clone()),
            _ => Err(AssertError::Contract(ContractViolation::PromiseRequired {
                name: self.full_name(),
                subject: self.value.clone(),
            })),
        }
    }

    /// Assert the promise fulfills, resolving to its fulfillment value as
    /// a child assertion named `fulfillment value`.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::{that, Value};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> Result<(), attest::AssertError> {
    /// that(Value::resolved(7)).is_fulfilled().await?.is_equal_to(7)?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn is_fulfilled(self) -> AssertResult {
        let promise = self.promise_subject()?;
        match promise.settled().await {
            Ok(value) => Ok(self.child(value, "fulfillment value")),
            Err(rejection) => Err(self.fire_about(
                "{name} should be fulfilled but was rejected with {actual}",
                None,
                rejection,
                Vec::new(),
            )),
        }
    }

    /// Like [`is_fulfilled`](Assertion::is_fulfilled), additionally
    /// applying `check` to the fulfillment value.
    pub async fn is_fulfilled_and<F>(self, check: F) -> AssertResult
    where
        F: FnOnce(Assertion) -> AssertResult,
    {
        let child = self.is_fulfilled().await?;
        check(child.clone())?;
        Ok(child)
    }

    /// Assert the promise rejects, resolving to the rejection value as a
    /// child assertion named `error`.
    pub async fn is_rejected(self) -> AssertResult {
        let promise = self.promise_subject()?;
        match promise.settled().await {
            Ok(value) => Err(self.fire_about(
                "{name} should be rejected but was fulfilled with {actual}",
                None,
                value,
                Vec::new(),
            )),
            Err(rejection) => Ok(self.child(rejection, "error")),
        }
    }

    /// Like [`is_rejected`](Assertion::is_rejected), additionally applying
    /// `check` to the rejection value.
    pub async fn is_rejected_and<F>(self, check: F) -> AssertResult
    where
        F: FnOnce(Assertion) -> AssertResult,
    {
        let child = self.is_rejected().await?;
        check(child.clone())?;
        Ok(child)
    }

    /// Assert the promise fulfills with a value deeply equal to
    /// `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::{that, value, Value};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> Result<(), attest::AssertError> {
    /// let promise = Value::resolved(value!({ "ok": true }));
    /// that(promise).becomes(value!({ "ok": true })).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn becomes(self, expected: impl Into<Value>) -> AssertResult {
        let child = self.is_fulfilled().await?;
        child.is_deeply_equal_to(expected)
    }

    /// Assert the promise rejects with an instance of `class`.
    pub async fn is_rejected_with(self, class: &'static Class) -> AssertResult {
        let child = self.is_rejected().await?;
        child.is_instance_of(class)
    }
}
