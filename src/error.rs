//! Error types raised by assertions.
//!
//! Failures come in two disjoint kinds:
//! - [`Fault`]: the subject did not satisfy a predicate. This is the only
//!   kind the `some`-style combinators may swallow while probing
//!   candidates.
//! - [`ContractViolation`]: the API itself was misused (a non-function
//!   subject handed to `throws`, an extension name nobody installed).
//!   Combinators must let these propagate, so a malformed test never
//!   masquerades as a failed candidate.
//!
//! [`AssertError`] is the sum carried by every predicate result.

use crate::value::class::{ASSERTION_ERROR, ERROR};
use crate::value::Value;

/// A failed assertion: the composed message plus the values involved.
///
/// The message is fully rendered at the moment of failure; placeholder
/// syntax never leaks into it.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct Fault {
    message: String,
    actual: Value,
    expected: Option<Value>,
}

impl Fault {
    /// Build a fault from an already-rendered message.
    pub fn new(message: impl Into<String>, actual: Value, expected: Option<Value>) -> Self {
        Self {
            message: message.into(),
            actual,
            expected,
        }
    }

    /// The rendered failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The value that failed the predicate.
    pub fn actual(&self) -> &Value {
        &self.actual
    }

    /// What the predicate wanted, when it had a single expectation.
    pub fn expected(&self) -> Option<&Value> {
        self.expected.as_ref()
    }
}

/// Misuse of the assertion API, distinct from a failed assertion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ContractViolation {
    /// A throw-family predicate was invoked on a non-function subject.
    #[error("{name} is not a function")]
    FunctionRequired { name: String, subject: Value },

    /// A traversal combinator was invoked on a non-array subject.
    #[error("{name} is not an array")]
    ArrayRequired { name: String, subject: Value },

    /// A promise-family predicate was invoked on a non-promise subject.
    #[error("{name} is not a promise")]
    PromiseRequired { name: String, subject: Value },

    /// An extension predicate was invoked before being installed.
    #[error("no assertion named '{name}' is installed")]
    UnknownAssertion { name: String },
}

/// Any assertion error: a genuine failure or a contract violation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AssertError {
    #[error(transparent)]
    Fault(#[from] Fault),
    #[error(transparent)]
    Contract(#[from] ContractViolation),
}

impl AssertError {
    /// Whether this is a genuine assertion failure.
    pub fn is_fault(&self) -> bool {
        matches!(self, AssertError::Fault(_))
    }

    /// The fault, if this is one.
    pub fn as_fault(&self) -> Option<&Fault> {
        match self {
            AssertError::Fault(fault) => Some(fault),
            AssertError::Contract(_) => None,
        }
    }

    /// The contract violation, if this is one.
    pub fn as_contract(&self) -> Option<&ContractViolation> {
        match self {
            AssertError::Fault(_) => None,
            AssertError::Contract(violation) => Some(violation),
        }
    }
}

// Errors convert into error-class values, so a function under test can
// throw a failed assertion and `throws_a(&ASSERTION_ERROR)` can catch it.

impl From<Fault> for Value {
    fn from(fault: Fault) -> Value {
        Value::object_of(
            &ASSERTION_ERROR,
            [
                ("message", Value::from(fault.message)),
                ("actual", fault.actual),
                ("expected", fault.expected.unwrap_or(Value::Undefined)),
            ],
        )
    }
}

impl From<ContractViolation> for Value {
    fn from(violation: ContractViolation) -> Value {
        Value::error_of(&ERROR, violation.to_string())
    }
}

impl From<AssertError> for Value {
    fn from(error: AssertError) -> Value {
        match error {
            AssertError::Fault(fault) => Value::from(fault),
            AssertError::Contract(violation) => Value::from(violation),
        }
    }
}
