//! # attest
//!
//! A fluent assertion library with named-path failure messages and
//! structural deep equality.
//!
//! Subjects are modeled as dynamic [`Value`]s. [`that`] wraps one in an
//! [`Assertion`]; every predicate consumes the assertion and hands it back
//! in `Ok`, so chains compose with `?` and the first failure aborts the
//! chain with a message naming the full path to the offending value.
//!
//! ## Quick Start
//!
//! ```rust
//! use attest::{that, value};
//!
//! # fn main() -> Result<(), attest::AssertError> {
//! that(value!({ "name": "green", "hex": "#00FF00" }))
//!     .has_property_and("name", |it| it.is_a_string())?
//!     .has_property_and("hex", |it| it.has_length_of(7))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure Messages
//!
//! Predicates that descend into a subject name their children, and the
//! failure message opens with the composed path:
//!
//! ```rust
//! use attest::{that, value, AssertError};
//!
//! let outcome = that(value!({ "colors": [{ "value": "00FF00" }] }))
//!     .has_own_property_and("colors", |colors| {
//!         colors.every(|it| it.has_property_and("value", |it| it.has_length_of(7)))
//!     });
//!
//! match outcome {
//!     Err(AssertError::Fault(fault)) => assert_eq!(
//!         fault.message(),
//!         "actual value colors own property at index 0 value property \
//!          length should be equal to 7 but is 6"
//!     ),
//!     other => panic!("expected a fault, got {:?}", other),
//! }
//! ```
//!
//! ## Promises
//!
//! The settlement predicates are the only asynchronous surface:
//!
//! ```rust
//! use attest::{that, Value};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), attest::AssertError> {
//! that(Value::resolved(41)).is_fulfilled().await?.is_above(40)?;
//! # Ok(())
//! # }
//! ```

pub mod deep;
pub mod error;
pub mod fluent;
pub mod registry;
pub mod value;

// Core types
pub use error::{AssertError, ContractViolation, Fault};
pub use fluent::{check, fail, that, AssertResult, Assertion};
pub use value::{strict_equals, Class, TypeOf, Value};

// Deep structural equality
pub use deep::{deep_equals, MAX_DEPTH};

// Built-in constructor classes
pub use value::class as classes;

// Supports the `value!` macro expansion.
#[doc(hidden)]
pub use serde_json;
