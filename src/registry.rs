//! Process-wide registry of named extension predicates.
//!
//! Installing a predicate makes it available to every assertion from
//! then on, looked up by name through [`Assertion::apply`]. The
//! predicate surface is deliberately open: anything following the
//! "return the assertion or fire" contract can be installed, including
//! replacements for existing names. Applying a name that was never
//! installed is a [`ContractViolation::UnknownAssertion`], not a failed
//! assertion.
//!
//! [`ContractViolation::UnknownAssertion`]: crate::error::ContractViolation::UnknownAssertion

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use crate::error::{AssertError, ContractViolation};
use crate::fluent::{AssertResult, Assertion};

type Predicate = dyn Fn(Assertion) -> AssertResult + Send + Sync;

static REGISTRY: OnceLock<RwLock<HashMap<String, Arc<Predicate>>>> = OnceLock::new();

fn registry() -> &'static RwLock<HashMap<String, Arc<Predicate>>> {
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Install (or replace) a named predicate.
///
/// # Example
///
/// ```
/// use attest::{registry, that, Value};
///
/// # fn main() -> Result<(), attest::AssertError> {
/// registry::install("is_even", |it| {
///     if matches!(it.value(), Value::Number(n) if n % 2.0 == 0.0) {
///         Ok(it)
///     } else {
///         Err(it.fire("{name} should be even but is {actual}", None))
///     }
/// });
///
/// that(4).apply("is_even")?;
/// assert!(that(3).apply("is_even").is_err());
/// # Ok(())
/// # }
/// ```
pub fn install<F>(name: impl Into<String>, check: F)
where
    F: Fn(Assertion) -> AssertResult + Send + Sync + 'static,
{
    let mut table = match registry().write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    table.insert(name.into(), Arc::new(check));
}

/// Whether a predicate with this name has been installed.
pub fn installed(name: &str) -> bool {
    let table = match registry().read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    table.contains_key(name)
}

// The Arc is cloned out so the guard is released before the predicate
// runs; an installed predicate may itself consult the registry.
fn lookup(name: &str) -> Option<Arc<Predicate>> {
    let table = match registry().read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    table.get(name).cloned()
}

impl Assertion {
    /// Run the installed predicate named `name` against this assertion.
    pub fn apply(self, name: &str) -> AssertResult {
        match lookup(name) {
            Some(check) => check(self),
            None => Err(AssertError::Contract(ContractViolation::UnknownAssertion {
                name: name.to_string(),
            })),
        }
    }
}
