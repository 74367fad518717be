//! Constructor descriptors for the dynamic value model.
//!
//! A `Class` stands in for a runtime constructor: objects carry a reference
//! to the class they were built with, and `is_instance_of` walks the parent
//! chain. Identity is pointer identity, so two classes are the same class
//! only if they are literally the same `static`.

use std::fmt;

/// A named constructor with single inheritance.
///
/// Built-in classes live in this module (`OBJECT`, `ARRAY`, `ERROR`, ...).
/// User code declares its own as statics:
///
/// ```
/// use attest::{classes, Class};
///
/// static SOME_ERROR: Class = Class::extending("SomeError", &classes::ERROR);
///
/// assert!(SOME_ERROR.derives_from(&classes::ERROR));
/// assert!(!SOME_ERROR.derives_from(&classes::ARRAY));
/// ```
pub struct Class {
    name: &'static str,
    parent: Option<&'static Class>,
}

impl Class {
    /// Create a root class with no parent.
    pub const fn new(name: &'static str) -> Self {
        Self { name, parent: None }
    }

    /// Create a class deriving from `parent`.
    pub const fn extending(name: &'static str, parent: &'static Class) -> Self {
        Self {
            name,
            parent: Some(parent),
        }
    }

    /// The class name as it appears in failure messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The direct parent class, if any.
    pub fn parent(&self) -> Option<&'static Class> {
        self.parent
    }

    /// Whether this class is `ancestor` or derives from it, directly or
    /// transitively.
    pub fn derives_from(&self, ancestor: &'static Class) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if std::ptr::eq(class, ancestor) {
                return true;
            }
            current = class.parent;
        }
        false
    }
}

// Classes compare by identity, never by name: two statics with the same
// name are still distinct constructors.
impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class").field("name", &self.name).finish()
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The class of plain objects, and the root of every built-in chain.
pub static OBJECT: Class = Class::new("Object");

/// The class of every array value.
pub static ARRAY: Class = Class::extending("Array", &OBJECT);

/// The class of every function value.
pub static FUNCTION: Class = Class::extending("Function", &OBJECT);

/// The class of every promise value.
pub static PROMISE: Class = Class::extending("Promise", &OBJECT);

/// The base error class.
pub static ERROR: Class = Class::extending("Error", &OBJECT);

/// The class of errors produced by failed assertions.
pub static ASSERTION_ERROR: Class = Class::extending("AssertionError", &ERROR);
