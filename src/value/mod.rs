//! Dynamic value model for assertion subjects.
//!
//! Assertions operate on [`Value`], a tagged representation of the kinds of
//! data a test can reasonably hand to an assertion library:
//! - primitives: `Undefined`, `Null`, booleans, 64-bit float numbers, text
//! - compounds: arrays, class-tagged objects
//! - behavior: zero-argument fallible functions, promises
//!
//! Compound values live behind [`Arc`], so cloning a `Value` preserves
//! identity: strict equality compares primitives by value and compounds by
//! pointer, which is what lets `is_equal_to` distinguish "the same object"
//! from "an object that merely looks alike" (that distinction is the whole
//! point of the deep-equality family).

pub mod class;
mod convert;
mod promise;

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

pub use class::Class;
pub use promise::{PromiseData, Settlement};

use class::{ARRAY, ERROR, FUNCTION, OBJECT, PROMISE};

/// A dynamically-typed assertion subject.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent value, distinct from `Null`.
    Undefined,
    /// The null value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. `NaN` is a number that is never strictly equal to itself.
    Number(f64),
    /// Text, compared by content.
    Text(Arc<str>),
    /// An ordered sequence of values.
    Array(Arc<ArrayData>),
    /// A bag of named properties tagged with a constructor class.
    Object(Arc<ObjectData>),
    /// A zero-argument callable that returns a value or throws one.
    Function(Arc<FunctionData>),
    /// An eventual value; see [`PromiseData`].
    Promise(Arc<PromiseData>),
}

/// The runtime kind of a value, one probe per type-family predicate.
///
/// `Null`, arrays, objects and promises all report [`TypeOf::Object`]; the
/// deep-equality engine relies on that grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeOf {
    Undefined,
    Object,
    Boolean,
    Number,
    String,
    Function,
}

impl fmt::Display for TypeOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TypeOf::Undefined => "undefined",
            TypeOf::Object => "object",
            TypeOf::Boolean => "boolean",
            TypeOf::Number => "number",
            TypeOf::String => "string",
            TypeOf::Function => "function",
        };
        f.write_str(label)
    }
}

/// Array payload: elements plus the frozen flag.
#[derive(Debug, Clone)]
pub struct ArrayData {
    elements: Vec<Value>,
    frozen: bool,
}

impl ArrayData {
    /// The elements in order.
    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    /// Whether this array was produced by [`Value::frozen`].
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

/// Object payload: named properties, constructor class, frozen flag.
#[derive(Debug, Clone)]
pub struct ObjectData {
    properties: BTreeMap<String, Value>,
    class: &'static Class,
    frozen: bool,
}

impl ObjectData {
    /// All own properties, keyed by name.
    pub fn properties(&self) -> &BTreeMap<String, Value> {
        &self.properties
    }

    /// The constructor this object was built with.
    pub fn class(&self) -> &'static Class {
        self.class
    }

    /// Whether this object was produced by [`Value::frozen`].
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

/// Function payload. Calls take no arguments and either return a value or
/// throw one.
pub struct FunctionData {
    call: Box<dyn Fn() -> Result<Value, Value> + Send + Sync>,
}

impl FunctionData {
    /// Invoke the function once.
    pub fn invoke(&self) -> Result<Value, Value> {
        (self.call)()
    }
}

impl fmt::Debug for FunctionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionData").finish_non_exhaustive()
    }
}

// ============================================================================
// Construction
// ============================================================================

impl Value {
    /// Build an array value.
    pub fn array(elements: Vec<Value>) -> Value {
        Value::Array(Arc::new(ArrayData {
            elements,
            frozen: false,
        }))
    }

    /// Build a plain object.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::Value;
    ///
    /// let point = Value::object([("x", Value::from(1)), ("y", Value::from(2))]);
    /// assert!(point.owns_property("x"));
    /// ```
    pub fn object<K, I>(properties: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::object_of(&OBJECT, properties)
    }

    /// Build an object tagged with a specific constructor class.
    pub fn object_of<K, I>(class: &'static Class, properties: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(Arc::new(ObjectData {
            properties: properties
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
            class,
            frozen: false,
        }))
    }

    /// Build an `Error`-class object with a `message` property.
    pub fn error(message: impl Into<String>) -> Value {
        Value::error_of(&ERROR, message)
    }

    /// Build an error object of a specific class with a `message` property.
    pub fn error_of(class: &'static Class, message: impl Into<String>) -> Value {
        Value::object_of(class, [("message", Value::from(message.into()))])
    }

    /// Build a function value from a fallible zero-argument closure.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::Value;
    ///
    /// let doubler = Value::function(|| Ok::<_, Value>(Value::from(8)));
    /// ```
    pub fn function<F, E>(f: F) -> Value
    where
        F: Fn() -> Result<Value, E> + Send + Sync + 'static,
        E: Into<Value>,
    {
        Value::Function(Arc::new(FunctionData {
            call: Box::new(move || f().map_err(Into::into)),
        }))
    }

    /// A function that always returns `value`.
    pub fn returning(value: impl Into<Value>) -> Value {
        let value = value.into();
        Value::function(move || Ok::<_, Value>(value.clone()))
    }

    /// A function that always throws `error`.
    pub fn throwing(error: impl Into<Value>) -> Value {
        let error = error.into();
        Value::function(move || Err::<Value, _>(error.clone()))
    }

    /// Build a promise value from a settlement future.
    pub fn promise(future: impl Future<Output = Settlement> + Send + 'static) -> Value {
        Value::Promise(Arc::new(PromiseData::new(future)))
    }

    /// An already-fulfilled promise.
    pub fn resolved(value: impl Into<Value>) -> Value {
        Value::promise(std::future::ready(Ok(value.into())))
    }

    /// An already-rejected promise.
    pub fn rejected(error: impl Into<Value>) -> Value {
        Value::promise(std::future::ready(Err(error.into())))
    }

    /// A copy of this value with the frozen flag set.
    ///
    /// Shallow, and a copy rather than an in-place mutation: the original
    /// value (and anything else sharing it) stays unfrozen. Primitives are
    /// returned unchanged since they already count as frozen.
    pub fn frozen(&self) -> Value {
        match self {
            Value::Array(data) => Value::Array(Arc::new(ArrayData {
                elements: data.elements.clone(),
                frozen: true,
            })),
            Value::Object(data) => Value::Object(Arc::new(ObjectData {
                properties: data.properties.clone(),
                class: data.class,
                frozen: true,
            })),
            other => other.clone(),
        }
    }
}

// ============================================================================
// Inspection
// ============================================================================

impl Value {
    /// The runtime kind of this value.
    pub fn type_of(&self) -> TypeOf {
        match self {
            Value::Undefined => TypeOf::Undefined,
            Value::Null | Value::Array(_) | Value::Object(_) | Value::Promise(_) => TypeOf::Object,
            Value::Bool(_) => TypeOf::Boolean,
            Value::Number(_) => TypeOf::Number,
            Value::Text(_) => TypeOf::String,
            Value::Function(_) => TypeOf::Function,
        }
    }

    /// Whether this is the number `NaN`.
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    /// Boolean coercion: `false`, `0`, `NaN`, empty text, `Null` and
    /// `Undefined` are falsy, everything else is truthy.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Text(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Function(_) | Value::Promise(_) => true,
        }
    }

    /// The constructor class of this value, if it has one.
    ///
    /// Primitives have none; arrays, functions and promises have fixed
    /// classes; objects carry the class they were built with.
    pub fn class_of(&self) -> Option<&'static Class> {
        match self {
            Value::Array(_) => Some(&ARRAY),
            Value::Object(data) => Some(data.class),
            Value::Function(_) => Some(&FUNCTION),
            Value::Promise(_) => Some(&PROMISE),
            _ => None,
        }
    }

    /// Whether this value's class is `class` or derives from it.
    pub fn instance_of(&self, class: &'static Class) -> bool {
        match self.class_of() {
            Some(own) => own.derives_from(class),
            None => false,
        }
    }

    /// Look up an own property by name.
    ///
    /// Objects expose their map entries. Arrays own `length` and their
    /// canonical decimal indices; text owns `length` and one property per
    /// character. Everything else owns nothing.
    pub fn own_property(&self, name: &str) -> Option<Value> {
        match self {
            Value::Object(data) => data.properties.get(name).cloned(),
            Value::Array(data) => {
                if name == "length" {
                    return Some(Value::Number(data.elements.len() as f64));
                }
                canonical_index(name, data.elements.len()).map(|i| data.elements[i].clone())
            }
            Value::Text(text) => {
                let chars = text.chars().count();
                if name == "length" {
                    return Some(Value::Number(chars as f64));
                }
                canonical_index(name, chars)
                    .and_then(|i| text.chars().nth(i))
                    .map(|c| Value::from(c.to_string()))
            }
            _ => None,
        }
    }

    /// Look up a visible property by name.
    ///
    /// The model has no data-carrying prototype chain, so this resolves
    /// exactly like [`Value::own_property`]; the assertion API keeps both
    /// spellings because their failure messages and child labels differ.
    pub fn property(&self, name: &str) -> Option<Value> {
        self.own_property(name)
    }

    /// Whether [`Value::own_property`] would find `name`.
    pub fn owns_property(&self, name: &str) -> bool {
        self.own_property(name).is_some()
    }

    /// The value of this subject's `length`: character count for text,
    /// element count for arrays, the `length` property for objects (if
    /// any), arity for functions, and `Undefined` otherwise.
    pub fn length(&self) -> Value {
        match self {
            Value::Text(text) => Value::Number(text.chars().count() as f64),
            Value::Array(data) => Value::Number(data.elements.len() as f64),
            Value::Object(data) => data
                .properties
                .get("length")
                .cloned()
                .unwrap_or(Value::Undefined),
            Value::Function(_) => Value::Number(0.0),
            _ => Value::Undefined,
        }
    }

    /// Whether this value is frozen.
    ///
    /// Primitives always are; arrays and objects carry a flag; functions
    /// and promises never are.
    pub fn is_frozen(&self) -> bool {
        match self {
            Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) | Value::Text(_) => {
                true
            }
            Value::Array(data) => data.frozen,
            Value::Object(data) => data.frozen,
            Value::Function(_) | Value::Promise(_) => false,
        }
    }
}

/// Accept only the canonical decimal rendering of an in-bounds index, so
/// `"01"` and `"+1"` are not array properties.
fn canonical_index(name: &str, len: usize) -> Option<usize> {
    let index: usize = name.parse().ok()?;
    (index.to_string() == name && index < len).then_some(index)
}

// ============================================================================
// Strict equality
// ============================================================================

/// Strict equality: primitives by value, compounds by identity.
///
/// `NaN` is not strictly equal to itself, and two structurally identical
/// arrays are not strictly equal unless they are the same array. This is
/// the comparison behind `is_equal_to`; the structural counterpart lives in
/// [`crate::deep::deep_equals`].
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::Text(x), Value::Text(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => Arc::ptr_eq(x, y),
        (Value::Object(x), Value::Object(y)) => Arc::ptr_eq(x, y),
        (Value::Function(x), Value::Function(y)) => Arc::ptr_eq(x, y),
        (Value::Promise(x), Value::Promise(y)) => Arc::ptr_eq(x, y),
        _ => false,
    }
}

// `==` on values means strict equality. Not `Eq`: `NaN != NaN`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        strict_equals(self, other)
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => format_number(f, *n),
            Value::Text(s) => write!(f, "\"{}\"", s),
            Value::Array(data) => {
                f.write_str("[")?;
                for (i, element) in data.elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                f.write_str("]")
            }
            Value::Object(data) => {
                if data.class != &OBJECT {
                    write!(f, "{} ", data.class)?;
                }
                f.write_str("{")?;
                for (i, (name, value)) in data.properties.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", name, value)?;
                }
                f.write_str("}")
            }
            Value::Function(_) => f.write_str("function"),
            Value::Promise(_) => f.write_str("promise"),
        }
    }
}

fn format_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}
