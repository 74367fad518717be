//! Conversions into [`Value`] from Rust primitives and JSON.

use std::sync::Arc;

use super::Value;

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

// All numbers are 64-bit floats, as in the runtime this model mirrors.
macro_rules! number_into_value {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Value {
            fn from(n: $t) -> Value {
                Value::Number(n as f64)
            }
        }
    )*};
}

number_into_value!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(Arc::from(s.as_str()))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(elements: Vec<T>) -> Value {
        Value::array(elements.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::from(s),
            serde_json::Value::Array(items) => {
                Value::array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::object(map.into_iter().map(|(name, item)| (name, Value::from(item))))
            }
        }
    }
}

/// Build a [`Value`] from a JSON literal.
///
/// This is `serde_json::json!` syntax; the result is converted into the
/// assertion value model, so nested maps become plain objects and nested
/// vectors become arrays.
///
/// # Example
///
/// ```
/// use attest::{value, Value};
///
/// let things = value!({ "colors": ["red", "blue"], "count": 2 });
/// assert_eq!(things.own_property("count"), Some(Value::from(2)));
/// ```
#[macro_export]
macro_rules! value {
    ($($json:tt)+) => {
        $crate::Value::from($crate::serde_json::json!($($json)+))
    };
}
