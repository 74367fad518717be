//! Property and length predicates.
//!
//! The `has_*` predicates that locate a property hand back a child
//! assertion whose name extends the parent's, so a failure deep in a
//! structure reports the full path to the offending value.

use super::{AssertResult, Assertion};

impl Assertion {
    /// Assert the named property is present, and descend into it. The
    /// returned assertion is named `<property> property` under this one.
    /// A property explicitly set to `Undefined` counts as present.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::{that, value};
    ///
    /// # fn main() -> Result<(), attest::AssertError> {
    /// that(value!({ "count": 3 }))
    ///     .has_property("count")?
    ///     .is_equal_to(3)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn has_property(self, property: &str) -> AssertResult {
        match self.value.property(property) {
            Some(found) => {
                let child = self.child(found, format!("{} property", property));
                Ok(child)
            }
            None => Err(self.fire_with(
                "{name} should have a {property} property",
                None,
                vec![("property", property.to_string())],
            )),
        }
    }

    /// Like [`has_property`](Assertion::has_property), but applies `check`
    /// to the property and then resumes chaining on the original value.
    pub fn has_property_and<F>(self, property: &str, check: F) -> AssertResult
    where
        F: FnOnce(Assertion) -> AssertResult,
    {
        let Some(found) = self.value.property(property) else {
            return Err(self.fire_with(
                "{name} should have a {property} property",
                None,
                vec![("property", property.to_string())],
            ));
        };
        check(self.child(found, format!("{} property", property)))?;
        Ok(self)
    }

    pub fn does_not_have_property(self, property: &str) -> AssertResult {
        if self.value.property(property).is_none() {
            Ok(self)
        } else {
            Err(self.fire_with(
                "{name} should not have a {property} property",
                None,
                vec![("property", property.to_string())],
            ))
        }
    }

    /// Assert the named property is carried by the value itself, and
    /// descend into it. Arrays own their indices and `length`; text owns
    /// its `length`.
    pub fn has_own_property(self, property: &str) -> AssertResult {
        match self.value.own_property(property) {
            Some(found) => {
                let child = self.child(found, format!("{} own property", property));
                Ok(child)
            }
            None => Err(self.fire_with(
                "{name} should have its own {property} property",
                None,
                vec![("property", property.to_string())],
            )),
        }
    }

    /// Like [`has_own_property`](Assertion::has_own_property), but applies
    /// `check` to the property and then resumes chaining on the original
    /// value.
    pub fn has_own_property_and<F>(self, property: &str, check: F) -> AssertResult
    where
        F: FnOnce(Assertion) -> AssertResult,
    {
        let Some(found) = self.value.own_property(property) else {
            return Err(self.fire_with(
                "{name} should have its own {property} property",
                None,
                vec![("property", property.to_string())],
            ));
        };
        check(self.child(found, format!("{} own property", property)))?;
        Ok(self)
    }

    pub fn does_not_have_own_property(self, property: &str) -> AssertResult {
        if self.value.owns_property(property) {
            Err(self.fire_with(
                "{name} should not have its own {property} property",
                None,
                vec![("property", property.to_string())],
            ))
        } else {
            Ok(self)
        }
    }

    /// Apply `check` to the value's length, then resume chaining on the
    /// original value. The length assertion is named `length` under this
    /// one, so a failure reads like `actual value length should be ...`.
    pub fn has_length<F>(self, check: F) -> AssertResult
    where
        F: FnOnce(Assertion) -> AssertResult,
    {
        check(self.child(self.value.length(), "length"))?;
        Ok(self)
    }

    /// Assert the value's length equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::that;
    ///
    /// # fn main() -> Result<(), attest::AssertError> {
    /// that("abc").has_length_of(3)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn has_length_of(self, expected: usize) -> AssertResult {
        self.has_length(|length| length.is_equal_to(expected))
    }
}
