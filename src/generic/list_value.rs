//! Dynamic construction and extension of `List<Value>`.
//!
//! Iterable values are spread into elements; strings and mappings are
//! treated as single elements.

use super::error::MonoidError;
use super::value::Value;
use crate::collection::List;

/// Spreads an iterable value into its elements, or hands it back unchanged.
fn spread(value: Value) -> Result<Vec<Value>, Value> {
    match value {
        Value::List(elements) | Value::Tuple(elements) => Ok(elements),
        Value::Set(members) | Value::FrozenSet(members) => Ok(members.into_iter().map(Value::from).collect()),
        Value::Opaque(opaque) => {
            let shape = opaque.shape();
            if shape.as_text().is_some() || shape.as_mapping().is_some() {
                return Err(Value::Opaque(opaque));
            }
            if let Some(elements) = shape.as_sequence() {
                return Ok(elements);
            }
            match shape.as_set() {
                Some(members) => Ok(members.into_iter().map(Value::from).collect()),
                None => Err(Value::Opaque(opaque)),
            }
        }
        other => Err(other),
    }
}

impl List<Value> {
    /// Builds a list from a dynamic value.
    ///
    /// Lists, tuples, sets and sequence- or set-shaped values become the
    /// list's elements. Strings, dicts and scalars become its only element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::collection::List;
    /// use monadix::generic::Value;
    ///
    /// assert_eq!(List::unit_value(Value::tuple([1, 2])), List::from(vec![Value::from(1), Value::from(2)]));
    /// assert_eq!(List::unit_value(Value::from("ab")), List::singleton(Value::from("ab")));
    /// assert_eq!(List::unit_value(Value::from(4)), List::singleton(Value::from(4)));
    /// ```
    pub fn unit_value(value: Value) -> Self {
        match spread(value) {
            Ok(elements) => Self::from(elements),
            Err(single) => Self::singleton(single),
        }
    }

    /// Appends the elements of an iterable value.
    ///
    /// The transient identity leaves the list unchanged.
    ///
    /// # Errors
    ///
    /// [`MonoidError::Mismatch`] naming both types when `other` is a
    /// string, a mapping or a scalar.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::collection::List;
    /// use monadix::generic::{MonoidError, Value};
    ///
    /// let list = List::from(vec![Value::from(1)]);
    /// assert_eq!(
    ///     list.clone().mappend_value(Value::set([2])),
    ///     Ok(List::from(vec![Value::from(1), Value::from(2)]))
    /// );
    /// assert_eq!(
    ///     list.mappend_value(Value::from("2")),
    ///     Err(MonoidError::Mismatch { left: "List".to_owned(), right: "str".to_owned() })
    /// );
    /// ```
    pub fn mappend_value(self, other: Value) -> Result<Self, MonoidError> {
        if other.is_mempty() {
            return Ok(self);
        }
        match spread(other) {
            Ok(elements) => Ok(self.into_iter().chain(elements).collect()),
            Err(rejected) => Err(MonoidError::mismatch("List", rejected.type_name())),
        }
    }
}
