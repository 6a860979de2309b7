//! Errors raised by generic monoid inference.

use thiserror::Error;

use super::category::Category;

/// Failure to treat a [`Value`](super::Value) as a monoid.
///
/// Every variant names the runtime types involved so the caller can tell
/// which operand was rejected.
///
/// # Examples
///
/// ```rust
/// use monadix::generic::{self, MonoidError, Value};
///
/// let error = generic::mappend(Value::from(1), Value::from("a")).unwrap_err();
/// assert_eq!(
///     error,
///     MonoidError::Mismatch { left: "int".to_owned(), right: "str".to_owned() }
/// );
/// assert_eq!(error.to_string(), "cannot combine `int` with `str`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonoidError {
    /// The value matches no known category, neither by type nor by shape.
    #[error("no generic monoid known for type `{type_name}`")]
    NoGeneric {
        /// Runtime type name of the rejected value.
        type_name: String,
    },

    /// No identity element is registered for the exact type.
    #[error("no identity element known for type `{type_name}`")]
    NoMempty {
        /// Runtime type name of the rejected value.
        type_name: String,
    },

    /// The classifier has no combine or fold registered for the category.
    #[error("no combine operation registered for category `{category}`")]
    NoMappend {
        /// The category lacking an operation.
        category: Category,
    },

    /// The right operand does not fit the left operand's monoid.
    #[error("cannot combine `{left}` with `{right}`")]
    Mismatch {
        /// Runtime type name of the left operand.
        left: String,
        /// Runtime type name of the right operand.
        right: String,
    },

    /// Integer addition overflowed `i64`.
    #[error("integer overflow adding {left} and {right}")]
    Overflow {
        /// Left addend.
        left: i64,
        /// Right addend.
        right: i64,
    },
}

impl MonoidError {
    pub(crate) fn mismatch(left: &str, right: &str) -> Self {
        Self::Mismatch {
            left: left.to_owned(),
            right: right.to_owned(),
        }
    }
}
