//! Values that declare their own monoid.
//!
//! Any statically typed [`Monoid`] can travel through the dynamic layer as a
//! [`Value::Declared`]. Dispatch goes straight to the type's own `mempty`,
//! `mappend` and `mconcat`, so classification is never consulted.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use super::error::MonoidError;
use super::value::Value;
use crate::typeclass::Monoid;

/// Object-safe view of a typed monoid.
pub(crate) trait DynMonoid: fmt::Debug {
    fn type_name(&self) -> &'static str;

    fn mempty_value(&self) -> Value;

    fn mappend_value(&self, other: &Value) -> Result<Value, MonoidError>;

    /// Folds `self` followed by `rest` with the type's own `mconcat`.
    fn mconcat_value(&self, rest: &[Value]) -> Result<Value, MonoidError>;

    fn eq_value(&self, other: &Value) -> bool;

    fn as_any(&self) -> &dyn Any;
}

impl<M> DynMonoid for M
where
    M: Monoid + Clone + PartialEq + fmt::Debug + 'static,
{
    fn type_name(&self) -> &'static str {
        std::any::type_name::<M>()
    }

    fn mempty_value(&self) -> Value {
        Value::declared(M::mempty())
    }

    fn mappend_value(&self, other: &Value) -> Result<Value, MonoidError> {
        let right = other
            .downcast_declared::<M>()
            .ok_or_else(|| MonoidError::mismatch(DynMonoid::type_name(self), other.type_name()))?;
        Ok(Value::declared(self.clone().mappend(right)))
    }

    fn mconcat_value(&self, rest: &[Value]) -> Result<Value, MonoidError> {
        let mut monoids = Vec::with_capacity(rest.len() + 1);
        monoids.push(self.clone());
        for value in rest {
            let monoid = value
                .downcast_declared::<M>()
                .ok_or_else(|| MonoidError::mismatch(DynMonoid::type_name(self), value.type_name()))?;
            monoids.push(monoid);
        }
        Ok(Value::declared(M::mconcat(monoids)))
    }

    fn eq_value(&self, other: &Value) -> bool {
        other
            .downcast_declared::<M>()
            .is_some_and(|monoid| *self == monoid)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A typed monoid carried inside a [`Value`].
#[derive(Clone)]
pub struct Declared(Rc<dyn DynMonoid>);

impl Declared {
    pub(crate) fn new<M>(monoid: M) -> Self
    where
        M: Monoid + Clone + PartialEq + fmt::Debug + 'static,
    {
        Self(Rc::new(monoid))
    }

    /// Full Rust type name of the carried monoid.
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    pub(crate) fn downcast_ref<M: 'static>(&self) -> Option<&M> {
        self.0.as_any().downcast_ref::<M>()
    }

    pub(crate) fn mempty(&self) -> Value {
        self.0.mempty_value()
    }

    pub(crate) fn mappend(&self, other: &Value) -> Result<Value, MonoidError> {
        self.0.mappend_value(other)
    }

    pub(crate) fn mconcat(&self, rest: &[Value]) -> Result<Value, MonoidError> {
        self.0.mconcat_value(rest)
    }

    pub(crate) fn eq_value(&self, other: &Value) -> bool {
        self.0.eq_value(other)
    }
}

impl fmt::Debug for Declared {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Product, Sum};
    use rstest::rstest;

    #[rstest]
    fn mappend_uses_the_declared_operation() {
        let left = Declared::new(Sum(2));
        assert_eq!(left.mappend(&Value::declared(Sum(5))), Ok(Value::declared(Sum(7))));
    }

    #[rstest]
    fn mappend_rejects_another_monoid_type() {
        let left = Declared::new(Sum(2));
        let error = left.mappend(&Value::declared(Product(5))).unwrap_err();
        assert!(matches!(
            error,
            MonoidError::Mismatch { ref left, ref right } if left.contains("Sum") && right.contains("Product")
        ));
    }

    #[rstest]
    fn mappend_rejects_builtin_values() {
        let error = Declared::new(Sum(2)).mappend(&Value::from(5)).unwrap_err();
        assert!(matches!(error, MonoidError::Mismatch { ref right, .. } if right == "int"));
    }

    #[rstest]
    fn mempty_comes_from_the_type() {
        assert_eq!(Declared::new(Product(9)).mempty(), Value::declared(Product(1)));
    }

    #[rstest]
    fn mconcat_folds_self_and_rest() {
        let first = Declared::new(String::from("a"));
        let rest = [Value::declared(String::from("b")), Value::declared(String::from("c"))];
        assert_eq!(first.mconcat(&rest), Ok(Value::declared(String::from("abc"))));
    }

    #[rstest]
    fn downcast_matches_exact_type_only() {
        let declared = Declared::new(Sum(1_i64));
        assert_eq!(declared.downcast_ref::<Sum<i64>>(), Some(&Sum(1)));
        assert_eq!(declared.downcast_ref::<Sum<i32>>(), None);
    }
}
