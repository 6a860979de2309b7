//! Apply and Applicative type classes - functions inside a context.
//!
//! [`Apply`] applies a function held in a context to a value held in a
//! context of the same family. [`Applicative`] adds [`unit`](Applicative::unit),
//! the constructor of the minimal context around a plain value.
//!
//! Each concrete type supplies its own `apply`; nothing here derives it from
//! `bind`. `Map` implements [`Apply`] without [`Applicative`] because its
//! minimal context needs a key as well as a value.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! F::unit(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! F::unit(f).apply(F::unit(x)) == F::unit(f(x))
//! ```
//!
//! ## Interchange
//!
//! ```text
//! u.apply(F::unit(y)) == F::unit(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadix::typeclass::{Applicative, Apply, Identity};
//!
//! let function = Identity::unit(|x: i32| x * 2);
//! assert_eq!(function.apply(Identity::unit(21)), Identity::new(42));
//! ```

use super::functor::Functor;

/// A functor whose contained functions can be applied to contained values.
pub trait Apply: Functor {
    /// Applies the function(s) inside `self` to the value(s) inside `other`.
    ///
    /// `self` must hold functions from `B` to `C`. `B: Clone` is required
    /// because some instances (such as `List`) feed one value to several
    /// functions.
    fn apply<B, C>(self, other: Self::WithType<B>) -> Self::WithType<C>
    where
        Self::Inner: Fn(B) -> C,
        B: Clone + 'static,
        C: 'static;
}

/// An [`Apply`] with a minimal-context constructor.
///
/// `unit` must not add any hidden side data: `Writer::unit` carries the
/// identity log, `State::unit` passes the state through untouched.
pub trait Applicative: Apply {
    /// Wraps a plain value in the minimal context of this type.
    fn unit(value: Self::Inner) -> Self
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;
    use rstest::rstest;

    fn add_one(value: i32) -> i32 {
        value + 1
    }

    #[rstest]
    fn identity_law_holds() {
        let value = Identity::new(5);
        let result = Identity::unit(|x: i32| x).apply(value);
        assert_eq!(result, value);
    }

    #[rstest]
    fn homomorphism_law_holds() {
        let left = Identity::unit(add_one).apply(Identity::unit(4));
        assert_eq!(left, Identity::unit(add_one(4)));
    }

    #[rstest]
    fn interchange_law_holds() {
        let function = Identity::unit(add_one);
        let left = function.apply(Identity::unit(7));
        let right = Identity::unit(move |f: fn(i32) -> i32| f(7)).apply(Identity::unit(add_one as fn(i32) -> i32));
        assert_eq!(left, right);
    }
}
