//! Monoid type class - semigroups with an identity element.
//!
//! A type is a monoid if it has an associative [`mappend`](super::Semigroup::mappend)
//! and an identity element [`mempty`](Monoid::mempty).
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! T::mempty().mappend(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.mappend(T::mempty()) == a
//! ```
//!
//! ## Associativity (inherited from Semigroup)
//!
//! ```text
//! a.mappend(b).mappend(c) == a.mappend(b.mappend(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadix::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::mempty().mappend(String::from("hello")), "hello");
//! assert_eq!(
//!     String::mconcat(vec![String::from("a"), String::from("b"), String::from("c")]),
//!     "abc"
//! );
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// [`mconcat`](Monoid::mconcat) folds left to right seeded by `mempty`.
/// Implementations may override it with a faster equivalent; the override
/// must produce the same result as the fold.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn mempty() -> Self;

    /// Combines every element of an iterator, left to right.
    ///
    /// Returns [`mempty`](Monoid::mempty) for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::typeclass::Monoid;
    ///
    /// assert_eq!(Vec::mconcat(vec![vec![1], vec![2, 3]]), vec![1, 2, 3]);
    /// assert_eq!(Vec::<i32>::mconcat(Vec::new()), Vec::<i32>::new());
    /// ```
    fn mconcat<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        items
            .into_iter()
            .fold(Self::mempty(), |accumulator, item| accumulator.mappend(item))
    }

    /// Returns `true` if this value equals the identity element.
    fn is_mempty(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::mempty()
    }
}

impl Monoid for String {
    fn mempty() -> Self {
        Self::new()
    }

    fn mconcat<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().collect()
    }
}

impl<T> Monoid for Vec<T> {
    fn mempty() -> Self {
        Self::new()
    }

    fn mconcat<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().flatten().collect()
    }
}

impl Monoid for () {
    fn mempty() -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn mempty() -> Self {
        (A::mempty(), B::mempty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("text")]
    fn string_identity_laws(#[case] value: &str) {
        let value = value.to_string();
        assert_eq!(String::mempty().mappend(value.clone()), value);
        assert_eq!(value.clone().mappend(String::mempty()), value);
    }

    #[rstest]
    fn string_mconcat_matches_fold() {
        let parts = vec![String::from("x"), String::from("y"), String::from("z")];
        let folded = parts
            .clone()
            .into_iter()
            .fold(String::mempty(), Semigroup::mappend);
        assert_eq!(String::mconcat(parts), folded);
    }

    #[rstest]
    fn vec_mconcat_flattens_in_order() {
        assert_eq!(Vec::mconcat(vec![vec![1, 2], vec![], vec![3]]), vec![1, 2, 3]);
    }

    #[rstest]
    fn is_mempty_detects_identity() {
        assert!(String::new().is_mempty());
        assert!(!String::from("a").is_mempty());
    }

    #[rstest]
    fn tuple_mempty_is_component_wise() {
        let empty: (String, Vec<i32>) = Monoid::mempty();
        assert_eq!(empty, (String::new(), Vec::new()));
    }
}
