//! Monad type class - sequencing computations with data-dependent continuations.
//!
//! A `Monad` extends [`Applicative`] with [`bind`](Monad::bind): the next step
//! is chosen by a function of the value produced by the current step. The
//! continuation must return the same container family, which the signature
//! enforces through [`TypeConstructor::WithType`](super::TypeConstructor).
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! M::unit(a).bind(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.bind(M::unit) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadix::typeclass::{Identity, Monad};
//!
//! let result = Identity::new(4).bind(|x| Identity::new(x + 1));
//! assert_eq!(result, Identity::new(5));
//! ```

use super::applicative::Applicative;

/// A type class for sequencing computations.
///
/// # Laws
///
/// ## Left Identity
///
/// ```text
/// M::unit(a).bind(f) == f(a)
/// ```
///
/// ## Right Identity
///
/// ```text
/// m.bind(M::unit) == m
/// ```
///
/// ## Associativity
///
/// ```text
/// m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
/// ```
pub trait Monad: Applicative {
    /// Passes the inner value(s) to `function` and flattens the result.
    ///
    /// Failure variants (`Nothing`, `Left`) return themselves without calling
    /// `function`.
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Alias for [`bind`](Monad::bind).
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static,
    {
        self.bind::<B, F>(function)
    }

    /// Sequences `next` after `self`, discarding the value of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::typeclass::{Identity, Monad};
    ///
    /// assert_eq!(Identity::new(1).then(Identity::new("next")), Identity::new("next"));
    /// ```
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone + 'static,
        B: 'static,
    {
        self.bind::<B, _>(move |_| next.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;
    use rstest::rstest;

    fn increment(value: i32) -> Identity<i32> {
        Identity::new(value + 1)
    }

    fn double(value: i32) -> Identity<i32> {
        Identity::new(value * 2)
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    #[case(-12)]
    fn left_identity(#[case] value: i32) {
        assert_eq!(Identity::unit(value).bind(increment), increment(value));
    }

    #[rstest]
    #[case(4)]
    #[case(99)]
    fn right_identity(#[case] value: i32) {
        let monad = Identity::new(value);
        assert_eq!(monad.bind(Identity::unit), monad);
    }

    #[rstest]
    fn associativity() {
        let monad = Identity::new(4);
        let left = monad.bind(increment).bind(double);
        let right = monad.bind(|x| increment(x).bind(double));
        assert_eq!(left, right);
    }

    #[rstest]
    fn flat_map_matches_bind() {
        assert_eq!(Identity::new(2).flat_map(double), Identity::new(2).bind(double));
    }
}
