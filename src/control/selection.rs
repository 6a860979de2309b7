//! `First` and `Last` monoids over [`Maybe`].
//!
//! [`First`] keeps the leftmost `Just`, [`Last`] keeps the rightmost one.
//! `Nothing` is the identity of both.

use super::maybe::Maybe;
use crate::typeclass::{Monoid, Semigroup};

/// Keeps the first `Just` encountered.
///
/// # Examples
///
/// ```rust
/// use monadix::control::{First, Maybe};
/// use monadix::typeclass::Monoid;
///
/// let picked = First::mconcat(vec![First(Maybe::Nothing), First(Maybe::just(2)), First(Maybe::just(3))]);
/// assert_eq!(picked, First(Maybe::just(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct First<A>(pub Maybe<A>);

impl<A> First<A> {
    /// Unwraps the inner `Maybe`.
    pub fn into_inner(self) -> Maybe<A> {
        self.0
    }
}

impl<A> Semigroup for First<A> {
    fn mappend(self, other: Self) -> Self {
        if self.0.is_just() { self } else { other }
    }
}

impl<A> Monoid for First<A> {
    fn mempty() -> Self {
        Self(Maybe::Nothing)
    }

    /// Stops consuming the iterator at the first `Just`.
    fn mconcat<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items
            .into_iter()
            .find(|item| item.0.is_just())
            .unwrap_or_else(Self::mempty)
    }
}

/// Keeps the last `Just` encountered.
///
/// # Examples
///
/// ```rust
/// use monadix::control::{Last, Maybe};
/// use monadix::typeclass::Semigroup;
///
/// assert_eq!(Last(Maybe::just(1)).mappend(Last(Maybe::just(5))), Last(Maybe::just(5)));
/// assert_eq!(Last(Maybe::just(1)).mappend(Last(Maybe::Nothing)), Last(Maybe::just(1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Last<A>(pub Maybe<A>);

impl<A> Last<A> {
    /// Unwraps the inner `Maybe`.
    pub fn into_inner(self) -> Maybe<A> {
        self.0
    }
}

impl<A> Semigroup for Last<A> {
    fn mappend(self, other: Self) -> Self {
        if other.0.is_just() { other } else { self }
    }
}

impl<A> Monoid for Last<A> {
    fn mempty() -> Self {
        Self(Maybe::Nothing)
    }
}
