//! Maybe type - an optional value with short-circuiting composition.
//!
//! `Maybe<A>` is either `Just(A)` or `Nothing`. `Nothing` carries no data, so
//! every `Nothing` is the same value by construction; no shared instance or
//! cache is involved.
//!
//! `Nothing` propagates itself through `fmap`, `apply`, `bind` and `filter`.
//! Recovery is explicit through [`Recover`].
//!
//! # Examples
//!
//! ```rust
//! use monadix::control::{Maybe, Recover};
//! use monadix::typeclass::{Functor, Monad};
//!
//! fn half(value: i32) -> Maybe<i32> {
//!     Maybe::checked(value / 2, |_| value % 2 == 0)
//! }
//!
//! assert_eq!(Maybe::just(8).bind(half).bind(half), Maybe::just(2));
//! assert_eq!(Maybe::just(6).bind(half).bind(half), Maybe::Nothing);
//! assert_eq!(Maybe::just(6).bind(half).bind(half).get_or(0), 0);
//! ```

use std::fmt;

use super::recover::Recover;
use crate::typeclass::{Applicative, Apply, Functor, Monad, Monoid, Semigroup, TypeConstructor};

/// An optional value: `Just(value)` or `Nothing`.
///
/// # Examples
///
/// ```rust
/// use monadix::control::Maybe;
///
/// assert_eq!(Maybe::from(Some(1)), Maybe::Just(1));
/// assert_eq!(Maybe::<i32>::from(None), Maybe::Nothing);
/// assert_eq!(Maybe::just(1).to_string(), "Just 1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// A present value.
    Just(A),
    /// The absence of a value.
    Nothing,
}

pub use Maybe::{Just, Nothing};

impl<A> Maybe<A> {
    /// Wraps a value in `Just`.
    #[inline]
    pub const fn just(value: A) -> Self {
        Self::Just(value)
    }

    /// Returns `Nothing`.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Builds `Just(value)` if `checker` accepts the value, `Nothing` otherwise.
    ///
    /// The "value is present" checker is [`From<Option<A>>`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Maybe;
    ///
    /// assert_eq!(Maybe::checked(4, |x| x % 2 == 0), Maybe::Just(4));
    /// assert_eq!(Maybe::checked(3, |x| x % 2 == 0), Maybe::Nothing);
    /// ```
    pub fn checked<C>(value: A, checker: C) -> Self
    where
        C: FnOnce(&A) -> bool,
    {
        if checker(&value) {
            Self::Just(value)
        } else {
            Self::Nothing
        }
    }

    /// Wraps a function so its results pass through [`Maybe::checked`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Maybe;
    ///
    /// let parse = Maybe::wrap_fn(|text: &str| text.parse::<i32>().unwrap_or(-1), |n| *n >= 0);
    /// assert_eq!(parse("12"), Maybe::Just(12));
    /// assert_eq!(parse("x"), Maybe::Nothing);
    /// ```
    pub fn wrap_fn<T, F, C>(function: F, checker: C) -> impl Fn(T) -> Self
    where
        F: Fn(T) -> A,
        C: Fn(&A) -> bool,
    {
        move |argument| Self::checked(function(argument), &checker)
    }

    /// Returns `true` for `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Borrows the inner value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Keeps `Just` if `predicate` holds, otherwise becomes `Nothing`.
    ///
    /// `Nothing` is unaffected and the predicate is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(4).filter(|x| *x > 3), Maybe::just(4));
    /// assert_eq!(Maybe::just(2).filter(|x| *x > 3), Maybe::Nothing);
    /// ```
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) => {
                if predicate(&value) {
                    Self::Just(value)
                } else {
                    Self::Nothing
                }
            }
            Self::Nothing => Self::Nothing,
        }
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(option: Option<A>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

impl<A: fmt::Debug> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just {value:?}"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> Apply for Maybe<A> {
    fn apply<B, C>(self, other: Maybe<B>) -> Maybe<C>
    where
        A: Fn(B) -> C,
        B: Clone + 'static,
        C: 'static,
    {
        match (self, other) {
            (Self::Just(function), Maybe::Just(value)) => Maybe::Just(function(value)),
            _ => Maybe::Nothing,
        }
    }
}

impl<A> Applicative for Maybe<A> {
    fn unit(value: A) -> Self {
        Self::Just(value)
    }
}

impl<A> Monad for Maybe<A> {
    fn bind<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(A) -> Maybe<B> + 'static,
        B: 'static,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> Recover for Maybe<A> {
    fn get_or(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    fn get_or_call<F>(self, function: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => function(),
        }
    }

    fn or_else(self, default: A) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => Self::Just(default),
        }
    }

    fn or_call<F>(self, function: F) -> Self
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Just(_) => self,
            Self::Nothing => Self::Just(function()),
        }
    }
}

/// `Nothing` is the identity; two `Just`s combine their payloads.
impl<A: Semigroup> Semigroup for Maybe<A> {
    fn mappend(self, other: Self) -> Self {
        match (self, other) {
            (Self::Just(left), Self::Just(right)) => Self::Just(left.mappend(right)),
            (Self::Just(value), Self::Nothing) | (Self::Nothing, Self::Just(value)) => {
                Self::Just(value)
            }
            (Self::Nothing, Self::Nothing) => Self::Nothing,
        }
    }
}

impl<A: Semigroup> Monoid for Maybe<A> {
    fn mempty() -> Self {
        Self::Nothing
    }
}
