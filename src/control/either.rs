//! Either type - a success value or an error payload.
//!
//! `Either<L, R>` is `Left(L)` or `Right(R)`. `Right` is the success side:
//! `unit` builds a `Right`, and `fmap`, `apply` and `bind` act on it. A `Left`
//! propagates through every composition step with its payload untouched.
//!
//! Besides the type class instances this module provides:
//!
//! - [`Either::filter`], which turns a rejected `Right` into a `Left` with a
//!   diagnostic message naming the predicate and the value
//! - [`Either::attempt`] and [`Either::attempt_any`], which capture failures
//!   of a fallible function as `Left` values
//!
//! # Examples
//!
//! ```rust
//! use monadix::control::Either;
//! use monadix::typeclass::Monad;
//!
//! fn checked_sqrt(value: f64) -> Either<String, f64> {
//!     if value < 0.0 {
//!         Either::Left(format!("negative input {value}"))
//!     } else {
//!         Either::Right(value.sqrt())
//!     }
//! }
//!
//! assert_eq!(Either::Right(16.0).bind(checked_sqrt), Either::Right(4.0));
//! assert_eq!(
//!     Either::Right(-1.0).bind(checked_sqrt).bind(checked_sqrt),
//!     Either::Left(String::from("negative input -1"))
//! );
//! ```

use std::any::type_name;
use std::error::Error;
use std::fmt;

use super::recover::Recover;
use crate::typeclass::{Applicative, Apply, Functor, Monad, TypeConstructor};

/// A boxed, thread-safe error used by the failure-capturing constructors.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// A value that is either `Left(L)` (failure) or `Right(R)` (success).
///
/// # Examples
///
/// ```rust
/// use monadix::control::Either;
///
/// let right: Either<String, i32> = Either::Right(3);
/// let text = right.fold(|error| error, |value| value.to_string());
/// assert_eq!(text, "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure variant, carrying an error payload.
    Left(L),
    /// The success variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the `Left` payload, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns the `Right` value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Converts into a standard `Result`, `Right` becoming `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(error) => Err(error),
            Self::Right(value) => Ok(value),
        }
    }

    // =========================================================================
    // Mapping and Folding
    // =========================================================================

    /// Transforms the `Left` payload, leaving `Right` untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Collapses both variants into one value.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }
}

// =============================================================================
// Filtering
// =============================================================================

impl<L, R> Either<L, R>
where
    L: From<String>,
    R: fmt::Debug,
{
    /// Keeps `Right` if `predicate` holds, otherwise produces a `Left`
    /// describing the rejection.
    ///
    /// The message has the form ``"`name` false with input `value`"``, where
    /// `name` is the last path segment of the predicate's type name and
    /// `value` is the `Debug` rendering of the rejected value. `Left` is
    /// returned unchanged without calling the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Either;
    ///
    /// fn is_even(value: &i32) -> bool {
    ///     value % 2 == 0
    /// }
    ///
    /// let kept: Either<String, i32> = Either::Right(4).filter(is_even);
    /// assert_eq!(kept, Either::Right(4));
    ///
    /// let rejected: Either<String, i32> = Either::Right(3).filter(is_even);
    /// assert_eq!(rejected, Either::Left(String::from("`is_even` false with input `3`")));
    /// ```
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        self.filter_named(predicate_name::<P>(), predicate)
    }

    /// Like [`filter`](Either::filter), with an explicit predicate name.
    #[must_use]
    pub fn filter_named<P>(self, name: &str, predicate: P) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Right(value) => {
                if predicate(&value) {
                    Self::Right(value)
                } else {
                    Self::Left(L::from(format!("`{name}` false with input `{value:?}`")))
                }
            }
            Self::Left(error) => Self::Left(error),
        }
    }
}

fn predicate_name<P>() -> &'static str {
    let full = type_name::<P>();
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

// =============================================================================
// Failure Capture
// =============================================================================

impl<K, R> Either<K, R>
where
    K: Error + 'static,
{
    /// Runs a fallible function, capturing failures of the expected kind `K`.
    ///
    /// - `Ok(value)` becomes `Ok(Right(value))`
    /// - an error that is a `K` becomes `Ok(Left(error))`
    /// - any other error is returned as `Err` unchanged
    ///
    /// # Errors
    ///
    /// Returns the original error when it is not of kind `K`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::ParseIntError;
    ///
    /// use monadix::control::Either;
    ///
    /// let parsed = Either::<ParseIntError, i32>::attempt(|| "12".parse::<i32>());
    /// assert_eq!(parsed.ok(), Some(Either::Right(12)));
    ///
    /// let failed = Either::<ParseIntError, i32>::attempt(|| "twelve".parse::<i32>());
    /// assert!(failed.map(|either| either.is_left()).unwrap_or(false));
    /// ```
    pub fn attempt<F, E>(function: F) -> Result<Self, BoxError>
    where
        F: FnOnce() -> Result<R, E>,
        E: Into<BoxError>,
    {
        match function() {
            Ok(value) => Ok(Self::Right(value)),
            Err(error) => match error.into().downcast::<K>() {
                Ok(expected) => {
                    tracing::debug!(kind = type_name::<K>(), "captured expected failure");
                    Ok(Self::Left(*expected))
                }
                Err(unexpected) => {
                    tracing::debug!(
                        expected = type_name::<K>(),
                        error = %unexpected,
                        "propagating unexpected failure"
                    );
                    Err(unexpected)
                }
            },
        }
    }
}

impl<R> Either<BoxError, R> {
    /// Runs a fallible function, capturing every failure as `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::control::Either;
    ///
    /// let failed = Either::attempt_any(|| "x".parse::<u8>());
    /// assert!(failed.is_left());
    /// ```
    pub fn attempt_any<F, E>(function: F) -> Self
    where
        F: FnOnce() -> Result<R, E>,
        E: Into<BoxError>,
    {
        match function() {
            Ok(value) => Self::Right(value),
            Err(error) => {
                let error = error.into();
                tracing::debug!(error = %error, "captured failure");
                Self::Left(error)
            }
        }
    }
}

// =============================================================================
// Conversions and Formatting
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L: fmt::Display, R: fmt::Debug> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(error) => write!(formatter, "Left {error}"),
            Self::Right(value) => write!(formatter, "Right {value:?}"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> B + 'static,
        B: 'static,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L, R> Apply for Either<L, R> {
    fn apply<B, C>(self, other: Either<L, B>) -> Either<L, C>
    where
        R: Fn(B) -> C,
        B: Clone + 'static,
        C: 'static,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(function) => other.fmap_once(function),
        }
    }
}

impl<L, R> Either<L, R> {
    fn fmap_once<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L, R> Applicative for Either<L, R> {
    fn unit(value: R) -> Self {
        Self::Right(value)
    }
}

impl<L, R> Monad for Either<L, R> {
    fn bind<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> Either<L, B> + 'static,
        B: 'static,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }
}

impl<L, R> Recover for Either<L, R> {
    fn get_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    fn get_or_call<F>(self, function: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Left(_) => function(),
            Self::Right(value) => value,
        }
    }

    fn or_else(self, default: R) -> Self {
        match self {
            Self::Left(_) => Self::Right(default),
            Self::Right(_) => self,
        }
    }

    fn or_call<F>(self, function: F) -> Self
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Left(_) => Self::Right(function()),
            Self::Right(_) => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io;
    use std::num::ParseIntError;

    fn is_even(value: &i32) -> bool {
        value % 2 == 0
    }

    fn increment(value: i32) -> Either<String, i32> {
        Either::Right(value + 1)
    }

    #[rstest]
    fn unit_builds_right() {
        assert_eq!(Either::<String, i32>::unit(4), Either::Right(4));
    }

    #[rstest]
    fn left_propagates_verbatim() {
        let left: Either<String, i32> = Either::Left(String::from("boom"));
        let expected: Either<String, i32> = Either::Left(String::from("boom"));
        assert_eq!(left.clone().fmap(|x| x * 2), expected);
        assert_eq!(left.clone().bind(increment), expected);
        assert_eq!(
            Either::<String, fn(i32) -> i32>::Left(String::from("boom")).apply(Either::Right(1)),
            expected
        );
    }

    #[rstest]
    fn apply_propagates_right_operand_failure() {
        let function: Either<String, fn(i32) -> i32> = Either::Right(|x| x + 1);
        let argument: Either<String, i32> = Either::Left(String::from("missing"));
        assert_eq!(function.apply(argument), Either::Left(String::from("missing")));
    }

    #[rstest]
    fn apply_runs_function_on_right() {
        let function: Either<String, fn(i32) -> i32> = Either::Right(|x| x * 3);
        assert_eq!(function.apply(Either::Right(3)), Either::Right(9));
    }

    #[rstest]
    fn filter_reports_predicate_and_value() {
        let rejected: Either<String, i32> = Either::Right(3).filter(is_even);
        assert_eq!(rejected, Either::Left(String::from("`is_even` false with input `3`")));
    }

    #[rstest]
    fn filter_named_uses_given_name() {
        let rejected: Either<String, &str> = Either::Right("x").filter_named("non_empty_y", |text| text.contains('y'));
        assert_eq!(rejected, Either::Left(String::from("`non_empty_y` false with input `\"x\"`")));
    }

    #[rstest]
    fn filter_leaves_left_alone() {
        let left: Either<String, i32> = Either::Left(String::from("earlier"));
        assert_eq!(left.filter(is_even), Either::Left(String::from("earlier")));
    }

    #[rstest]
    fn attempt_captures_expected_kind() {
        let result = Either::<ParseIntError, i32>::attempt(|| "nope".parse::<i32>());
        assert!(matches!(result, Ok(Either::Left(_))));
    }

    #[rstest]
    fn attempt_wraps_success() {
        let result = Either::<ParseIntError, i32>::attempt(|| "41".parse::<i32>());
        assert!(matches!(result, Ok(Either::Right(41))));
    }

    #[rstest]
    fn attempt_propagates_unexpected_kind() {
        let result = Either::<ParseIntError, i32>::attempt(|| -> Result<i32, BoxError> {
            Err(Box::new(io::Error::other("disk on fire")))
        });
        let error = result.err().map(|error| error.to_string());
        assert_eq!(error.as_deref(), Some("disk on fire"));
    }

    #[rstest]
    fn attempt_any_captures_everything() {
        let result = Either::attempt_any(|| -> Result<i32, io::Error> { Err(io::Error::other("any")) });
        assert_eq!(result.left().map(|error| error.to_string()), Some(String::from("any")));
    }

    #[rstest]
    fn recovery_operations() {
        let left: Either<String, i32> = Either::Left(String::from("e"));
        assert_eq!(left.clone().get_or(9), 9);
        assert_eq!(left.clone().get_or_call(|| 8), 8);
        assert_eq!(left.clone().or_else(7), Either::Right(7));
        assert_eq!(left.or_call(|| 6), Either::Right(6));
        assert_eq!(Either::<String, i32>::Right(1).or_else(7), Either::Right(1));
    }

    #[rstest]
    #[case(Either::Left(String::from("bad")), "Left bad")]
    #[case(Either::Right(2), "Right 2")]
    fn display_renders_variant(#[case] input: Either<String, i32>, #[case] expected: &str) {
        assert_eq!(input.to_string(), expected);
    }

    #[rstest]
    fn result_conversions_round_trip() {
        let either: Either<String, i32> = Either::from(Ok::<i32, String>(1));
        assert_eq!(either.into_result(), Ok(1));
    }
}
