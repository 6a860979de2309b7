//! Recovery operations for failure-carrying types.
//!
//! [`Recover`] is implemented side by side with [`Monad`](crate::typeclass::Monad)
//! on [`Maybe`](super::Maybe) and [`Either`](super::Either). The success
//! variant always short-circuits to itself and ignores the alternative; the
//! failure variant always defers to the alternative.
//!
//! | Operation | On success | On failure |
//! |-----------|------------|------------|
//! | `get_or(default)` | inner value | `default` |
//! | `get_or_call(f)` | inner value | `f()` |
//! | `or_else(default)` | `self` | success wrapping `default` |
//! | `or_call(f)` | `self` | success wrapping `f()` |

use crate::typeclass::TypeConstructor;

/// A capability for recovering from a failure variant.
///
/// # Examples
///
/// ```rust
/// use monadix::control::{Maybe, Recover};
///
/// assert_eq!(Maybe::just(2).get_or(99), 2);
/// assert_eq!(Maybe::<i32>::Nothing.get_or(99), 99);
/// assert_eq!(Maybe::just(2).or_else(99), Maybe::just(2));
/// assert_eq!(Maybe::<i32>::Nothing.or_else(99), Maybe::just(99));
/// ```
pub trait Recover: TypeConstructor + Sized {
    /// Returns the inner value, or `default` on failure.
    fn get_or(self, default: Self::Inner) -> Self::Inner;

    /// Returns the inner value, or the result of `function` on failure.
    ///
    /// `function` is only called on failure.
    fn get_or_call<F>(self, function: F) -> Self::Inner
    where
        F: FnOnce() -> Self::Inner;

    /// Returns `self` on success, or `default` wrapped as a success.
    fn or_else(self, default: Self::Inner) -> Self;

    /// Returns `self` on success, or the result of `function` wrapped as a
    /// success.
    fn or_call<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self::Inner;
}
