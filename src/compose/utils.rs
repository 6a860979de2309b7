//! Plain combinators that know nothing about functors or monoids.
//!
//! - [`identity`]: Returns its argument (I combinator)
//! - [`constant`]: Ignores its argument and returns a fixed value (K combinator)
//! - [`compose`]: Two-function composition, right to left
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)
//!
//! The variadic form of [`compose`] is the [`compose!`](crate::compose!) macro.

/// Returns the value unchanged.
///
/// `identity` is the unit of composition, which makes it the natural witness
/// for the Functor identity law.
///
/// # Examples
///
/// ```
/// use monadix::compose::identity;
/// use monadix::control::Maybe;
/// use monadix::typeclass::Functor;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(Maybe::just(4).fmap(identity), Maybe::just(4));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use monadix::compose::constant;
///
/// let always_five = constant::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Composes two functions: `compose(f, g)(x) == f(g(x))`.
///
/// # Examples
///
/// ```
/// use monadix::compose::compose;
///
/// let increment_then_double = compose(|x: i32| x * 2, |x: i32| x + 1);
/// assert_eq!(increment_then_double(2), 6);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Swaps the two arguments of a binary function.
///
/// # Examples
///
/// ```
/// use monadix::compose::flip;
///
/// let subtract = |left: i32, right: i32| left - right;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
