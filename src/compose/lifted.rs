//! Free-function forms of the type class operations.
//!
//! These work for any instance of the corresponding trait, which makes them
//! usable where a method call would need the receiver type spelled out:
//! as arguments to higher-order functions, or generically over the monad.
//!
//! - [`fmap`], [`unit`], [`lift`]: Functor and Applicative
//! - [`multibind`], [`cons`], [`sequence`], [`map_m`]: Monad
//! - [`mempty`], [`mappend`], [`mconcat`]: Monoid
//!
//! Heterogeneous chains, where each step changes the carried type, use the
//! [`multiapply!`](crate::multiapply!) and [`multibind!`](crate::multibind!)
//! macros.

use crate::collection::List;
use crate::typeclass::{Applicative, Functor, Monad, Monoid, Semigroup, TypeConstructor};

/// Callable form of [`Functor::fmap`].
///
/// # Examples
///
/// ```rust
/// use monadix::compose::fmap;
/// use monadix::control::Maybe;
///
/// assert_eq!(fmap(|x: i32| x + 1, Maybe::just(1)), Maybe::just(2));
/// ```
#[inline]
pub fn fmap<T, B, F>(function: F, functor: T) -> T::WithType<B>
where
    T: Functor,
    F: Fn(T::Inner) -> B + 'static,
    B: 'static,
{
    functor.fmap(function)
}

/// Puts `value` in the minimal context of `M`.
///
/// # Examples
///
/// ```rust
/// use monadix::collection::List;
/// use monadix::compose::unit;
/// use monadix::control::Either;
///
/// assert_eq!(unit::<List<i32>>(1), List::singleton(1));
/// assert_eq!(unit::<Either<String, i32>>(1), Either::Right(1));
/// ```
#[inline]
pub fn unit<M: Applicative>(value: M::Inner) -> M {
    M::unit(value)
}

/// Applies `function` to `value` and puts the result in the context of `M`.
///
/// # Examples
///
/// ```rust
/// use monadix::compose::lift;
/// use monadix::control::Maybe;
///
/// assert_eq!(lift::<Maybe<i32>, _, _>(|x: i32| x * 3, 2), Maybe::just(6));
/// ```
#[inline]
pub fn lift<M, A, F>(function: F, value: A) -> M
where
    M: Applicative,
    F: FnOnce(A) -> M::Inner,
{
    M::unit(function(value))
}

/// Binds each continuation in turn, left to right.
///
/// Every continuation maps the carried value back into the same monad type.
/// The [`multibind!`](crate::multibind!) macro lifts that restriction.
///
/// # Examples
///
/// ```rust
/// use monadix::compose::multibind;
/// use monadix::control::Maybe;
///
/// let add_two: fn(i32) -> Maybe<i32> = |x| Maybe::just(x + 2);
/// assert_eq!(multibind(Maybe::just(2), [add_two; 3]), Maybe::just(8));
/// ```
pub fn multibind<M, A, I, F>(initial: M, continuations: I) -> M
where
    M: Monad + TypeConstructor<Inner = A, WithType<A> = M>,
    A: 'static,
    I: IntoIterator<Item = F>,
    F: Fn(A) -> M + 'static,
{
    continuations
        .into_iter()
        .fold(initial, |monad, continuation| monad.bind::<A, F>(continuation))
}

/// Prepends the value of `head` to the list inside `tail`, within the monad.
///
/// `head` is bound first, so a failing `head` short-circuits before `tail`
/// is looked at.
///
/// # Examples
///
/// ```rust
/// use monadix::collection::List;
/// use monadix::compose::cons;
/// use monadix::control::Maybe;
///
/// let joined = cons(Maybe::just(1), Maybe::just(List::from(vec![2, 3])));
/// assert_eq!(joined, Maybe::just(List::from(vec![1, 2, 3])));
/// assert_eq!(cons(Maybe::<i32>::Nothing, Maybe::just(List::new())), Maybe::Nothing);
/// ```
pub fn cons<M, T>(head: M, tail: M::WithType<List<T>>) -> M::WithType<List<T>>
where
    M: Monad<Inner = T>,
    M::WithType<List<T>>: Functor
        + TypeConstructor<Inner = List<T>, WithType<List<T>> = M::WithType<List<T>>>
        + Clone
        + 'static,
    T: Clone + 'static,
{
    head.bind::<List<T>, _>(move |value: T| {
        tail.clone()
            .fmap(move |rest: List<T>| rest.prepend(value.clone()))
    })
}

/// Turns a sequence of monads into a monad of a [`List`], preserving order.
///
/// Equivalent to folding [`cons`] from the right, seeded with
/// `unit(List::new())`.
///
/// # Examples
///
/// ```rust
/// use monadix::collection::List;
/// use monadix::compose::sequence;
/// use monadix::control::Maybe;
///
/// assert_eq!(
///     sequence(vec![Maybe::just(1), Maybe::just(2), Maybe::just(3)]),
///     Maybe::just(List::from(vec![1, 2, 3]))
/// );
/// assert_eq!(sequence(vec![Maybe::just(1), Maybe::Nothing]), Maybe::Nothing);
/// ```
pub fn sequence<M, T, I>(monads: I) -> M::WithType<List<T>>
where
    I: IntoIterator<Item = M>,
    M: Monad<Inner = T>,
    M::WithType<List<T>>: Applicative
        + TypeConstructor<Inner = List<T>, WithType<List<T>> = M::WithType<List<T>>>
        + Clone
        + 'static,
    T: Clone + 'static,
{
    let monads: Vec<M> = monads.into_iter().collect();
    monads.into_iter().rev().fold(
        <M::WithType<List<T>> as Applicative>::unit(List::new()),
        |tail, head| cons(head, tail),
    )
}

/// Maps every value to a monad and sequences the results.
///
/// # Examples
///
/// ```rust
/// use monadix::collection::List;
/// use monadix::compose::map_m;
/// use monadix::control::Maybe;
///
/// let halve = |x: i32| if x % 2 == 0 { Maybe::just(x / 2) } else { Maybe::Nothing };
/// assert_eq!(map_m(halve, vec![2, 4]), Maybe::just(List::from(vec![1, 2])));
/// assert_eq!(map_m(halve, vec![2, 3]), Maybe::Nothing);
/// ```
pub fn map_m<M, T, A, I, F>(function: F, values: I) -> M::WithType<List<T>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> M,
    M: Monad<Inner = T>,
    M::WithType<List<T>>: Applicative
        + TypeConstructor<Inner = List<T>, WithType<List<T>> = M::WithType<List<T>>>
        + Clone
        + 'static,
    T: Clone + 'static,
{
    sequence(values.into_iter().map(function))
}

/// Returns the identity element of `M`.
#[inline]
pub fn mempty<M: Monoid>() -> M {
    M::mempty()
}

/// Callable form of [`Semigroup::mappend`].
///
/// # Examples
///
/// ```rust
/// use monadix::compose::mappend;
///
/// assert_eq!(mappend(vec![1], vec![2]), vec![1, 2]);
/// ```
#[inline]
pub fn mappend<M: Semigroup>(left: M, right: M) -> M {
    left.mappend(right)
}

/// Callable form of [`Monoid::mconcat`].
///
/// # Examples
///
/// ```rust
/// use monadix::compose::mconcat;
/// use monadix::typeclass::Sum;
///
/// assert_eq!(mconcat([Sum(1), Sum(2), Sum(3)]), Sum(6));
/// ```
#[inline]
pub fn mconcat<M, I>(items: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    M::mconcat(items)
}
