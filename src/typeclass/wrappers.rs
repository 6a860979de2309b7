//! Newtype wrappers selecting a monoid for an existing type.
//!
//! The same underlying type can combine in more than one lawful way. Numbers
//! add under [`Sum`] and multiply under [`Product`]; booleans combine with OR
//! under [`Any`] and with AND under [`All`]; functions `A -> A` compose under
//! [`Endo`].
//!
//! # Available Wrappers
//!
//! - [`Sum`]: Addition (identity: 0)
//! - [`Product`]: Multiplication (identity: 1)
//! - [`Any`]: Logical OR (identity: `false`)
//! - [`All`]: Logical AND (identity: `true`)
//! - [`Endo`]: Function composition (identity: the identity function)

use std::fmt;
use std::ops::{Add, Mul};
use std::rc::Rc;

use super::monoid::Monoid;
use super::semigroup::Semigroup;

// =============================================================================
// Sum Wrapper
// =============================================================================

/// The additive monoid.
///
/// # Examples
///
/// ```rust
/// use monadix::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).mappend(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::mempty(), Sum(0));
/// assert_eq!(Sum::mconcat((1..=4).map(Sum)), Sum(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn mappend(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn mempty() -> Self {
        Self(A::default())
    }
}

// =============================================================================
// Product Wrapper
// =============================================================================

/// The multiplicative monoid.
///
/// # Examples
///
/// ```rust
/// use monadix::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product(3).mappend(Product(5)), Product(15));
/// assert_eq!(Product::<i64>::mempty(), Product(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn mappend(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

macro_rules! product_monoid {
    ($one:expr => $($numeric:ty),+ $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn mempty() -> Self {
                    Self($one)
                }
            }
        )+
    };
}

product_monoid!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
product_monoid!(1.0 => f32, f64);

// =============================================================================
// Any / All Wrappers
// =============================================================================

/// The boolean monoid under logical OR.
///
/// # Examples
///
/// ```rust
/// use monadix::typeclass::{Any, Monoid};
///
/// assert_eq!(Any::mconcat(vec![Any(false), Any(true)]), Any(true));
/// assert_eq!(Any::mempty(), Any(false));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Any(pub bool);

impl Semigroup for Any {
    fn mappend(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}

impl Monoid for Any {
    fn mempty() -> Self {
        Self(false)
    }

    fn mconcat<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self(items.into_iter().any(|item| item.0))
    }
}

/// The boolean monoid under logical AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct All(pub bool);

impl Semigroup for All {
    fn mappend(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

impl Monoid for All {
    fn mempty() -> Self {
        Self(true)
    }

    fn mconcat<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self(items.into_iter().all(|item| item.0))
    }
}

// =============================================================================
// Endo Wrapper
// =============================================================================

/// The monoid of functions from a type to itself, under composition.
///
/// `f.mappend(g)` runs `g` first and then `f`, so
/// `Endo::mconcat([f, g, h]).run(x) == f(g(h(x)))`.
///
/// # Examples
///
/// ```rust
/// use monadix::typeclass::{Endo, Monoid, Semigroup};
///
/// let add_one = Endo::new(|x: i32| x + 1);
/// let double = Endo::new(|x: i32| x * 2);
///
/// assert_eq!(add_one.clone().mappend(double.clone()).run(5), 11);
/// assert_eq!(double.mappend(add_one).run(5), 12);
/// assert_eq!(Endo::<i32>::mempty().run(5), 5);
/// ```
pub struct Endo<A>(Rc<dyn Fn(A) -> A>);

impl<A: 'static> Endo<A> {
    /// Wraps a function `A -> A`.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> A + 'static,
    {
        Self(Rc::new(function))
    }

    /// Applies the wrapped function.
    pub fn run(&self, value: A) -> A {
        (self.0)(value)
    }
}

impl<A> Clone for Endo<A> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A> fmt::Debug for Endo<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Endo(<function>)")
    }
}

impl<A: 'static> Semigroup for Endo<A> {
    fn mappend(self, other: Self) -> Self {
        let outer = self.0;
        let inner = other.0;
        Self(Rc::new(move |value| outer(inner(value))))
    }
}

impl<A: 'static> Monoid for Endo<A> {
    fn mempty() -> Self {
        Self(Rc::new(|value| value))
    }
}
