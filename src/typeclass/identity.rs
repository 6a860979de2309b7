//! Identity wrapper type - the trivial monad.
//!
//! `Identity` holds exactly one value and adds no behavior. Every capability
//! reduces to plain function application, which makes it the reference model
//! for the type class laws.

use super::{Applicative, Apply, Functor, Monad, Monoid, Semigroup, TypeConstructor};

/// A wrapper around exactly one value.
///
/// - `fmap(f)` wraps `f(value)`
/// - `apply(other)` wraps `value(other.value)`
/// - `bind(g)` returns `g(value)` directly, without re-wrapping
///
/// # Examples
///
/// ```rust
/// use monadix::typeclass::{Functor, Identity, Monad};
///
/// let wrapped = Identity::new(20);
/// assert_eq!(wrapped.fmap(|x| x + 1).bind(|x| Identity::new(x * 2)), Identity::new(42));
/// assert_eq!(Identity(7).into_inner(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> Functor for Identity<A> {
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Identity(function(self.0))
    }
}

impl<A> Apply for Identity<A> {
    fn apply<B, C>(self, other: Identity<B>) -> Identity<C>
    where
        A: Fn(B) -> C,
        B: Clone + 'static,
        C: 'static,
    {
        Identity((self.0)(other.0))
    }
}

impl<A> Applicative for Identity<A> {
    fn unit(value: A) -> Self {
        Self(value)
    }
}

impl<A> Monad for Identity<A> {
    fn bind<B, F>(self, function: F) -> Identity<B>
    where
        F: Fn(A) -> Identity<B> + 'static,
        B: 'static,
    {
        function(self.0)
    }
}

impl<A: Semigroup> Semigroup for Identity<A> {
    fn mappend(self, other: Self) -> Self {
        Self(self.0.mappend(other.0))
    }
}

impl<A: Monoid> Monoid for Identity<A> {
    fn mempty() -> Self {
        Self(A::mempty())
    }
}
