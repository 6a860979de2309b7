//! Functor type class - mapping over container values.
//!
//! A `Functor` can have a function applied to its inner value(s) while the
//! surrounding structure stays the same: a `Maybe` stays a `Maybe`, a `List`
//! keeps its length, a `Map` keeps its keys.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadix::typeclass::{Functor, Identity};
//!
//! let wrapped = Identity::new(5);
//! let shown: Identity<String> = wrapped.fmap(|n| n.to_string());
//! assert_eq!(shown, Identity::new("5".to_string()));
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// The mapping function is `Fn` rather than `FnOnce` so that multi-element
/// containers (`List`, `Map`) and deferred computations (`Reader`, `State`)
/// can call it as often as they need. It must be `'static` because deferred
/// computations store it.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value(s) inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor of the same family containing the transformed value(s).
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces every inner value with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::typeclass::{Functor, Identity};
    ///
    /// assert_eq!(Identity::new(1).replace("done"), Identity::new("done"));
    /// ```
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the inner value(s), keeping only the structure.
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}
