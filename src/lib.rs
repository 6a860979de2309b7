//! # monadix
//!
//! Algebraic abstractions for Rust: Functor, Applicative, Monad and Monoid,
//! a family of concrete instances, and a generic monoid inference layer for
//! dynamically typed values.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor), [`Apply`](typeclass::Apply),
//!   [`Applicative`](typeclass::Applicative), [`Monad`](typeclass::Monad),
//!   [`Semigroup`](typeclass::Semigroup), [`Monoid`](typeclass::Monoid)
//! - **Control Structures**: [`Maybe`](control::Maybe) and [`Either`](control::Either)
//!   with recovery operations
//! - **Collections**: immutable [`List`](collection::List) and [`Map`](collection::Map)
//! - **Effects**: [`Reader`](effect::Reader), [`State`](effect::State),
//!   [`Writer`](effect::Writer)
//! - **Generic Monoids**: classification of runtime [`Value`](generic::Value)s
//!   into algebraic categories
//! - **Composition**: lifted free functions and the `mdo!`, `multiapply!`,
//!   `multibind!` and `compose!` macros
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, Monoid, etc.)
//! - `control`: `Maybe`, `Either` and the `Recover` capability
//! - `collection`: `List` and `Map`
//! - `effect`: `Reader`, `State` and `Writer`
//! - `generic`: Generic monoid inference over `Value`
//! - `compose`: Lifted functions and macros
//! - `serde`: Serialization support for the data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadix::prelude::*;
//!
//! let total = Maybe::just(20).bind(|x| Maybe::just(x + 1)).fmap(|x| x * 2);
//! assert_eq!(total, Maybe::just(42));
//!
//! let combined = List::from(vec![1, 2]).mappend(List::from(vec![3]));
//! assert_eq!(combined, List::from(vec![1, 2, 3]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits. The dynamic inference
/// functions in [`generic`](crate::generic) are not included because their
/// names overlap with the static lifted functions.
///
/// # Usage
///
/// ```rust
/// use monadix::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "generic")]
    pub use crate::generic::{Category, Classifier, Key, MonoidError, Value};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "generic")]
pub mod generic;
