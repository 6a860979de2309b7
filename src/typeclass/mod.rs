//! Type class traits for algebraic abstractions.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Apply`]: Applying contained functions to contained values
//! - [`Applicative`]: `Apply` with a minimal-context constructor (`unit`)
//! - [`Monad`]: Sequencing computations with data-dependent continuations
//! - [`Semigroup`]: Associative binary operations (`mappend`)
//! - [`Monoid`]: Semigroup with an identity element (`mempty`)
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses Generic
//! Associated Types to describe "the same container holding another type",
//! which is enough to state `fmap`, `apply` and `bind` once for every
//! instance.
//!
//! ## Foundation Types
//!
//! - [`Identity`]: The trivial monad
//! - [`Sum`], [`Product`], [`Any`], [`All`], [`Endo`]: Monoid-selecting wrappers
//!
//! # Examples
//!
//! ```rust
//! use monadix::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(String::from("Hello, ").mappend(String::from("World!")), "Hello, World!");
//! assert_eq!(Sum::mconcat(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::{Applicative, Apply};
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{All, Any, Endo, Product, Sum};
