//! Control structures for short-circuiting computations.
//!
//! - [`Maybe`]: An optional value (`Just` / `Nothing`)
//! - [`Either`]: A success value or an error payload (`Right` / `Left`)
//! - [`Recover`]: Explicit recovery from the failure variant
//! - [`First`], [`Last`]: Monoids selecting one `Just` out of many
//!
//! # Examples
//!
//! ```rust
//! use monadix::control::{Either, Maybe, Recover};
//! use monadix::typeclass::Monad;
//!
//! let total = Maybe::just(2).bind(|x| Maybe::just(x * 10));
//! assert_eq!(total, Maybe::just(20));
//!
//! let recovered = Either::<String, i32>::Left(String::from("no value")).or_else(0);
//! assert_eq!(recovered, Either::Right(0));
//! ```

mod either;
mod maybe;
mod recover;
mod selection;

pub use either::{BoxError, Either};
pub use maybe::{Just, Maybe, Nothing};
pub use recover::Recover;
pub use selection::{First, Last};
