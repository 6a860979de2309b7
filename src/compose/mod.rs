//! Lifted functions and composition macros.
//!
//! # Overview
//!
//! - Free functions that mirror the type class methods: [`fmap`], [`unit`],
//!   [`lift`], [`mempty`], [`mappend`], [`mconcat`]
//! - Monadic combinators over sequences: [`multibind`], [`cons`],
//!   [`sequence`], [`map_m`]
//! - Plain combinators: [`identity`], [`constant`], [`compose()`], [`flip`]
//! - Macros: [`compose!`], [`multiapply!`], [`multibind!`], [`mdo!`]
//!
//! # Examples
//!
//! ```
//! use monadix::collection::List;
//! use monadix::compose::{map_m, sequence};
//! use monadix::control::Either;
//!
//! let parse = |text: &str| {
//!     text.parse::<i32>().map_or_else(|error| Either::Left(error.to_string()), Either::Right)
//! };
//!
//! assert_eq!(map_m(parse, ["1", "2"]), Either::Right(List::from(vec![1, 2])));
//! assert!(map_m(parse, ["1", "x"]).is_left());
//!
//! let lists = vec![List::from(vec![1, 2]), List::from(vec![3])];
//! assert_eq!(
//!     sequence(lists),
//!     List::from(vec![List::from(vec![1, 3]), List::from(vec![2, 3])])
//! );
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Sequence of units**: `sequence([unit(a), unit(b)]) == unit(List(a, b))`

mod compose_macro;
mod lifted;
mod mdo_macro;
mod multi_macro;
mod utils;

pub use lifted::{cons, fmap, lift, map_m, mappend, mconcat, mempty, multibind, sequence, unit};
pub use utils::{compose, constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::mdo;
pub use crate::multiapply;
pub use crate::multibind;
