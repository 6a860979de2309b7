//! Immutable collections with type class instances.
//!
//! - [`List`]: An ordered sequence; a non-deterministic monad
//! - [`Map`]: A key-ordered association; `apply` intersects keys
//!
//! Both are monoids: lists concatenate, maps take a right-biased union.
//!
//! # Examples
//!
//! ```rust
//! use monadix::collection::List;
//! use monadix::typeclass::{Monad, Monoid};
//!
//! let pairs = List::from(vec![1, 2]).bind(|x| List::from(vec![x, x * 10]));
//! assert_eq!(pairs, List::from(vec![1, 10, 2, 20]));
//!
//! let joined = List::mconcat(vec![List::from(vec![1]), List::from(vec![2, 3])]);
//! assert_eq!(joined, List::from(vec![1, 2, 3]));
//! ```

mod list;
mod map;

pub use list::List;
pub use map::Map;
