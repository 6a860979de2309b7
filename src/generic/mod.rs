//! Generic monoid inference over dynamic values.
//!
//! Statically typed code uses [`Monoid`](crate::typeclass::Monoid) directly.
//! This module covers values whose type is only known at run time: a
//! [`Value`] is classified into a [`Category`] and combined with that
//! category's rule.
//!
//! Dispatch order:
//!
//! 1. [`Value::Mempty`] is the transient identity and combines with anything.
//! 2. [`Value::Declared`] carries its own monoid and is dispatched to it.
//! 3. Anything else is classified, by exact type name first and by shape
//!    second.
//!
//! # Examples
//!
//! ```rust
//! use monadix::generic::{self, Value};
//!
//! assert_eq!(generic::mappend(Value::from(2), Value::from(3)), Ok(Value::from(5)));
//! assert_eq!(generic::mappend(Value::Mempty, Value::from("x")), Ok(Value::from("x")));
//! assert_eq!(
//!     generic::mconcat([Value::list([1]), Value::list([2]), Value::list([3])]),
//!     Ok(Value::list([1, 2, 3]))
//! );
//! ```

mod category;
mod classifier;
mod declared;
mod error;
mod list_value;
mod value;

pub use category::Category;
pub use classifier::{
    Classifier, ClassifierBuilder, Combine, Fold, IdentityFn, classify, is_monoid, mappend, mconcat,
    mempty,
};
pub use declared::Declared;
pub use error::MonoidError;
pub use value::{Key, Number, Opaque, Shape, Value};
