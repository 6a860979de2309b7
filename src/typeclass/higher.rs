//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `List<_>` as type constructors
//! directly. [`TypeConstructor`] records the element type of a container
//! together with "the same container holding `B`", which is what
//! [`Functor`](super::Functor), [`Apply`](super::Apply) and
//! [`Monad`](super::Monad) need to describe their signatures.
//!
//! Because every capability returns `Self::WithType<B>`, a continuation passed
//! to `bind` that produces a different container family does not type-check.
//!
//! # Example
//!
//! ```rust
//! use monadix::typeclass::{Identity, TypeConstructor};
//!
//! fn rewrap<T>(value: T::Inner) -> T::WithType<T::Inner>
//! where
//!     T: TypeConstructor,
//!     T::WithType<T::Inner>: From<T::Inner>,
//! {
//!     From::from(value)
//! }
//!
//! let wrapped: Identity<i32> = rewrap::<Identity<i32>>(7);
//! assert_eq!(wrapped, Identity::new(7));
//! ```

/// A type constructor applied to its element type.
///
/// `Inner` is the element type and `WithType<B>` is the same constructor
/// applied to `B`. Implementations must keep `WithType` inside the same
/// family: `Maybe<A>::WithType<B>` is `Maybe<B>`, never `Either<_, B>`.
pub trait TypeConstructor {
    /// The type of the contained value(s).
    type Inner;

    /// The same type constructor holding `B` instead of `Inner`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;

    #[test]
    fn identity_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Identity<i32>>();
    }

    #[test]
    fn identity_with_type_stays_in_family() {
        fn assert_with_type<T>()
        where
            T: TypeConstructor<WithType<String> = Identity<String>>,
        {
        }
        assert_with_type::<Identity<i32>>();
    }
}
