//! Semigroup type class - associative binary operations.
//!
//! A semigroup is a type with an associative `mappend`. It is the half of
//! [`Monoid`](super::Monoid) that does not need an identity element, which is
//! how values that are "combinable but never empty" are modelled.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! a.mappend(b).mappend(c) == a.mappend(b.mappend(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadix::typeclass::Semigroup;
//!
//! assert_eq!(String::from("foo").mappend(String::from("bar")), "foobar");
//! assert_eq!(vec![1, 2].mappend(vec![3]), vec![1, 2, 3]);
//! ```

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn mappend(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both operands.
    #[must_use]
    fn mappend_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().mappend(other.clone())
    }
}

impl Semigroup for String {
    fn mappend(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn mappend_ref(&self, other: &Self) -> Self {
        let mut result = String::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T> Semigroup for Vec<T> {
    fn mappend(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Semigroup for () {
    fn mappend(self, _other: Self) -> Self {}
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn mappend(self, other: Self) -> Self {
        (self.0.mappend(other.0), self.1.mappend(other.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "", "")]
    #[case("ab", "", "ab")]
    #[case("", "cd", "cd")]
    #[case("ab", "cd", "abcd")]
    fn string_mappend_concatenates(#[case] left: &str, #[case] right: &str, #[case] expected: &str) {
        assert_eq!(left.to_string().mappend(right.to_string()), expected);
    }

    #[rstest]
    fn string_mappend_ref_preserves_operands() {
        let left = String::from("left");
        let right = String::from("right");
        assert_eq!(left.mappend_ref(&right), "leftright");
        assert_eq!(left, "left");
        assert_eq!(right, "right");
    }

    #[rstest]
    fn vec_mappend_is_associative() {
        let (a, b, c) = (vec![1], vec![2], vec![3]);
        let left = a.clone().mappend(b.clone()).mappend(c.clone());
        let right = a.mappend(b.mappend(c));
        assert_eq!(left, right);
    }

    #[rstest]
    fn tuple_mappend_is_component_wise() {
        let left = (String::from("a"), vec![1]);
        let right = (String::from("b"), vec![2]);
        assert_eq!(left.mappend(right), (String::from("ab"), vec![1, 2]));
    }
}
