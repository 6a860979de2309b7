//! Immutable list with non-deterministic `apply` and `bind`.
//!
//! `List<T>` is an ordered sequence that is never modified in place: every
//! operation consumes or borrows a list and returns a new one.
//!
//! As a [`Monad`], a list models a computation with several results:
//!
//! - `apply` calls every function on every value, outer loop over the
//!   functions and inner loop over the values
//! - `bind` calls the continuation on every element and flattens one level
//!
//! As a [`Monoid`], lists concatenate; [`Monoid::mconcat`] builds the result
//! in a single pass instead of allocating intermediate lists.
//!
//! # Examples
//!
//! ```rust
//! use monadix::collection::List;
//! use monadix::typeclass::{Apply, Monad};
//!
//! let roots = List::from(vec![1, 4, 9]).bind(|x: i32| {
//!     let root = f64::from(x).sqrt();
//!     List::from(vec![root, -root])
//! });
//! assert_eq!(roots, List::from(vec![1.0, -1.0, 2.0, -2.0, 3.0, -3.0]));
//!
//! let functions: Vec<fn(i32) -> i32> = vec![|x: i32| x + 1, |x: i32| x * 10];
//! assert_eq!(List::from(functions).apply(List::from(vec![1, 2])), List::from(vec![2, 3, 10, 20]));
//! ```

use std::fmt;
use std::ops::Range;

use crate::typeclass::{Applicative, Apply, Functor, Monad, Monoid, Semigroup, TypeConstructor};

/// Number of elements rendered in full by `Display` before truncation.
const DISPLAY_LIMIT: usize = 10;

/// Number of elements shown on each side of a truncated rendering.
const DISPLAY_EDGE: usize = 5;

/// An immutable ordered sequence.
///
/// # Examples
///
/// ```rust
/// use monadix::collection::List;
///
/// let list: List<i32> = (1..=3).collect();
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(0), Some(&1));
/// assert_eq!(list.to_string(), "List(1, 2, 3)");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct List<T> {
    elements: Vec<T>,
}

impl<T> List<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a list holding exactly one element.
    #[inline]
    pub fn singleton(element: T) -> Self {
        Self {
            elements: vec![element],
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Iterates over the elements by reference.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Views the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the list and returns its elements.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns a new list with `element` in front.
    #[must_use]
    pub fn prepend(self, element: T) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len() + 1);
        elements.push(element);
        elements.extend(self.elements);
        Self { elements }
    }

    /// Returns a new list with `element` at the end.
    #[must_use]
    pub fn append(mut self, element: T) -> Self {
        self.elements.push(element);
        self
    }
}

impl<T: PartialEq> List<T> {
    /// Returns `true` if some element equals `element`.
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Returns the position of the first element equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|candidate| candidate == element)
    }

    /// Counts the elements equal to `element`.
    pub fn count(&self, element: &T) -> usize {
        self.elements
            .iter()
            .filter(|candidate| *candidate == element)
            .count()
    }
}

impl<T: Clone> List<T> {
    /// Returns the elements in `range` as a new list.
    ///
    /// The range is clamped to the list bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::collection::List;
    ///
    /// let list = List::from(vec![1, 2, 3, 4]);
    /// assert_eq!(list.slice(1..3), List::from(vec![2, 3]));
    /// assert_eq!(list.slice(2..10), List::from(vec![3, 4]));
    /// ```
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Self {
        let end = range.end.min(self.elements.len());
        let start = range.start.min(end);
        Self {
            elements: self.elements[start..end].to_vec(),
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self {
            elements: iterator.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("List").field(&self.elements).finish()
    }
}

/// Renders `List(a, b, c)`. Lists longer than ten elements show the first
/// five, a `...N more...` marker and the last five.
impl<T: fmt::Debug> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let length = self.elements.len();
        let mut parts: Vec<String> = Vec::with_capacity(length.min(DISPLAY_LIMIT + 1));
        if length > DISPLAY_LIMIT {
            parts.extend(self.elements[..DISPLAY_EDGE].iter().map(|element| format!("{element:?}")));
            parts.push(format!("...{} more...", length - DISPLAY_LIMIT));
            parts.extend(
                self.elements[length - DISPLAY_EDGE..]
                    .iter()
                    .map(|element| format!("{element:?}")),
            );
        } else {
            parts.extend(self.elements.iter().map(|element| format!("{element:?}")));
        }
        write!(formatter, "List({})", parts.join(", "))
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for List<T> {
    type Inner = T;
    type WithType<B> = List<B>;
}

impl<T> Functor for List<T> {
    fn fmap<B, F>(self, function: F) -> List<B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        self.elements.into_iter().map(function).collect()
    }
}

impl<T> Apply for List<T> {
    fn apply<B, C>(self, other: List<B>) -> List<C>
    where
        T: Fn(B) -> C,
        B: Clone + 'static,
        C: 'static,
    {
        let mut results = Vec::with_capacity(self.elements.len().saturating_mul(other.elements.len()));
        for function in &self.elements {
            for value in &other.elements {
                results.push(function(value.clone()));
            }
        }
        List::from(results)
    }
}

impl<T> Applicative for List<T> {
    fn unit(value: T) -> Self {
        Self::singleton(value)
    }
}

impl<T> Monad for List<T> {
    fn bind<B, F>(self, function: F) -> List<B>
    where
        F: Fn(T) -> List<B> + 'static,
        B: 'static,
    {
        self.elements.into_iter().flat_map(function).collect()
    }
}

impl<T> Semigroup for List<T> {
    fn mappend(mut self, mut other: Self) -> Self {
        self.elements.append(&mut other.elements);
        self
    }
}

impl<T> Monoid for List<T> {
    fn mempty() -> Self {
        Self::new()
    }

    fn mconcat<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().flatten().collect()
    }
}
