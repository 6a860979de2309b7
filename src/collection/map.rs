//! Immutable key-value map with key-intersecting `apply`.
//!
//! `Map<K, V>` is a functor over its values: `fmap` keeps every key and
//! transforms the value stored under it. `apply` pairs a map of functions
//! with a map of arguments by key, and **only keys present in both maps
//! survive**.
//!
//! As a [`Monoid`], maps combine by right-biased union: on a key collision
//! the value from the later map wins.
//!
//! `Map` implements [`Apply`] but not [`Applicative`](crate::typeclass::Applicative):
//! its minimal context needs a key, so [`Map::unit`] takes a `(key, value)`
//! pair.
//!
//! # Examples
//!
//! ```rust
//! use monadix::collection::Map;
//! use monadix::typeclass::{Apply, Semigroup};
//!
//! let increment: fn(i32) -> i32 = |x| x + 1;
//! let functions = Map::unit(("a", increment));
//! let arguments = Map::from_iter([("a", 1), ("b", 2)]);
//! assert_eq!(functions.apply(arguments), Map::unit(("a", 2)));
//!
//! let merged = Map::from_iter([("a", 1), ("b", 2)]).mappend(Map::unit(("b", 20)));
//! assert_eq!(merged, Map::from_iter([("a", 1), ("b", 20)]));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::typeclass::{Apply, Functor, Monoid, Semigroup, TypeConstructor};

/// An immutable association from unique keys to values.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "serde", serde(bound(deserialize = "K: Ord + serde::Deserialize<'de>, V: serde::Deserialize<'de>")))]
pub struct Map<K, V> {
    entries: BTreeMap<K, V>,
}

impl<K, V> Map<K, V> {
    /// Creates an empty map.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in key order.
    #[inline]
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Iterates over the keys in order.
    #[inline]
    pub fn keys(&self) -> std::collections::btree_map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Iterates over the values in key order.
    #[inline]
    pub fn values(&self) -> std::collections::btree_map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Consumes the map and returns the underlying `BTreeMap`.
    #[inline]
    pub fn into_inner(self) -> BTreeMap<K, V> {
        self.entries
    }
}

impl<K: Ord, V> Map<K, V> {
    /// Builds a map with a single entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::collection::Map;
    ///
    /// let map = Map::unit(("a", 4));
    /// assert_eq!(map.get(&"a"), Some(&4));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn unit((key, value): (K, V)) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key, value);
        Self { entries }
    }

    /// Builds a map assigning a clone of `value` to every key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::collection::Map;
    ///
    /// let map = Map::from_keys(['a', 'b', 'c'], 1);
    /// assert_eq!(map, Map::from_iter([('a', 1), ('b', 1), ('c', 1)]));
    /// ```
    pub fn from_keys<I>(keys: I, value: V) -> Self
    where
        I: IntoIterator<Item = K>,
        V: Clone,
    {
        keys.into_iter().map(|key| (key, value.clone())).collect()
    }

    /// Returns the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<BTreeMap<K, V>> for Map<K, V> {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Self { entries }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterator: I) -> Self {
        Self {
            entries: iterator.into_iter().collect(),
        }
    }
}

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = std::collections::btree_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Map").field(&self.entries).finish()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<K, V> TypeConstructor for Map<K, V> {
    type Inner = V;
    type WithType<B> = Map<K, B>;
}

impl<K: Ord, V> Functor for Map<K, V> {
    fn fmap<B, F>(self, function: F) -> Map<K, B>
    where
        F: Fn(V) -> B + 'static,
        B: 'static,
    {
        self.entries
            .into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }
}

impl<K: Ord, V> Apply for Map<K, V> {
    /// Calls each function on the argument stored under the same key.
    ///
    /// Keys found in only one of the two maps are dropped.
    fn apply<B, C>(self, other: Map<K, B>) -> Map<K, C>
    where
        V: Fn(B) -> C,
        B: Clone + 'static,
        C: 'static,
    {
        let mut arguments = other.entries;
        self.entries
            .into_iter()
            .filter_map(|(key, function)| {
                arguments
                    .remove(&key)
                    .map(|argument| (key, function(argument)))
            })
            .collect()
    }
}

impl<K: Ord, V> Semigroup for Map<K, V> {
    fn mappend(mut self, other: Self) -> Self {
        self.entries.extend(other.entries);
        self
    }
}

impl<K: Ord, V> Monoid for Map<K, V> {
    fn mempty() -> Self {
        Self::new()
    }

    fn mconcat<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().flat_map(|map| map.entries).collect()
    }
}
