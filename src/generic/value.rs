//! Dynamic values understood by generic monoid inference.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::Rc;

use super::declared::Declared;
use crate::typeclass::Monoid;

/// A hashable, totally ordered value usable as a dictionary key or set member.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// A boolean key.
    Bool(bool),
    /// An integer key.
    Int(i64),
    /// A string key.
    Str(String),
    /// A tuple of keys.
    Tuple(Vec<Key>),
}

impl Key {
    /// Runtime type name of the key.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Str(_) => "str",
            Self::Tuple(_) => "tuple",
        }
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// A numeric reading of a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
}

impl Number {
    /// Widens the number to `f64`.
    #[allow(clippy::cast_precision_loss)]
    pub const fn to_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }
}

/// Structural description of a host value that is not one of the built-in
/// [`Value`] variants.
///
/// Every probe defaults to `None`. An implementation answers the probes that
/// describe it, and classification picks the first matching [`Category`]
/// in probing order.
///
/// [`Category`]: super::Category
///
/// # Examples
///
/// ```rust
/// use monadix::generic::{self, Category, Number, Shape, Value};
///
/// #[derive(Debug)]
/// struct Meters(i64);
///
/// impl Shape for Meters {
///     fn type_name(&self) -> &str {
///         "Meters"
///     }
///
///     fn as_number(&self) -> Option<Number> {
///         Some(Number::Int(self.0))
///     }
/// }
///
/// let distance = Value::opaque(Meters(3));
/// assert_eq!(generic::classify(&distance), Ok(Category::Number));
/// assert_eq!(generic::mappend(distance, Value::from(4)), Ok(Value::from(7)));
/// ```
pub trait Shape: fmt::Debug {
    /// Runtime type name reported in classification and errors.
    fn type_name(&self) -> &str;

    /// Reads the value as a boolean.
    fn as_boolean(&self) -> Option<bool> {
        None
    }

    /// Reads the value as a number.
    fn as_number(&self) -> Option<Number> {
        None
    }

    /// Reads the value as text.
    fn as_text(&self) -> Option<String> {
        None
    }

    /// Reads the value as an ordered sequence.
    fn as_sequence(&self) -> Option<Vec<Value>> {
        None
    }

    /// Reads the value as a mapping.
    fn as_mapping(&self) -> Option<BTreeMap<Key, Value>> {
        None
    }

    /// Reads the value as a set.
    fn as_set(&self) -> Option<BTreeSet<Key>> {
        None
    }
}

/// A host value known only through its [`Shape`].
///
/// Two opaque values are equal only when they are the same allocation.
#[derive(Clone)]
pub struct Opaque(pub(crate) Rc<dyn Shape>);

impl Opaque {
    /// Borrows the shape.
    pub fn shape(&self) -> &dyn Shape {
        self.0.as_ref()
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, formatter)
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// A dynamically typed value.
///
/// The built-in variants mirror the usual scalar and container types. Two
/// extra variants cover everything else: [`Value::Declared`] holds a typed
/// [`Monoid`] and [`Value::Opaque`] a foreign value described by its
/// [`Shape`]. [`Value::Mempty`] is the transient identity that combines with
/// any value without knowing its type.
///
/// # Examples
///
/// ```rust
/// use monadix::generic::Value;
///
/// assert_eq!(Value::from(1).type_name(), "int");
/// assert_eq!(Value::list([1, 2]).type_name(), "list");
/// assert_eq!(Value::Mempty.type_name(), "Mempty");
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// A mutable-style ordered sequence.
    List(Vec<Value>),
    /// A fixed ordered sequence.
    Tuple(Vec<Value>),
    /// A mapping from keys to values.
    Dict(BTreeMap<Key, Value>),
    /// A set of keys.
    Set(BTreeSet<Key>),
    /// A frozen set of keys.
    FrozenSet(BTreeSet<Key>),
    /// The transient identity element.
    Mempty,
    /// A value that carries its own [`Monoid`] implementation.
    Declared(Declared),
    /// A foreign value classified by its [`Shape`].
    Opaque(Opaque),
}

impl Value {
    /// Wraps a typed monoid.
    pub fn declared<M>(monoid: M) -> Self
    where
        M: Monoid + Clone + PartialEq + fmt::Debug + 'static,
    {
        Self::Declared(Declared::new(monoid))
    }

    /// Wraps a foreign value described by its shape.
    pub fn opaque<S: Shape + 'static>(shape: S) -> Self {
        Self::Opaque(Opaque(Rc::new(shape)))
    }

    /// Builds a `list` value.
    pub fn list<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::List(elements.into_iter().map(Into::into).collect())
    }

    /// Builds a `tuple` value.
    pub fn tuple<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Tuple(elements.into_iter().map(Into::into).collect())
    }

    /// Builds a `dict` value.
    pub fn dict<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Self>,
    {
        Self::Dict(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Builds a `set` value.
    pub fn set<I>(members: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        Self::Set(members.into_iter().map(Into::into).collect())
    }

    /// Builds a `frozenset` value.
    pub fn frozenset<I>(members: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        Self::FrozenSet(members.into_iter().map(Into::into).collect())
    }

    /// Runtime type name used for exact classification and in errors.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Dict(_) => "dict",
            Self::Set(_) => "set",
            Self::FrozenSet(_) => "frozenset",
            Self::Mempty => "Mempty",
            Self::Declared(declared) => declared.type_name(),
            Self::Opaque(opaque) => opaque.0.type_name(),
        }
    }

    /// Returns `true` for the transient identity.
    pub const fn is_mempty(&self) -> bool {
        matches!(self, Self::Mempty)
    }

    /// Recovers a typed monoid stored with [`Value::declared`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::generic::Value;
    /// use monadix::typeclass::Sum;
    ///
    /// let value = Value::declared(Sum(3));
    /// assert_eq!(value.downcast_declared::<Sum<i32>>(), Some(Sum(3)));
    /// assert_eq!(value.downcast_declared::<String>(), None);
    /// ```
    pub fn downcast_declared<M>(&self) -> Option<M>
    where
        M: Clone + 'static,
    {
        match self {
            Self::Declared(declared) => declared.downcast_ref::<M>().cloned(),
            _ => None,
        }
    }

    pub(crate) fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Opaque(opaque) => opaque.0.as_boolean(),
            _ => None,
        }
    }

    pub(crate) fn as_number(&self) -> Option<Number> {
        match self {
            Self::Int(value) => Some(Number::Int(*value)),
            Self::Float(value) => Some(Number::Float(*value)),
            Self::Opaque(opaque) => opaque.0.as_number(),
            _ => None,
        }
    }

    pub(crate) fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Str(value) => Some(Cow::Borrowed(value.as_str())),
            Self::Opaque(opaque) => opaque.0.as_text().map(Cow::Owned),
            _ => None,
        }
    }

    pub(crate) fn as_sequence(&self) -> Option<Cow<'_, [Self]>> {
        match self {
            Self::List(elements) | Self::Tuple(elements) => Some(Cow::Borrowed(elements.as_slice())),
            Self::Opaque(opaque) => opaque.0.as_sequence().map(Cow::Owned),
            _ => None,
        }
    }

    pub(crate) fn as_mapping(&self) -> Option<Cow<'_, BTreeMap<Key, Self>>> {
        match self {
            Self::Dict(entries) => Some(Cow::Borrowed(entries)),
            Self::Opaque(opaque) => opaque.0.as_mapping().map(Cow::Owned),
            _ => None,
        }
    }

    pub(crate) fn as_set(&self) -> Option<Cow<'_, BTreeSet<Key>>> {
        match self {
            Self::Set(members) | Self::FrozenSet(members) => Some(Cow::Borrowed(members)),
            Self::Opaque(opaque) => opaque.0.as_set().map(Cow::Owned),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::List(left), Self::List(right)) | (Self::Tuple(left), Self::Tuple(right)) => {
                left == right
            }
            (Self::Dict(left), Self::Dict(right)) => left == right,
            (Self::Set(left), Self::Set(right)) | (Self::FrozenSet(left), Self::FrozenSet(right)) => {
                left == right
            }
            (Self::Mempty, Self::Mempty) => true,
            (Self::Declared(left), right) => left.eq_value(right),
            (Self::Opaque(left), Self::Opaque(right)) => left == right,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::List(elements)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Bool(value) => Self::Bool(value),
            Key::Int(value) => Self::Int(value),
            Key::Str(value) => Self::Str(value),
            Key::Tuple(keys) => Self::Tuple(keys.into_iter().map(Self::from).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug)]
    struct Letters(&'static str);

    impl Shape for Letters {
        fn type_name(&self) -> &str {
            "Letters"
        }

        fn as_text(&self) -> Option<String> {
            Some(self.0.to_owned())
        }
    }

    #[rstest]
    #[case(Value::from(false), "bool")]
    #[case(Value::from(2.5), "float")]
    #[case(Value::tuple([1, 2]), "tuple")]
    #[case(Value::dict([("a", 1)]), "dict")]
    #[case(Value::set([1]), "set")]
    #[case(Value::frozenset([1]), "frozenset")]
    #[case(Value::opaque(Letters("ab")), "Letters")]
    fn type_names(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.type_name(), expected);
    }

    #[rstest]
    fn list_and_tuple_are_distinct() {
        assert_ne!(Value::list([1]), Value::tuple([1]));
        assert_eq!(Value::list([1]), Value::List(vec![Value::Int(1)]));
    }

    #[rstest]
    fn opaque_equality_is_identity() {
        let value = Value::opaque(Letters("ab"));
        assert_eq!(value.clone(), value);
        assert_ne!(Value::opaque(Letters("ab")), Value::opaque(Letters("ab")));
    }

    #[rstest]
    fn opaque_probes_go_through_shape() {
        let value = Value::opaque(Letters("ab"));
        assert_eq!(value.as_text().as_deref(), Some("ab"));
        assert!(value.as_number().is_none());
    }

    #[rstest]
    fn tuple_keys_become_tuple_values() {
        let key = Key::Tuple(vec![Key::from(1), Key::from("a")]);
        assert_eq!(Value::from(key), Value::Tuple(vec![Value::Int(1), Value::from("a")]));
    }
}
