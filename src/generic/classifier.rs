//! Classification tables and dispatch for generic monoid inference.
//!
//! A [`Classifier`] answers three questions about a dynamic [`Value`]:
//! which [`Category`] it belongs to, what its identity element is, and how
//! two of its kind combine. Identity comes from an exact-type table only,
//! while combining works for anything whose shape fits a category. A foreign
//! value can therefore be combinable and still have no identity.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::LazyLock;

use tracing::{debug, trace};

use super::category::Category;
use super::error::MonoidError;
use super::value::{Key, Number, Value};
use crate::collection::List;

/// Combines a left operand with a right operand of the same category.
pub type Combine = fn(Value, Value) -> Result<Value, MonoidError>;

/// Folds operands onto an identity element in a single pass.
pub type Fold = fn(Value, Vec<Value>) -> Result<Value, MonoidError>;

/// Identity element constructor for an exact type.
pub type IdentityFn = fn() -> Value;

static DEFAULT_CLASSIFIER: LazyLock<Classifier> = LazyLock::new(Classifier::default);

/// Lookup tables driving generic monoid inference.
///
/// # Examples
///
/// ```rust
/// use monadix::generic::{Category, Classifier, Value};
///
/// let classifier = Classifier::builder()
///     .with_generic("decimal", Category::Number)
///     .with_mempty("decimal", || Value::Float(0.0))
///     .build();
///
/// assert_eq!(classifier.classify(&Value::from(1)), Ok(Category::Number));
/// assert!(classifier.is_monoid(&Value::from("text")));
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    known_generics: HashMap<&'static str, Category>,
    known_mempties: HashMap<&'static str, IdentityFn>,
    mappends: HashMap<Category, Combine>,
    mconcats: HashMap<Category, Fold>,
    order: Vec<Category>,
}

static_assertions::assert_impl_all!(Classifier: Send, Sync);

impl Classifier {
    /// Returns the process-wide default classifier, built on first use.
    pub fn global() -> &'static Self {
        &DEFAULT_CLASSIFIER
    }

    /// Starts a builder seeded with the default tables.
    pub fn builder() -> ClassifierBuilder {
        ClassifierBuilder {
            classifier: Self::default(),
        }
    }

    /// Finds the category of `value`.
    ///
    /// The exact type name is looked up first. Otherwise each category is
    /// probed in order and the first whose shape matches is returned.
    ///
    /// # Errors
    ///
    /// [`MonoidError::NoGeneric`] when no category matches. The transient
    /// identity and declared monoids have no category.
    pub fn classify(&self, value: &Value) -> Result<Category, MonoidError> {
        let type_name = value.type_name();
        if matches!(value, Value::Mempty | Value::Declared(_)) {
            return Err(MonoidError::NoGeneric {
                type_name: type_name.to_owned(),
            });
        }
        if let Some(category) = self.known_generics.get(type_name) {
            trace!(type_name, category = %category, "classified by exact type");
            return Ok(*category);
        }
        let category = self
            .order
            .iter()
            .copied()
            .find(|category| category.matches(value))
            .ok_or_else(|| MonoidError::NoGeneric {
                type_name: type_name.to_owned(),
            })?;
        debug!(type_name, category = %category, "classified by shape");
        Ok(category)
    }

    /// Returns the identity element for the type of `value`.
    ///
    /// # Errors
    ///
    /// [`MonoidError::NoMempty`] when the exact type has no registered
    /// identity, even if its shape is combinable.
    pub fn mempty(&self, value: &Value) -> Result<Value, MonoidError> {
        match value {
            Value::Mempty => Ok(Value::Mempty),
            Value::Declared(declared) => Ok(declared.mempty()),
            other => self
                .known_mempties
                .get(other.type_name())
                .map(|identity| identity())
                .ok_or_else(|| MonoidError::NoMempty {
                    type_name: other.type_name().to_owned(),
                }),
        }
    }

    /// Combines two values.
    ///
    /// # Errors
    ///
    /// [`MonoidError::Mismatch`] when `right` does not fit the category of
    /// `left`, [`MonoidError::Overflow`] on integer overflow, and any
    /// classification error for `left`.
    pub fn mappend(&self, left: Value, right: Value) -> Result<Value, MonoidError> {
        match (left, right) {
            (Value::Mempty, other) | (other, Value::Mempty) => Ok(other),
            (Value::Declared(declared), right) => match declared.downcast_ref::<List<Value>>() {
                Some(list) => list.clone().mappend_value(right).map(Value::declared),
                None => declared.mappend(&right),
            },
            (left, right) => {
                let category = self.classify(&left)?;
                let combine = self
                    .mappends
                    .get(&category)
                    .ok_or(MonoidError::NoMappend { category })?;
                combine(left, right)
            }
        }
    }

    /// Combines every value left to right.
    ///
    /// Transient identities are skipped; if nothing else remains the result
    /// is [`Value::Mempty`]. A category without a registered bulk fold is
    /// reduced with [`Classifier::mappend`] from its identity.
    ///
    /// # Errors
    ///
    /// [`MonoidError::NoMempty`] when the first operand's type has no
    /// identity, and the errors of [`Classifier::mappend`] otherwise.
    pub fn mconcat<I>(&self, values: I) -> Result<Value, MonoidError>
    where
        I: IntoIterator<Item = Value>,
    {
        let operands: Vec<Value> = values.into_iter().filter(|value| !value.is_mempty()).collect();
        let Some(first) = operands.first() else {
            return Ok(Value::Mempty);
        };
        if let Value::Declared(declared) = first {
            if declared.downcast_ref::<List<Value>>().is_none() {
                return declared.mconcat(&operands[1..]);
            }
            let identity = declared.mempty();
            return operands
                .into_iter()
                .try_fold(identity, |accumulated, operand| self.mappend(accumulated, operand));
        }
        let identity = self.mempty(first)?;
        let category = self.classify(first)?;
        match self.mconcats.get(&category) {
            Some(fold) => fold(identity, operands),
            None => operands
                .into_iter()
                .try_fold(identity, |accumulated, operand| self.mappend(accumulated, operand)),
        }
    }

    /// Returns `true` if `value` has both an identity and a combine.
    pub fn is_monoid(&self, value: &Value) -> bool {
        match value {
            Value::Mempty | Value::Declared(_) => true,
            other => {
                self.mempty(other).is_ok()
                    && self
                        .classify(other)
                        .is_ok_and(|category| self.mappends.contains_key(&category))
            }
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        let known_generics = HashMap::from([
            ("bool", Category::Boolean),
            ("int", Category::Number),
            ("float", Category::Number),
            ("str", Category::String),
            ("list", Category::Sequence),
            ("tuple", Category::Sequence),
            ("dict", Category::Mapping),
            ("set", Category::Set),
            ("frozenset", Category::Set),
        ]);
        let known_mempties: HashMap<&'static str, IdentityFn> = HashMap::from([
            ("bool", (|| Value::Bool(false)) as IdentityFn),
            ("int", (|| Value::Int(0)) as IdentityFn),
            ("float", (|| Value::Float(0.0)) as IdentityFn),
            ("str", (|| Value::Str(String::new())) as IdentityFn),
            ("list", (|| Value::List(Vec::new())) as IdentityFn),
            ("tuple", (|| Value::Tuple(Vec::new())) as IdentityFn),
            ("dict", (|| Value::Dict(BTreeMap::new())) as IdentityFn),
            ("set", (|| Value::Set(BTreeSet::new())) as IdentityFn),
            ("frozenset", (|| Value::FrozenSet(BTreeSet::new())) as IdentityFn),
        ]);
        let mappends: HashMap<Category, Combine> = HashMap::from([
            (Category::Boolean, combine_booleans as Combine),
            (Category::Number, combine_numbers as Combine),
            (Category::String, combine_strings as Combine),
            (Category::Sequence, combine_sequences as Combine),
            (Category::Mapping, combine_mappings as Combine),
            (Category::Set, combine_sets as Combine),
        ]);
        let mconcats: HashMap<Category, Fold> = HashMap::from([
            (Category::Boolean, fold_booleans as Fold),
            (Category::Number, fold_numbers as Fold),
            (Category::String, fold_strings as Fold),
            (Category::Sequence, fold_sequences as Fold),
            (Category::Mapping, fold_mappings as Fold),
            (Category::Set, fold_sets as Fold),
        ]);
        Self {
            known_generics,
            known_mempties,
            mappends,
            mconcats,
            order: Category::ORDER.to_vec(),
        }
    }
}

/// Builder for a customized [`Classifier`].
#[derive(Debug, Clone)]
pub struct ClassifierBuilder {
    classifier: Classifier,
}

impl ClassifierBuilder {
    /// Classifies the exact type name `type_name` as `category`.
    #[must_use]
    pub fn with_generic(mut self, type_name: &'static str, category: Category) -> Self {
        self.classifier.known_generics.insert(type_name, category);
        self
    }

    /// Registers the identity element of the exact type name `type_name`.
    #[must_use]
    pub fn with_mempty(mut self, type_name: &'static str, identity: IdentityFn) -> Self {
        self.classifier.known_mempties.insert(type_name, identity);
        self
    }

    /// Replaces the combine operation of `category`.
    ///
    /// The default bulk fold of `category` is dropped so that `mconcat`
    /// reduces with `combine`. Register a fold afterwards with
    /// [`ClassifierBuilder::with_mconcat`] to keep a single-pass path.
    #[must_use]
    pub fn with_mappend(mut self, category: Category, combine: Combine) -> Self {
        self.classifier.mappends.insert(category, combine);
        self.classifier.mconcats.remove(&category);
        self
    }

    /// Replaces the bulk fold of `category`.
    #[must_use]
    pub fn with_mconcat(mut self, category: Category, fold: Fold) -> Self {
        self.classifier.mconcats.insert(category, fold);
        self
    }

    /// Finishes the classifier.
    pub fn build(self) -> Classifier {
        self.classifier
    }
}

// =============================================================================
// Module-level entry points using the default classifier
// =============================================================================

/// Finds the category of `value` with the default classifier.
///
/// # Errors
///
/// See [`Classifier::classify`].
pub fn classify(value: &Value) -> Result<Category, MonoidError> {
    Classifier::global().classify(value)
}

/// Returns the identity element for the type of `value`.
///
/// # Errors
///
/// See [`Classifier::mempty`].
///
/// # Examples
///
/// ```rust
/// use monadix::generic::{self, Value};
///
/// assert_eq!(generic::mempty(&Value::from(5)), Ok(Value::from(0)));
/// assert_eq!(generic::mempty(&Value::set([1, 2])), Ok(Value::set::<[i32; 0]>([])));
/// ```
pub fn mempty(value: &Value) -> Result<Value, MonoidError> {
    Classifier::global().mempty(value)
}

/// Combines two values with the default classifier.
///
/// # Errors
///
/// See [`Classifier::mappend`].
///
/// # Examples
///
/// ```rust
/// use monadix::generic::{self, Value};
///
/// assert_eq!(generic::mappend(Value::from(true), Value::from(false)), Ok(Value::from(true)));
/// assert_eq!(
///     generic::mappend(Value::list([1]), Value::tuple([2])),
///     Ok(Value::list([1, 2]))
/// );
/// ```
pub fn mappend(left: Value, right: Value) -> Result<Value, MonoidError> {
    Classifier::global().mappend(left, right)
}

/// Combines every value with the default classifier.
///
/// # Errors
///
/// See [`Classifier::mconcat`].
///
/// # Examples
///
/// ```rust
/// use monadix::generic::{self, Value};
///
/// let joined = generic::mconcat([Value::from("a"), Value::from("b"), Value::from("c")]);
/// assert_eq!(joined, Ok(Value::from("abc")));
/// assert_eq!(generic::mconcat(Vec::new()), Ok(Value::Mempty));
/// ```
pub fn mconcat<I>(values: I) -> Result<Value, MonoidError>
where
    I: IntoIterator<Item = Value>,
{
    Classifier::global().mconcat(values)
}

/// Returns `true` if the default classifier can treat `value` as a monoid.
pub fn is_monoid(value: &Value) -> bool {
    Classifier::global().is_monoid(value)
}

// =============================================================================
// Default combine operations
// =============================================================================

fn combine_booleans(left: Value, right: Value) -> Result<Value, MonoidError> {
    match (left.as_boolean(), right.as_boolean()) {
        (Some(first), Some(second)) => Ok(Value::Bool(first || second)),
        _ => Err(MonoidError::mismatch(left.type_name(), right.type_name())),
    }
}

fn add_numbers(left: Number, right: Number) -> Result<Number, MonoidError> {
    match (left, right) {
        (Number::Int(first), Number::Int(second)) => first
            .checked_add(second)
            .map(Number::Int)
            .ok_or(MonoidError::Overflow {
                left: first,
                right: second,
            }),
        (first, second) => Ok(Number::Float(first.to_f64() + second.to_f64())),
    }
}

const fn number_value(number: Number) -> Value {
    match number {
        Number::Int(value) => Value::Int(value),
        Number::Float(value) => Value::Float(value),
    }
}

fn combine_numbers(left: Value, right: Value) -> Result<Value, MonoidError> {
    match (left.as_number(), right.as_number()) {
        (Some(first), Some(second)) => add_numbers(first, second).map(number_value),
        _ => Err(MonoidError::mismatch(left.type_name(), right.type_name())),
    }
}

fn combine_strings(left: Value, right: Value) -> Result<Value, MonoidError> {
    match (left.as_text(), right.as_text()) {
        (Some(first), Some(second)) => Ok(Value::Str(first.into_owned() + &*second)),
        _ => Err(MonoidError::mismatch(left.type_name(), right.type_name())),
    }
}

fn combine_sequences(left: Value, right: Value) -> Result<Value, MonoidError> {
    match (left.as_sequence(), right.as_sequence()) {
        (Some(first), Some(second)) => {
            let mut elements = first.into_owned();
            elements.extend_from_slice(&second);
            Ok(Value::List(elements))
        }
        _ => Err(MonoidError::mismatch(left.type_name(), right.type_name())),
    }
}

fn combine_mappings(left: Value, right: Value) -> Result<Value, MonoidError> {
    match (left.as_mapping(), right.as_mapping()) {
        (Some(first), Some(second)) => {
            let mut entries = first.into_owned();
            entries.extend(second.into_owned());
            Ok(Value::Dict(entries))
        }
        _ => Err(MonoidError::mismatch(left.type_name(), right.type_name())),
    }
}

fn combine_sets(left: Value, right: Value) -> Result<Value, MonoidError> {
    let frozen = matches!(left, Value::FrozenSet(_));
    match (left.as_set(), right.as_set()) {
        (Some(first), Some(second)) => {
            let mut members = first.into_owned();
            members.extend(second.iter().cloned());
            Ok(if frozen {
                Value::FrozenSet(members)
            } else {
                Value::Set(members)
            })
        }
        _ => Err(MonoidError::mismatch(left.type_name(), right.type_name())),
    }
}

// =============================================================================
// Default bulk folds
// =============================================================================

fn fold_booleans(identity: Value, operands: Vec<Value>) -> Result<Value, MonoidError> {
    let mut result = identity.as_boolean().unwrap_or(false);
    for operand in &operands {
        let value = operand
            .as_boolean()
            .ok_or_else(|| MonoidError::mismatch(identity.type_name(), operand.type_name()))?;
        result = result || value;
    }
    Ok(Value::Bool(result))
}

fn fold_numbers(identity: Value, operands: Vec<Value>) -> Result<Value, MonoidError> {
    let mut total = identity.as_number().unwrap_or(Number::Int(0));
    for operand in &operands {
        let value = operand
            .as_number()
            .ok_or_else(|| MonoidError::mismatch(identity.type_name(), operand.type_name()))?;
        total = add_numbers(total, value)?;
    }
    Ok(number_value(total))
}

fn fold_strings(identity: Value, operands: Vec<Value>) -> Result<Value, MonoidError> {
    let mut joined = identity.as_text().map(|text| text.into_owned()).unwrap_or_default();
    for operand in &operands {
        let text = operand
            .as_text()
            .ok_or_else(|| MonoidError::mismatch(identity.type_name(), operand.type_name()))?;
        joined.push_str(&text);
    }
    Ok(Value::Str(joined))
}

fn fold_sequences(identity: Value, operands: Vec<Value>) -> Result<Value, MonoidError> {
    let mut elements = identity.as_sequence().map(|sequence| sequence.into_owned()).unwrap_or_default();
    for operand in &operands {
        let sequence = operand
            .as_sequence()
            .ok_or_else(|| MonoidError::mismatch(identity.type_name(), operand.type_name()))?;
        elements.extend_from_slice(&sequence);
    }
    Ok(Value::List(elements))
}

fn fold_mappings(identity: Value, operands: Vec<Value>) -> Result<Value, MonoidError> {
    let mut entries = identity.as_mapping().map(|mapping| mapping.into_owned()).unwrap_or_default();
    for operand in &operands {
        let mapping = operand
            .as_mapping()
            .ok_or_else(|| MonoidError::mismatch(identity.type_name(), operand.type_name()))?;
        entries.extend(mapping.into_owned());
    }
    Ok(Value::Dict(entries))
}

fn fold_sets(identity: Value, operands: Vec<Value>) -> Result<Value, MonoidError> {
    let frozen = matches!(identity, Value::FrozenSet(_));
    let mut members: BTreeSet<Key> = identity.as_set().map(|set| set.into_owned()).unwrap_or_default();
    for operand in &operands {
        let set = operand
            .as_set()
            .ok_or_else(|| MonoidError::mismatch(identity.type_name(), operand.type_name()))?;
        members.extend(set.iter().cloned());
    }
    Ok(if frozen {
        Value::FrozenSet(members)
    } else {
        Value::Set(members)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::Shape;
    use rstest::{fixture, rstest};

    #[derive(Debug)]
    struct Truthy;

    impl Shape for Truthy {
        fn type_name(&self) -> &str {
            "Truthy"
        }

        fn as_boolean(&self) -> Option<bool> {
            Some(true)
        }

        fn as_number(&self) -> Option<Number> {
            Some(Number::Int(1))
        }
    }

    #[derive(Debug)]
    struct Widget;

    impl Shape for Widget {
        fn type_name(&self) -> &str {
            "Widget"
        }
    }

    #[fixture]
    fn classifier() -> Classifier {
        Classifier::default()
    }

    #[rstest]
    #[case(Value::from(true), Category::Boolean)]
    #[case(Value::from(1), Category::Number)]
    #[case(Value::from(0.5), Category::Number)]
    #[case(Value::from("a"), Category::String)]
    #[case(Value::tuple([1]), Category::Sequence)]
    #[case(Value::dict([("a", 1)]), Category::Mapping)]
    #[case(Value::frozenset([1]), Category::Set)]
    fn classifies_builtin_types_exactly(classifier: Classifier, #[case] value: Value, #[case] expected: Category) {
        assert_eq!(classifier.classify(&value), Ok(expected));
    }

    #[rstest]
    fn boolean_is_probed_before_number(classifier: Classifier) {
        assert_eq!(classifier.classify(&Value::opaque(Truthy)), Ok(Category::Boolean));
    }

    #[rstest]
    fn shapeless_values_have_no_generic(classifier: Classifier) {
        assert_eq!(
            classifier.classify(&Value::opaque(Widget)),
            Err(MonoidError::NoGeneric {
                type_name: "Widget".to_owned()
            })
        );
        assert!(!classifier.is_monoid(&Value::opaque(Widget)));
    }

    #[rstest]
    fn integer_overflow_is_reported(classifier: Classifier) {
        assert_eq!(
            classifier.mappend(Value::Int(i64::MAX), Value::from(1)),
            Err(MonoidError::Overflow {
                left: i64::MAX,
                right: 1
            })
        );
    }

    #[rstest]
    fn float_operand_widens_the_sum(classifier: Classifier) {
        assert_eq!(classifier.mappend(Value::from(1), Value::from(0.5)), Ok(Value::Float(1.5)));
        assert_eq!(classifier.mconcat([Value::from(1), Value::from(0.5), Value::from(2)]), Ok(Value::Float(3.5)));
    }

    #[rstest]
    fn mapping_union_prefers_right(classifier: Classifier) {
        let merged = classifier.mappend(Value::dict([("a", 1), ("b", 2)]), Value::dict([("b", 3)]));
        assert_eq!(merged, Ok(Value::dict([("a", 1), ("b", 3)])));
    }

    #[rstest]
    fn frozenset_stays_frozen_on_the_left(classifier: Classifier) {
        assert_eq!(
            classifier.mappend(Value::frozenset([1]), Value::set([2])),
            Ok(Value::frozenset([1, 2]))
        );
        assert_eq!(classifier.mappend(Value::set([1]), Value::frozenset([2])), Ok(Value::set([1, 2])));
    }

    #[rstest]
    fn strings_do_not_join_sequences(classifier: Classifier) {
        assert_eq!(
            classifier.mappend(Value::list([1]), Value::from("ab")),
            Err(MonoidError::mismatch("list", "str"))
        );
    }

    #[rstest]
    fn mconcat_names_the_offending_operand(classifier: Classifier) {
        assert_eq!(
            classifier.mconcat([Value::from("a"), Value::from(1)]),
            Err(MonoidError::mismatch("str", "int"))
        );
    }

    #[rstest]
    fn custom_combine_replaces_default() {
        let classifier = Classifier::builder()
            .with_mappend(Category::Number, multiply)
            .build();
        assert_eq!(classifier.mappend(Value::from(3), Value::from(4)), Ok(Value::from(12)));
    }

    fn multiply(left: Value, right: Value) -> Result<Value, MonoidError> {
        match (left, right) {
            (Value::Int(first), Value::Int(second)) => Ok(Value::Int(first * second)),
            (left, right) => Err(MonoidError::mismatch(left.type_name(), right.type_name())),
        }
    }

    #[rstest]
    fn mconcat_reduces_with_custom_combine() {
        let classifier = Classifier::builder()
            .with_mempty("int", || Value::Int(1))
            .with_mappend(Category::Number, multiply)
            .build();
        let operands = [Value::from(3), Value::from(4), Value::from(5)];

        let pairwise = operands
            .iter()
            .cloned()
            .try_fold(Value::Int(1), |accumulated, operand| classifier.mappend(accumulated, operand));

        assert_eq!(classifier.mconcat(operands), Ok(Value::from(60)));
        assert_eq!(pairwise, Ok(Value::from(60)));
    }

    #[rstest]
    fn explicit_fold_overrides_custom_combine() {
        fn count(_identity: Value, operands: Vec<Value>) -> Result<Value, MonoidError> {
            Ok(Value::Int(i64::try_from(operands.len()).unwrap_or(i64::MAX)))
        }
        let classifier = Classifier::builder()
            .with_mappend(Category::Number, multiply)
            .with_mconcat(Category::Number, count)
            .build();
        assert_eq!(classifier.mconcat([Value::from(3), Value::from(4)]), Ok(Value::from(2)));
    }

    #[rstest]
    fn declared_list_accepts_any_sequence(classifier: Classifier) {
        let declared = Value::declared(List::from(vec![Value::from(1)]));
        let expected = Value::declared(List::from(vec![Value::from(1), Value::from(2), Value::from(3)]));

        assert_eq!(classifier.mappend(declared.clone(), Value::tuple([2, 3])), Ok(expected.clone()));
        assert_eq!(
            classifier.mconcat([declared.clone(), Value::tuple([2]), Value::set([3])]),
            Ok(expected)
        );
        assert_eq!(
            classifier.mappend(declared, Value::from("x")),
            Err(MonoidError::mismatch("List", "str"))
        );
    }

    #[rstest]
    fn registered_identity_makes_opaque_foldable() {
        #[derive(Debug)]
        struct Count(i64);

        impl Shape for Count {
            fn type_name(&self) -> &str {
                "Count"
            }

            fn as_number(&self) -> Option<Number> {
                Some(Number::Int(self.0))
            }
        }

        let classifier = Classifier::builder()
            .with_mempty("Count", || Value::Int(0))
            .build();
        assert!(classifier.is_monoid(&Value::opaque(Count(1))));
        assert_eq!(
            classifier.mconcat([Value::opaque(Count(2)), Value::opaque(Count(3))]),
            Ok(Value::Int(5))
        );
        assert!(!Classifier::global().is_monoid(&Value::opaque(Count(1))));
    }

    #[rstest]
    fn global_is_built_once() {
        assert!(std::ptr::eq(Classifier::global(), Classifier::global()));
    }
}
