//! Integration tests for generic monoid inference over dynamic values.
//!
//! Set `RUST_LOG=monadix=trace` to see how each value was classified.

use std::collections::BTreeMap;

use monadix::collection::List;
use monadix::generic::{self, Category, Classifier, Key, MonoidError, Number, Shape, Value};
use monadix::typeclass::{Product, Sum};
use rstest::{fixture, rstest};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[fixture]
fn logging() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "monadix=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// A host sequence type the classifier has never seen.
#[derive(Debug)]
struct Deque(Vec<i64>);

impl Shape for Deque {
    fn type_name(&self) -> &str {
        "Deque"
    }

    fn as_sequence(&self) -> Option<Vec<Value>> {
        Some(self.0.iter().copied().map(Value::from).collect())
    }
}

/// A host mapping type with string keys.
#[derive(Debug)]
struct Headers(Vec<(&'static str, &'static str)>);

impl Shape for Headers {
    fn type_name(&self) -> &str {
        "Headers"
    }

    fn as_mapping(&self) -> Option<BTreeMap<Key, Value>> {
        Some(
            self.0
                .iter()
                .map(|(name, value)| (Key::from(*name), Value::from(*value)))
                .collect(),
        )
    }
}

// =============================================================================
// Builtin categories
// =============================================================================

#[rstest]
#[case(vec![Value::from(false), Value::from(true), Value::from(false)], Value::from(true))]
#[case(vec![Value::from(1), Value::from(2), Value::from(3)], Value::from(6))]
#[case(vec![Value::from("mon"), Value::from("oid")], Value::from("monoid"))]
#[case(vec![Value::list([1]), Value::tuple([2, 3])], Value::list([1, 2, 3]))]
#[case(vec![Value::set([1, 2]), Value::set([2, 3])], Value::set([1, 2, 3]))]
fn mconcat_builtin_values(_logging: (), #[case] values: Vec<Value>, #[case] expected: Value) {
    assert_eq!(generic::mconcat(values), Ok(expected));
}

#[rstest]
fn mconcat_matches_pairwise_mappend(_logging: ()) {
    let values = vec![Value::from(4), Value::from(-1), Value::from(10)];
    let folded = values
        .iter()
        .cloned()
        .try_fold(Value::Mempty, generic::mappend);
    assert_eq!(generic::mconcat(values), folded);
}

#[rstest]
#[case(Value::from(true), Value::from(false))]
#[case(Value::from(7), Value::from(0))]
#[case(Value::from(2.5), Value::from(0.0))]
#[case(Value::from("text"), Value::from(""))]
#[case(Value::list([1]), Value::list(Vec::<Value>::new()))]
#[case(Value::dict([("a", 1)]), Value::dict(Vec::<(Key, Value)>::new()))]
fn mempty_follows_the_type(_logging: (), #[case] value: Value, #[case] expected: Value) {
    assert_eq!(generic::mempty(&value), Ok(expected));
}

#[rstest]
fn mempty_is_transparent(_logging: ()) {
    assert_eq!(generic::mappend(Value::Mempty, Value::from("x")), Ok(Value::from("x")));
    assert_eq!(generic::mappend(Value::from(3), Value::Mempty), Ok(Value::from(3)));
    assert_eq!(
        generic::mconcat([Value::Mempty, Value::from(1), Value::Mempty, Value::from(2)]),
        Ok(Value::from(3))
    );
    assert_eq!(generic::mconcat([Value::Mempty, Value::Mempty]), Ok(Value::Mempty));
}

#[rstest]
fn dict_union_keeps_the_last_value(_logging: ()) {
    let merged = generic::mconcat([
        Value::dict([("host", "a"), ("port", "80")]),
        Value::dict([("port", "8080")]),
        Value::dict([("user", "root")]),
    ]);
    assert_eq!(
        merged,
        Ok(Value::dict([("host", "a"), ("port", "8080"), ("user", "root")]))
    );
}

#[rstest]
fn mismatched_operands_are_rejected(_logging: ()) {
    assert_eq!(
        generic::mappend(Value::from(1), Value::from("1")),
        Err(MonoidError::Mismatch {
            left: String::from("int"),
            right: String::from("str"),
        })
    );
}

#[rstest]
fn overflow_is_an_error_not_a_wrap(_logging: ()) {
    let result = generic::mconcat([Value::from(i64::MAX - 1), Value::from(1), Value::from(1)]);
    assert_eq!(
        result,
        Err(MonoidError::Overflow {
            left: i64::MAX,
            right: 1
        })
    );
}

// =============================================================================
// Shape-probed host values
// =============================================================================

#[rstest]
fn unknown_sequence_type_is_classified_by_shape(_logging: ()) {
    let deque = Value::opaque(Deque(vec![1, 2]));
    assert_eq!(generic::classify(&deque), Ok(Category::Sequence));
    assert_eq!(generic::mappend(deque, Value::list([3])), Ok(Value::list([1, 2, 3])));
}

#[rstest]
fn unknown_type_has_no_identity(_logging: ()) {
    let deque = Value::opaque(Deque(vec![1]));
    assert!(!generic::is_monoid(&deque));
    assert_eq!(
        generic::mempty(&deque),
        Err(MonoidError::NoMempty {
            type_name: String::from("Deque")
        })
    );
}

#[rstest]
fn registered_identity_enables_mconcat(_logging: ()) {
    let classifier = Classifier::builder()
        .with_mempty("Headers", || Value::dict(Vec::<(Key, Value)>::new()))
        .build();
    let merged = classifier.mconcat([
        Value::opaque(Headers(vec![("accept", "json")])),
        Value::opaque(Headers(vec![("accept", "xml"), ("host", "example")])),
    ]);
    assert_eq!(merged, Ok(Value::dict([("accept", "xml"), ("host", "example")])));
}

#[rstest]
fn registered_generic_skips_probing(_logging: ()) {
    #[derive(Debug)]
    struct Ambiguous;

    impl Shape for Ambiguous {
        fn type_name(&self) -> &str {
            "Ambiguous"
        }

        fn as_boolean(&self) -> Option<bool> {
            Some(false)
        }

        fn as_number(&self) -> Option<Number> {
            Some(Number::Int(5))
        }
    }

    let classifier = Classifier::builder()
        .with_generic("Ambiguous", Category::Number)
        .build();
    assert_eq!(classifier.classify(&Value::opaque(Ambiguous)), Ok(Category::Number));
    assert_eq!(generic::classify(&Value::opaque(Ambiguous)), Ok(Category::Boolean));
}

// =============================================================================
// Declared monoids and List<Value>
// =============================================================================

#[rstest]
fn declared_monoids_use_their_own_operations(_logging: ()) {
    let total = generic::mconcat([Value::declared(Product(2)), Value::declared(Product(5))]);
    assert_eq!(
        total.map(|value| value.downcast_declared::<Product<i32>>()),
        Ok(Some(Product(10)))
    );
}

#[rstest]
fn declared_monoids_do_not_mix(_logging: ()) {
    let result = generic::mappend(Value::declared(Sum(1)), Value::from(1));
    assert!(matches!(result, Err(MonoidError::Mismatch { .. })));
}

#[rstest]
fn list_of_values_spreads_iterables(_logging: ()) {
    let list = List::unit_value(Value::set([3, 1]))
        .mappend_value(Value::tuple(["a"]))
        .and_then(|list| list.mappend_value(Value::Mempty));
    assert_eq!(
        list,
        Ok(List::from(vec![Value::from(1), Value::from(3), Value::from("a")]))
    );
}

#[rstest]
fn list_of_values_rejects_scalars(_logging: ()) {
    assert!(List::unit_value(Value::from(1)).mappend_value(Value::from(2)).is_err());
}

#[rstest]
fn errors_render_for_humans() {
    let error = generic::mappend(Value::list([1]), Value::from(true)).unwrap_err();
    assert_eq!(error.to_string(), "cannot combine `list` with `bool`");
}
