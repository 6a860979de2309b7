//! Property-based tests for Functor laws.
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! Function-backed instances (`Reader`, `State`) are compared by running
//! both sides on the same input.

use monadix::collection::{List, Map};
use monadix::control::{Either, Maybe};
use monadix::effect::{Reader, State, Writer};
use monadix::typeclass::{Functor, Identity};
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<String>().prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

fn list_strategy() -> impl Strategy<Value = List<i32>> {
    prop::collection::vec(any::<i32>(), 0..20).prop_map(List::from)
}

fn map_strategy() -> impl Strategy<Value = Map<String, i32>> {
    prop::collection::btree_map("[a-z]{1,4}", any::<i32>(), 0..10).prop_map(Map::from)
}

// =============================================================================
// Maybe / Either
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_identity_law(value in maybe_strategy()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    #[test]
    fn prop_maybe_composition_law(value in maybe_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_identity_law(value in either_strategy()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    #[test]
    fn prop_either_composition_law(value in either_strategy()) {
        let function1 = |n: i32| i64::from(n) * 3;
        let function2 = |n: i64| n.to_string();

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// List / Map / Identity
// =============================================================================

proptest! {
    #[test]
    fn prop_list_identity_law(values in list_strategy()) {
        prop_assert_eq!(values.clone().fmap(|x| x), values);
    }

    #[test]
    fn prop_list_composition_law(values in list_strategy()) {
        let function1 = |n: i32| n.wrapping_sub(7);
        let function2 = |n: i32| n % 5;

        let left = values.clone().fmap(function1).fmap(function2);
        let right = values.fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_list_fmap_preserves_length(values in list_strategy()) {
        let length = values.len();
        prop_assert_eq!(values.fmap(|x| i64::from(x) * 2).len(), length);
    }

    #[test]
    fn prop_map_identity_law(map in map_strategy()) {
        prop_assert_eq!(map.clone().fmap(|x| x), map);
    }

    #[test]
    fn prop_map_composition_law(map in map_strategy()) {
        let function1 = |n: i32| n.wrapping_abs();
        let function2 = |n: i32| n.to_string();

        let left = map.clone().fmap(function1).fmap(function2);
        let right = map.fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_map_fmap_keeps_keys(map in map_strategy()) {
        let keys: Vec<String> = map.keys().cloned().collect();
        let mapped = map.fmap(|x| x.wrapping_neg());
        prop_assert_eq!(mapped.keys().cloned().collect::<Vec<_>>(), keys);
    }

    #[test]
    fn prop_identity_composition_law(value in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_mul(3);
        let function2 = |n: i32| n.wrapping_add(11);

        let left = Identity::new(value).fmap(function1).fmap(function2);
        let right = Identity::new(value).fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Reader / State / Writer
// =============================================================================

proptest! {
    #[test]
    fn prop_reader_identity_law(environment in any::<i32>()) {
        let reader = Reader::new(|e: i32| e.wrapping_mul(2));
        prop_assert_eq!(reader.clone().fmap(|x| x).run(environment), reader.run(environment));
    }

    #[test]
    fn prop_reader_composition_law(environment in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(5);
        let reader = Reader::new(|e: i32| e.wrapping_sub(3));

        let left = reader.clone().fmap(function1).fmap(function2);
        let right = reader.fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left.run(environment), right.run(environment));
    }

    #[test]
    fn prop_state_identity_law(initial in any::<i32>()) {
        let state = State::new(|s: i32| (s.wrapping_mul(2), s.wrapping_add(1)));
        prop_assert_eq!(state.clone().fmap(|x| x).run(initial), state.run(initial));
    }

    #[test]
    fn prop_state_composition_law(initial in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(10);
        let function2 = |n: i32| n.wrapping_mul(2);
        let state = State::new(|s: i32| (s, s.wrapping_add(1)));

        let left = state.clone().fmap(function1).fmap(function2);
        let right = state.fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left.run(initial), right.run(initial));
    }

    #[test]
    fn prop_writer_identity_law(value in any::<i32>(), entries in prop::collection::vec("[a-z]{0,3}", 0..5)) {
        let writer: Writer<List<String>, i32> = Writer::with_entries(value, entries);
        prop_assert_eq!(writer.clone().fmap(|x| x), writer);
    }

    #[test]
    fn prop_writer_composition_law(value in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let writer = Writer::with_entry(value, String::from("log"));

        let left = writer.clone().fmap(function1).fmap(function2);
        let right = writer.fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}
