//! Algebraic categories recognized by generic inference.

use std::fmt;

use super::value::Value;

/// The monoid family a dynamic value belongs to.
///
/// Structural probing tries the categories in [`Category::ORDER`]; the first
/// one whose shape matches wins, so a value that is both boolean-like and
/// number-like is a [`Category::Boolean`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Combined with logical OR, identity `false`.
    Boolean,
    /// Combined with addition, identity zero.
    Number,
    /// Combined with concatenation, identity `""`.
    String,
    /// Combined with concatenation into a list, identity empty.
    Sequence,
    /// Combined with right-biased union, identity empty.
    Mapping,
    /// Combined with union, identity empty.
    Set,
}

impl Category {
    /// Probing order used when a type is not known by name.
    pub const ORDER: [Self; 6] = [
        Self::Boolean,
        Self::Number,
        Self::String,
        Self::Sequence,
        Self::Mapping,
        Self::Set,
    ];

    /// Returns `true` if `value` has the shape of this category.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Boolean => value.as_boolean().is_some(),
            Self::Number => value.as_number().is_some(),
            Self::String => value.as_text().is_some(),
            Self::Sequence => value.as_sequence().is_some(),
            Self::Mapping => value.as_mapping().is_some(),
            Self::Set => value.as_set().is_some(),
        }
    }

    /// Lowercase name of the category.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Set => "set",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::{BTreeMap, BTreeSet};

    #[rstest]
    #[case(Value::from(true), Category::Boolean)]
    #[case(Value::from(3), Category::Number)]
    #[case(Value::from(1.5), Category::Number)]
    #[case(Value::from("abc"), Category::String)]
    #[case(Value::List(vec![]), Category::Sequence)]
    #[case(Value::Tuple(vec![]), Category::Sequence)]
    #[case(Value::Dict(BTreeMap::new()), Category::Mapping)]
    #[case(Value::Set(BTreeSet::new()), Category::Set)]
    fn first_matching_category(#[case] value: Value, #[case] expected: Category) {
        let found = Category::ORDER.into_iter().find(|category| category.matches(&value));
        assert_eq!(found, Some(expected));
    }

    #[rstest]
    fn strings_are_not_sequences() {
        assert!(!Category::Sequence.matches(&Value::from("abc")));
    }

    #[rstest]
    fn display_is_lowercase() {
        assert_eq!(Category::Mapping.to_string(), "mapping");
    }
}
