//! The `compose!` macro: variadic right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`. A single function is returned
/// unchanged.
///
/// Composition is associative, and [`identity`](crate::compose::identity)
/// is neutral on both sides.
///
/// # Examples
///
/// ```
/// use monadix::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// assert_eq!(compose!(add_one, double)(5), 11);
/// assert_eq!(compose!(add_one, double, square)(3), 19);
/// ```
///
/// Lifting a composed function into a functor:
///
/// ```
/// use monadix::collection::List;
/// use monadix::compose;
/// use monadix::typeclass::Functor;
///
/// let describe = compose!(|length: usize| format!("{length} chars"), |text: &str| text.len());
/// assert_eq!(
///     List::from(vec!["ab", "abc"]).fmap(describe),
///     List::from(vec![String::from("2 chars"), String::from("3 chars")])
/// );
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $inner:expr $(,)?) => {{
        let outer = $outer;
        let inner = $inner;
        move |input| outer(inner(input))
    }};

    ($outer:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($rest),+);
        move |input| outer(inner(input))
    }};
}
