//! The `mdo!` macro: do-notation over any [`Monad`](crate::typeclass::Monad).

/// Sequences monadic steps with do-notation.
///
/// Each statement ends with `;` and the block ends with an expression in the
/// monad, or `pure expr` to wrap a plain value with
/// [`Applicative::unit`](crate::typeclass::Applicative::unit).
///
/// # Syntax
///
/// - `x <= monad;` binds the value of `monad` to `x`
/// - `(x, y) <= monad;` binds with a tuple pattern
/// - `_ <= monad;` runs `monad` and discards its value
/// - `let pattern = expr;` binds a plain value
/// - `pure expr` wraps the final value
///
/// Every step becomes a `move` closure passed to `bind`. Values bound in
/// earlier steps are moved into later closures, so they must be `Copy` or
/// cloned explicitly when a later step is run more than once.
///
/// # Examples
///
/// ```rust
/// use monadix::control::Maybe;
/// use monadix::mdo;
///
/// let result: Maybe<i32> = mdo! {
///     x <= Maybe::just(5);
///     y <= Maybe::just(10);
///     let total = x + y;
///     pure total
/// };
/// assert_eq!(result, Maybe::just(15));
///
/// let result: Maybe<i32> = mdo! {
///     x <= Maybe::just(5);
///     y <= Maybe::<i32>::Nothing;
///     pure x + y
/// };
/// assert_eq!(result, Maybe::Nothing);
/// ```
#[macro_export]
macro_rules! mdo {
    (_ <= $monad:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::bind($monad, move |_| {
            $crate::mdo!($($rest)+)
        })
    };

    ($pattern:ident <= $monad:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::bind($monad, move |$pattern| {
            $crate::mdo!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $monad:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::bind($monad, move |($($pattern)*)| {
            $crate::mdo!($($rest)+)
        })
    };

    (let $pattern:pat = $value:expr ; $($rest:tt)+) => {{
        let $pattern = $value;
        $crate::mdo!($($rest)+)
    }};

    (pure $result:expr) => {
        $crate::typeclass::Applicative::unit($result)
    };

    ($result:expr) => {
        $result
    };
}
