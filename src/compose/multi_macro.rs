//! The `multiapply!` and `multibind!` macros.
//!
//! Both fold a list of arguments into an initial value from left to right.
//! Unlike the [`multibind`](crate::compose::multibind) function, every step
//! may change the carried type, because each call is expanded separately.

/// Applies a curried function in context to each argument in turn.
///
/// `multiapply!(f, a, b)` expands to `f.apply(a).apply(b)`.
///
/// # Examples
///
/// ```rust
/// use monadix::control::Maybe;
/// use monadix::multiapply;
///
/// let add = Maybe::just(|x: i32| move |y: i32| x + y);
/// assert_eq!(multiapply!(add, Maybe::just(1), Maybe::just(2)), Maybe::just(3));
///
/// let add = Maybe::just(|x: i32| move |y: i32| x + y);
/// assert_eq!(multiapply!(add, Maybe::just(1), Maybe::<i32>::Nothing), Maybe::Nothing);
/// ```
#[macro_export]
macro_rules! multiapply {
    ($initial:expr $(,)?) => {
        $initial
    };

    ($initial:expr, $($argument:expr),+ $(,)?) => {{
        let accumulated = $initial;
        $(
            let accumulated = $crate::typeclass::Apply::apply(accumulated, $argument);
        )+
        accumulated
    }};
}

/// Binds each continuation in turn, left to right.
///
/// `multibind!(m, f, g)` expands to `m.bind(f).bind(g)`.
///
/// # Examples
///
/// ```rust
/// use monadix::control::Either;
/// use monadix::multibind;
///
/// let parse = |text: &'static str| {
///     text.parse::<i32>().map_or_else(|_| Either::Left("not a number"), Either::Right)
/// };
/// let checked = |value: i32| {
///     if value > 0 { Either::Right(value as u32) } else { Either::Left("not positive") }
/// };
///
/// assert_eq!(multibind!(Either::Right("12"), parse, checked), Either::Right(12_u32));
/// assert_eq!(multibind!(Either::Right("-4"), parse, checked), Either::Left("not positive"));
/// ```
#[macro_export]
macro_rules! multibind {
    ($initial:expr $(,)?) => {
        $initial
    };

    ($initial:expr, $($continuation:expr),+ $(,)?) => {{
        let accumulated = $initial;
        $(
            let accumulated = $crate::typeclass::Monad::bind(accumulated, $continuation);
        )+
        accumulated
    }};
}
