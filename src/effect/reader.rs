//! Reader Monad - computation over a shared environment.
//!
//! A `Reader<E, A>` wraps a function `E -> A`. Nothing runs until
//! [`Reader::run`] supplies the environment, and the same reader can be run
//! any number of times.
//!
//! # Laws
//!
//! Reader satisfies the Functor and Monad laws when compared by running
//! both sides on the same environment:
//!
//! - Identity: `reader.fmap(|x| x).run(e) == reader.run(e)`
//! - Left Identity: `Reader::unit(a).bind(f).run(e) == f(a).run(e)`
//! - Right Identity: `m.bind(Reader::unit).run(e) == m.run(e)`
//!
//! # Examples
//!
//! ```rust
//! use monadix::effect::Reader;
//! use monadix::typeclass::{Functor, Monad};
//!
//! #[derive(Clone)]
//! struct Config {
//!     base: i32,
//!     factor: i32,
//! }
//!
//! let scaled = Reader::asks(|config: Config| config.base)
//!     .bind(|base| Reader::asks(move |config: Config| base * config.factor))
//!     .fmap(|value| value + 1);
//!
//! assert_eq!(scaled.run(Config { base: 4, factor: 10 }), 41);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Applicative, Apply, Functor, Monad, TypeConstructor};

/// A computation that reads an environment of type `E` and produces `A`.
pub struct Reader<E, A> {
    run_function: Rc<dyn Fn(E) -> A>,
}

impl<E, A> Reader<E, A>
where
    E: 'static,
    A: 'static,
{
    /// Creates a Reader from a function of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::effect::Reader;
    ///
    /// let reader = Reader::new(|environment: i32| environment * 2);
    /// assert_eq!(reader.run(21), 42);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(E) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation with `environment`.
    pub fn run(&self, environment: E) -> A {
        (self.run_function)(environment)
    }

    /// Creates a Reader that projects a value from the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(E) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs `computation` on an environment transformed by `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::effect::Reader;
    ///
    /// let reader = Reader::new(|environment: i32| environment * 2);
    /// let local_reader = Reader::local(|environment| environment + 10, reader);
    /// assert_eq!(local_reader.run(5), 30);
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(E) -> E + 'static,
    {
        let computation_function = computation.run_function;
        Self::new(move |environment| computation_function(modifier(environment)))
    }
}

impl<E> Reader<E, E>
where
    E: 'static,
{
    /// Creates a Reader that returns the environment itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::effect::Reader;
    ///
    /// assert_eq!(Reader::ask().run("env"), "env");
    /// ```
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<E, A> Clone for Reader<E, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<E, A> fmt::Display for Reader<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Reader>")
    }
}

impl<E, A> fmt::Debug for Reader<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Reader>")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E, A> TypeConstructor for Reader<E, A> {
    type Inner = A;
    type WithType<B> = Reader<E, B>;
}

impl<E, A> Functor for Reader<E, A>
where
    E: 'static,
    A: 'static,
{
    /// Composes `function` after the wrapped function.
    fn fmap<B, F>(self, function: F) -> Reader<E, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment| function(original_function(environment)))
    }
}

impl<E, A> Apply for Reader<E, A>
where
    E: Clone + 'static,
    A: 'static,
{
    /// Runs both readers on the same environment and calls the function
    /// result on the value result.
    fn apply<B, C>(self, other: Reader<E, B>) -> Reader<E, C>
    where
        A: Fn(B) -> C,
        B: Clone + 'static,
        C: 'static,
    {
        let function_reader = self.run_function;
        let value_reader = other.run_function;
        Reader::new(move |environment: E| {
            let function = function_reader(environment.clone());
            function(value_reader(environment))
        })
    }
}

impl<E, A> Applicative for Reader<E, A>
where
    E: Clone + 'static,
    A: Clone + 'static,
{
    /// A reader that ignores its environment.
    fn unit(value: A) -> Self {
        Self::new(move |_| value.clone())
    }
}

impl<E, A> Monad for Reader<E, A>
where
    E: Clone + 'static,
    A: Clone + 'static,
{
    /// Runs the continuation's reader on the same environment.
    fn bind<B, F>(self, function: F) -> Reader<E, B>
    where
        F: Fn(A) -> Reader<E, B> + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment: E| {
            let value = original_function(environment.clone());
            function(value).run(environment)
        })
    }
}
