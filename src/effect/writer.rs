//! Writer Monad - computation with accumulated output.
//!
//! A `Writer<W, A>` pairs a value of type `A` with a log of type `W`. The
//! log must be a [`Monoid`] so that sequential steps can combine their logs
//! with `mappend`, and so that [`Applicative::unit`] can start from an empty
//! log.
//!
//! Entries that are not monoids themselves are collected into a
//! [`List`]: see [`Writer::with_entry`] and [`Writer::with_entries`].
//!
//! # Laws
//!
//! - Left Identity: `Writer::unit(a).bind(f) == f(a)`
//! - Right Identity: `m.bind(Writer::unit) == m`
//! - Tell Monoid: `tell(w1).then(tell(w2)) == tell(w1.mappend(w2))`
//!
//! `apply` keeps only the log of the value-carrying operand; it does not
//! combine the two logs.
//!
//! # Examples
//!
//! ```rust
//! use monadix::collection::List;
//! use monadix::effect::Writer;
//! use monadix::typeclass::Monad;
//!
//! fn half(value: i32) -> Writer<List<String>, i32> {
//!     Writer::with_entry(value / 2, format!("halved {value}"))
//! }
//!
//! let result = Writer::with_entry(16, String::from("start")).bind(half).bind(half);
//! assert_eq!(result.value(), &4);
//! assert_eq!(
//!     result.log(),
//!     &List::from(vec![
//!         String::from("start"),
//!         String::from("halved 16"),
//!         String::from("halved 8"),
//!     ])
//! );
//! ```

use std::fmt;

use crate::collection::List;
use crate::typeclass::{Applicative, Apply, Functor, Monad, Monoid, TypeConstructor};

/// A value paired with an accumulated log.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Writer<W, A> {
    value: A,
    log: W,
}

impl<W, A> Writer<W, A> {
    /// Creates a Writer from a value and a log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::effect::Writer;
    ///
    /// let writer = Writer::new(42, String::from("answer"));
    /// assert_eq!(writer.run(), (42, String::from("answer")));
    /// ```
    pub const fn new(value: A, log: W) -> Self {
        Self { value, log }
    }

    /// Consumes the Writer, returning the value and the log.
    pub fn run(self) -> (A, W) {
        (self.value, self.log)
    }

    /// Borrows the value.
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Borrows the log.
    pub const fn log(&self) -> &W {
        &self.log
    }

    /// Exposes the log alongside the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::effect::Writer;
    ///
    /// let listened = Writer::listen(Writer::new(1, String::from("log")));
    /// assert_eq!(listened.run(), ((1, String::from("log")), String::from("log")));
    /// ```
    pub fn listen(computation: Self) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        Writer {
            value: (computation.value, computation.log.clone()),
            log: computation.log,
        }
    }

    /// Transforms the log of `computation`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::effect::Writer;
    ///
    /// let censored = Writer::censor(|log: String| log.to_uppercase(), Writer::new(1, String::from("quiet")));
    /// assert_eq!(censored.log(), "QUIET");
    /// ```
    pub fn censor<F>(modifier: F, computation: Self) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Self {
            value: computation.value,
            log: modifier(computation.log),
        }
    }
}

impl<E, A> Writer<List<E>, A> {
    /// Creates a Writer whose log holds a single entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::collection::List;
    /// use monadix::effect::Writer;
    ///
    /// let writer = Writer::with_entry(1, "created");
    /// assert_eq!(writer.log(), &List::singleton("created"));
    /// ```
    pub fn with_entry(value: A, entry: E) -> Self {
        Self::new(value, List::singleton(entry))
    }

    /// Creates a Writer whose log holds every entry in order.
    pub fn with_entries<I>(value: A, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::new(value, entries.into_iter().collect())
    }
}

impl<W> Writer<W, ()> {
    /// Creates a Writer that only appends `log`.
    pub const fn tell(log: W) -> Self {
        Self::new((), log)
    }
}

impl<W: fmt::Debug, A: fmt::Debug> fmt::Display for Writer<W, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Writer({:?}, {:?})", self.value, self.log)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<W, A> TypeConstructor for Writer<W, A> {
    type Inner = A;
    type WithType<B> = Writer<W, B>;
}

impl<W, A> Functor for Writer<W, A> {
    /// Transforms the value and leaves the log untouched.
    fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Writer {
            value: function(self.value),
            log: self.log,
        }
    }
}

impl<W, A> Apply for Writer<W, A> {
    /// Calls the left function on the right value, keeping the right log.
    fn apply<B, C>(self, other: Writer<W, B>) -> Writer<W, C>
    where
        A: Fn(B) -> C,
        B: Clone + 'static,
        C: 'static,
    {
        Writer {
            value: (self.value)(other.value),
            log: other.log,
        }
    }
}

impl<W: Monoid, A> Applicative for Writer<W, A> {
    /// Pairs `value` with an empty log.
    fn unit(value: A) -> Self {
        Self::new(value, W::mempty())
    }
}

impl<W: Monoid, A> Monad for Writer<W, A> {
    /// Runs the continuation and appends its log after this one.
    fn bind<B, F>(self, function: F) -> Writer<W, B>
    where
        F: Fn(A) -> Writer<W, B> + 'static,
        B: 'static,
    {
        let next = function(self.value);
        Writer {
            value: next.value,
            log: self.log.mappend(next.log),
        }
    }
}
