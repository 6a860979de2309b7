//! State Monad - stateful computation.
//!
//! A `State<S, A>` wraps a transition `S -> (A, S)`: given the current
//! state it produces a result and the next state. Composition threads the
//! state through each step in order.
//!
//! # Laws
//!
//! Compared by running both sides on the same initial state:
//!
//! - Identity: `state.fmap(|x| x).run(s) == state.run(s)`
//! - Left Identity: `State::unit(a).bind(f).run(s) == f(a).run(s)`
//! - Right Identity: `m.bind(State::unit).run(s) == m.run(s)`
//! - Put Get: `State::put(s).then(State::get())` returns `s`
//!
//! # Examples
//!
//! ```rust
//! use monadix::effect::State;
//! use monadix::typeclass::Monad;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment()
//!     .then(increment())
//!     .then(increment())
//!     .then(State::get());
//!
//! assert_eq!(computation.run(0), (3, 3));
//! ```

use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Applicative, Apply, Functor, Monad, TypeConstructor};

/// A computation that threads a state of type `S` and produces `A`.
pub struct State<S, A> {
    run_function: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a State from a transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::effect::State;
    ///
    /// let state = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.run(10), (20, 11));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation from `initial_state`, returning the result and
    /// the final state.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and keeps only the result.
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// Creates a State that reads a projection of the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::effect::State;
    ///
    /// let length = State::gets(|text: &String| text.len());
    /// assert_eq!(length.run("abc".to_owned()), (3, "abc".to_owned()));
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let result = projection(&state);
            (result, state)
        })
    }
}

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Creates a State that returns the current state unchanged.
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Creates a State that replaces the current state.
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Creates a State that transforms the current state.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, A> Clone for State<S, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<S, A> fmt::Display for State<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<State>")
    }
}

impl<S, A> fmt::Debug for State<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<State>")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<S, A> TypeConstructor for State<S, A> {
    type Inner = A;
    type WithType<B> = State<S, B>;
}

impl<S, A> Functor for State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Transforms the result and keeps the state produced by the run.
    fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (value, next_state) = original_function(state);
            (function(value), next_state)
        })
    }
}

impl<S, A> Apply for State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Runs the function-producing state first, then the value-producing
    /// state on the intermediate state.
    fn apply<B, C>(self, other: State<S, B>) -> State<S, C>
    where
        A: Fn(B) -> C,
        B: Clone + 'static,
        C: 'static,
    {
        let function_state = self.run_function;
        let value_state = other.run_function;
        State::new(move |state| {
            let (function, intermediate) = function_state(state);
            let (value, final_state) = value_state(intermediate);
            (function(value), final_state)
        })
    }
}

impl<S, A> Applicative for State<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    /// A state that returns `value` and leaves the state untouched.
    fn unit(value: A) -> Self {
        Self::new(move |state| (value.clone(), state))
    }
}

impl<S, A> Monad for State<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    fn bind<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (value, intermediate) = original_function(state);
            function(value).run(intermediate)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unit_does_not_modify_state() {
        let state: State<i32, &str> = State::unit("constant");
        assert_eq!(state.run(42), ("constant", 42));
    }

    #[rstest]
    fn fmap_keeps_state_after_run() {
        let state = State::new(|s: i32| (s, s + 1)).fmap(|value| value * 10);
        assert_eq!(state.run(5), (50, 6));
    }

    #[rstest]
    fn apply_threads_state_left_to_right() {
        let functions = State::new(|s: i32| (move |value: i32| value + s, s * 2));
        let values = State::new(|s: i32| (s, s + 1));
        assert_eq!(functions.apply(values).run(3), (9, 7));
    }

    #[rstest]
    fn bind_chains_transitions() {
        let state = State::new(|s: i32| (s, s + 1))
            .bind(|value| State::new(move |s: i32| (value + s, s)));
        assert_eq!(state.run(10), (21, 11));
    }

    #[rstest]
    fn get_put_modify() {
        assert_eq!(State::get().run(7), (7, 7));
        assert_eq!(State::put(100).exec(42), 100);
        assert_eq!(State::modify(|s: i32| s * 2).exec(21), 42);
    }

    #[rstest]
    fn put_then_get_returns_new_state() {
        let state = State::put(5).then(State::get());
        assert_eq!(state.eval(0), 5);
    }

    #[rstest]
    fn clone_shares_transition() {
        let state = State::new(|s: i32| (s * 2, s + 1));
        assert_eq!(state.clone().run(10), state.run(10));
    }

    #[rstest]
    fn display_hides_function() {
        assert_eq!(State::new(|s: i32| (s, s)).to_string(), "<State>");
    }
}
