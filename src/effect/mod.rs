//! Effect monads: computations with an environment, a state or a log.
//!
//! - [`Reader`]: Computations that read from a shared environment
//! - [`State`]: Computations that thread a state
//! - [`Writer`]: Computations that accumulate a log
//!
//! `Reader` and `State` store their function behind an `Rc`, so they can be
//! cloned and run repeatedly but stay on one thread.
//!
//! # Examples
//!
//! ```rust
//! use monadix::effect::{Reader, State, Writer};
//! use monadix::typeclass::{Functor, Monad};
//!
//! let greeting = Reader::asks(|name: &'static str| format!("hello {name}"));
//! assert_eq!(greeting.run("world"), "hello world");
//!
//! let counter = State::new(|count: i32| (count, count + 1)).fmap(|value| value * 2);
//! assert_eq!(counter.run(5), (10, 6));
//!
//! let logged = Writer::with_entry(1, "one").bind(|value| Writer::with_entry(value + 1, "two"));
//! assert_eq!(logged.value(), &2);
//! ```

mod reader;
mod state;
mod writer;

pub use reader::Reader;
pub use state::State;
pub use writer::Writer;
