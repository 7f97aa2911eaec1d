//! # Idiom Drills
//!
//! Small, independent exercises, each with its own tests.
//!
//! ## Concurrency
//! - `checker`: fan-out/fan-in over a list of website checks
//! - `racer`: first responder wins between two HTTP pings
//! - `counter`: mutex-guarded counter shared across threads
//!
//! ## Dependency injection and test doubles
//! - `greet`: write a greeting onto any `io::Write`
//! - `countdown`: countdown with an injected `Sleeper` (stubs, spies)
//! - `context`: store-backed handler that honours cancellation
//!
//! ## Types and traits
//! - `shapes`: area and perimeter through a `Shape` trait
//! - `dictionary`: map-backed dictionary with typed errors
//! - `wallet`: newtype currency with typed errors
//! - `arith`: sums, repeats, quadratic roots
//! - `walk`: visit every string reachable from a value
//!
//! ## HTTP
//! - `player`: toy player-score server on hyper
//!
//! `config` and `telemetry` carry the settings and logging setup shared by
//! the demo binaries.

pub mod arith;
pub mod checker;
pub mod config;
pub mod context;
pub mod countdown;
pub mod counter;
pub mod dictionary;
pub mod greet;
pub mod player;
pub mod racer;
pub mod shapes;
pub mod telemetry;
pub mod walk;
pub mod wallet;

pub use checker::{check_websites, check_websites_async, http_checker};
pub use countdown::{countdown, ConfigurableSleeper, DefaultSleeper, Sleeper};
pub use player::{InMemoryPlayerStore, PlayerServer, PlayerStore};
pub use racer::{configurable_racer, racer, RacerError};
