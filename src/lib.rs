//! # credo — a probabilistic fact store and inference engine
//!
//! `credo` stores named facts with truth-probabilities (optionally with
//! validity time-windows) and applies a fixed catalogue of inference
//! rules to derive new facts back into the store.
//!
//! ## Core concepts
//!
//! - **Fact**: a named proposition with a truth-probability; "true"
//!   means probability strictly above 0.5.
//! - **Temporal fact**: a fact whose validity is bounded to a closed
//!   time window.
//! - **Rule**: a fixed precondition-over-facts → derived-fact mapping;
//!   on success exactly one fact is written, on failure nothing is.
//!
//! Compound facts are plain string labels glued with connective tokens
//! (`" implies "`, `" iff "`, `" and "`, `" or "`, `"not "`); there is
//! no logical-form parser, only exact label reconstruction and lookup.
//!
//! ## Usage
//!
//! ```
//! use credo::{FactStore, InferenceEngine};
//!
//! let mut engine = InferenceEngine::new(FactStore::new());
//! engine.store_mut().tell("rain", 0.6);
//! engine.store_mut().tell("rain implies wet ground", 1.0);
//!
//! assert!(engine.modus_ponens("rain", "wet ground"));
//! assert_eq!(engine.store().ask("wet ground"), Some(1.0));
//! ```
//!
//! The engine is single-threaded and synchronous; `&mut self` on every
//! writing operation gives the no-partial-write guarantee statically.
//! Multi-threaded callers wrap the engine in their own lock.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod engine;
pub mod error;
pub mod expr;
pub mod fact;
pub mod store;
pub mod time;

// Re-export primary types at crate root for convenience
pub use engine::{InferenceEngine, Rule};
pub use error::EvalError;
pub use expr::evaluate;
pub use fact::{Verdict, TRUTH_THRESHOLD};
pub use store::{FactStore, TemporalFact};
pub use time::Window;
